use serde::{Deserialize, Serialize};

/// A script project as stored. Rows are always scoped to their owner;
/// nothing here leaks across accounts.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Project plus completion numbers, as shown on the dashboard and
/// returned by the list API.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectListItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub saved_slides: i64,
    pub total_slides: i64,
    pub progress: u8,
}

/// Form input for creating a project from the dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub csrf_token: String,
}
