use super::types::*;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::vsl::{progress, taxonomy};

/// Insert a project for the given owner and return the stored row.
pub async fn create(
    pool: &DbPool,
    user_id: i64,
    name: &str,
    description: Option<&str>,
) -> Result<Project, AppError> {
    let now = crate::models::now();
    let name = name.trim().to_string();
    let description = description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from);

    let result = sqlx::query(
        "INSERT INTO projects (user_id, name, description, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(user_id)
    .bind(&name)
    .bind(&description)
    .bind(&now)
    .bind(&now)
    .execute(pool)
    .await?;

    Ok(Project {
        id: result.last_insert_rowid(),
        name,
        description,
        created_at: now.clone(),
        updated_at: now,
    })
}

/// All projects owned by the user, most recently updated first, each
/// with its saved-slide count folded in.
pub async fn find_all_for_user(
    pool: &DbPool,
    user_id: i64,
) -> Result<Vec<ProjectListItem>, AppError> {
    #[derive(sqlx::FromRow)]
    struct Row {
        id: i64,
        name: String,
        description: Option<String>,
        created_at: String,
        updated_at: String,
        saved_slides: i64,
    }

    let rows = sqlx::query_as::<_, Row>(
        "SELECT p.id, p.name, p.description, p.created_at, p.updated_at, \
                (SELECT COUNT(*) FROM slide_contents sc WHERE sc.project_id = p.id) AS saved_slides \
         FROM projects p \
         WHERE p.user_id = $1 \
         ORDER BY p.updated_at DESC, p.id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let items = rows
        .into_iter()
        .map(|row| ProjectListItem {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
            saved_slides: row.saved_slides,
            total_slides: i64::from(taxonomy::TOTAL_SLIDES),
            progress: progress::percentage(row.saved_slides as usize),
        })
        .collect();

    Ok(items)
}

/// One project, but only if the user owns it. A missing row and a row
/// owned by someone else are indistinguishable on purpose.
pub async fn find_by_id_for_user(
    pool: &DbPool,
    user_id: i64,
    project_id: i64,
) -> Result<Option<Project>, AppError> {
    let project = sqlx::query_as::<_, Project>(
        "SELECT id, name, description, created_at, updated_at \
         FROM projects WHERE id = $1 AND user_id = $2",
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(project)
}

/// Delete a project and all of its slide content. Returns false when
/// the project does not exist or belongs to another user.
pub async fn delete_for_user(
    pool: &DbPool,
    user_id: i64,
    project_id: i64,
) -> Result<bool, AppError> {
    let mut tx = pool.begin().await?;

    let owned: Option<i64> =
        sqlx::query_scalar("SELECT id FROM projects WHERE id = $1 AND user_id = $2")
            .bind(project_id)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
    if owned.is_none() {
        return Ok(false);
    }

    sqlx::query("DELETE FROM slide_contents WHERE project_id = $1")
        .bind(project_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(project_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(true)
}
