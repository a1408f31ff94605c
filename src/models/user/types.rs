/// Full user row, password hash included. Only the login flow reads
/// this; display data travels in the session, never the hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for account creation. `password` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub display_name: String,
}
