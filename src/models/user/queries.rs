use super::types::*;
use crate::db::DbPool;
use crate::errors::AppError;

/// Insert a new user and return its id. The email is normalized to
/// lowercase so the UNIQUE constraint catches case variants.
pub async fn create(pool: &DbPool, new_user: &NewUser) -> Result<i64, AppError> {
    let now = crate::models::now();
    let result = sqlx::query(
        "INSERT INTO users (email, password, display_name, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(new_user.email.trim().to_lowercase())
    .bind(&new_user.password)
    .bind(new_user.display_name.trim())
    .bind(&now)
    .bind(&now)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Look up a user by email for login.
pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, password, display_name, created_at, updated_at \
         FROM users WHERE email = $1",
    )
    .bind(email.trim().to_lowercase())
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Whether an account already exists for the address.
pub async fn email_taken(pool: &DbPool, email: &str) -> Result<bool, AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(email.trim().to_lowercase())
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}
