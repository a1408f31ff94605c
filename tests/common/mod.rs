//! Shared test infrastructure for model layer tests.
//!
//! Every test gets its own in-memory SQLite database with the full
//! schema applied, so tests are independent and need no external
//! services.

#![allow(dead_code)]

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use vslkit::auth::password;
use vslkit::db::{DbPool, MIGRATOR};
use vslkit::models::user::{self, NewUser};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const TEST_EMAIL: &str = "writer@example.com";
pub const TEST_PASSWORD: &str = "correct-horse-battery";
pub const TEST_DISPLAY_NAME: &str = "Test Writer";

// ============================================================================
// DATABASE SETUP
// ============================================================================

/// Open an in-memory database and run all migrations.
///
/// The pool is pinned to a single connection that never expires, since
/// every new connection to `sqlite::memory:` would be a fresh empty
/// database.
pub async fn setup_test_pool() -> DbPool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse database URL")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");
    pool
}

/// Create the standard test user and return its id.
pub async fn create_test_user(pool: &DbPool) -> i64 {
    create_user_with_email(pool, TEST_EMAIL).await
}

/// Create a user with the given email and the standard test password.
pub async fn create_user_with_email(pool: &DbPool, email: &str) -> i64 {
    let hash = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");
    let new_user = NewUser {
        email: email.to_string(),
        password: hash,
        display_name: TEST_DISPLAY_NAME.to_string(),
    };
    user::create(pool, &new_user).await.expect("Failed to create user")
}
