//! User model tests: account creation, lookup, email normalization,
//! duplicate rejection, and password verification.

mod common;

use common::*;
use vslkit::auth::password;
use vslkit::models::user::{self, NewUser};

#[tokio::test]
async fn create_and_find_by_email() {
    let pool = setup_test_pool().await;

    let user_id = create_test_user(&pool).await;
    assert!(user_id > 0);

    let found = user::find_by_email(&pool, TEST_EMAIL)
        .await
        .expect("Query failed")
        .expect("User not found");

    assert_eq!(found.id, user_id);
    assert_eq!(found.email, TEST_EMAIL);
    assert_eq!(found.display_name, TEST_DISPLAY_NAME);
    assert!(!found.created_at.is_empty());
}

#[tokio::test]
async fn email_is_normalized_to_lowercase() {
    let pool = setup_test_pool().await;

    create_user_with_email(&pool, "  Writer@Example.COM ").await;

    let found = user::find_by_email(&pool, "writer@example.com")
        .await
        .expect("Query failed")
        .expect("User not found");
    assert_eq!(found.email, "writer@example.com");

    // Lookup normalizes too
    assert!(
        user::find_by_email(&pool, "WRITER@EXAMPLE.COM")
            .await
            .expect("Query failed")
            .is_some()
    );
}

#[tokio::test]
async fn email_taken_detects_existing_account() {
    let pool = setup_test_pool().await;

    assert!(!user::email_taken(&pool, TEST_EMAIL).await.expect("Query failed"));
    create_test_user(&pool).await;
    assert!(user::email_taken(&pool, TEST_EMAIL).await.expect("Query failed"));
    assert!(user::email_taken(&pool, "Writer@example.com").await.expect("Query failed"));
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let pool = setup_test_pool().await;

    create_test_user(&pool).await;

    let hash = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");
    let duplicate = NewUser {
        email: TEST_EMAIL.to_string(),
        password: hash,
        display_name: "Someone Else".to_string(),
    };
    assert!(user::create(&pool, &duplicate).await.is_err());
}

#[tokio::test]
async fn stored_hash_verifies_original_password_only() {
    let pool = setup_test_pool().await;

    create_test_user(&pool).await;
    let found = user::find_by_email(&pool, TEST_EMAIL)
        .await
        .expect("Query failed")
        .expect("User not found");

    assert!(password::verify_password(TEST_PASSWORD, &found.password).unwrap());
    assert!(!password::verify_password("wrong password", &found.password).unwrap());
}
