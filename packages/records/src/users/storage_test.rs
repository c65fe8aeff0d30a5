// ABOUTME: Tests for user storage layer
// ABOUTME: Verifies creation, lookup, and the unique email constraint

use sqlx::SqlitePool;

use super::storage::UserStorage;
use super::types::{Role, UserCreateInput};
use crate::storage::{StorageError, MIGRATOR};

async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:").await.unwrap();
    MIGRATOR.run(&pool).await.unwrap();
    pool
}

fn donor_input(email: &str) -> UserCreateInput {
    UserCreateInput {
        name: "Test Donor".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$fake-hash".to_string(),
        role: Role::Donor,
        phone: None,
        organization: None,
        language: None,
    }
}

#[tokio::test]
async fn test_create_and_get_user() {
    let pool = setup_test_db().await;
    let storage = UserStorage::new(pool);

    let created = storage
        .create_user(donor_input("donor@example.com"))
        .await
        .unwrap();
    assert_eq!(created.email, "donor@example.com");
    assert_eq!(created.role, Role::Donor);
    assert_eq!(created.language, "en");

    let fetched = storage.get_user(&created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Test Donor");
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let pool = setup_test_db().await;
    let storage = UserStorage::new(pool);

    let result = storage.get_user("no-such-id").await;
    assert!(matches!(result, Err(StorageError::NotFound)));
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let pool = setup_test_db().await;
    let storage = UserStorage::new(pool);

    storage
        .create_user(donor_input("dup@example.com"))
        .await
        .unwrap();

    let result = storage.create_user(donor_input("dup@example.com")).await;
    assert!(matches!(result, Err(StorageError::DuplicateEmail(email)) if email == "dup@example.com"));
}

#[tokio::test]
async fn test_get_user_by_email() {
    let pool = setup_test_db().await;
    let storage = UserStorage::new(pool);

    storage
        .create_user(donor_input("findme@example.com"))
        .await
        .unwrap();

    let found = storage
        .get_user_by_email("findme@example.com")
        .await
        .unwrap();
    assert!(found.is_some());

    let missing = storage
        .get_user_by_email("nobody@example.com")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_password_hash_never_serializes() {
    let pool = setup_test_db().await;
    let storage = UserStorage::new(pool);

    let user = storage
        .create_user(donor_input("private@example.com"))
        .await
        .unwrap();

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
}
