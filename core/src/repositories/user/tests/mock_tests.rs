//! Tests for the mock user repository

use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::repositories::user::{MockUserRepository, UserRepository};

fn sample_user(email: &str) -> User {
    User::new(email.to_string(), "$2b$04$hash".to_string(), UserRole::Sales)
}

#[tokio::test]
async fn test_create_and_find_by_email() {
    let repo = MockUserRepository::new();
    let user = repo.create(sample_user("a@x.com")).await.unwrap();

    let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(found.id, user.id);

    assert!(repo.find_by_email("nobody@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_duplicate_email_fails() {
    let repo = MockUserRepository::new();
    repo.create(sample_user("a@x.com")).await.unwrap();

    let result = repo.create(sample_user("a@x.com")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_find_by_id_and_delete() {
    let repo = MockUserRepository::new();
    let user = repo.create(sample_user("a@x.com")).await.unwrap();

    assert!(repo.find_by_id(user.id).await.unwrap().is_some());

    assert!(repo.delete(user.id).await.unwrap());
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());

    // Deleting again reports not found
    assert!(!repo.delete(user.id).await.unwrap());
    assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
}
