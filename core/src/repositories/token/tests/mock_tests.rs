//! Tests for the mock token repository

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::repositories::token::{MockTokenRepository, TokenRepository};

fn live_record(user_id: Uuid, token: &str) -> RefreshToken {
    RefreshToken::new(user_id, token.to_string(), Utc::now() + Duration::days(7))
}

#[tokio::test]
async fn test_save_and_find_active() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();

    repo.save_refresh_token(live_record(user_id, "tok-1"))
        .await
        .unwrap();

    let found = repo.find_active_token("tok-1").await.unwrap().unwrap();
    assert_eq!(found.user_id, user_id);
    assert!(!found.is_revoked);

    assert!(repo.find_active_token("tok-2").await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_duplicate_token_fails() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();

    repo.save_refresh_token(live_record(user_id, "tok-1"))
        .await
        .unwrap();

    let result = repo.save_refresh_token(live_record(user_id, "tok-1")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_revoke_is_conditional() {
    let repo = MockTokenRepository::new();
    repo.save_refresh_token(live_record(Uuid::new_v4(), "tok-1"))
        .await
        .unwrap();

    // First revocation flips the record, the second finds nothing to flip
    assert!(repo.revoke_token("tok-1").await.unwrap());
    assert!(!repo.revoke_token("tok-1").await.unwrap());

    // Unknown tokens also report false
    assert!(!repo.revoke_token("tok-9").await.unwrap());
}

#[tokio::test]
async fn test_revoked_token_not_returned_as_active() {
    let repo = MockTokenRepository::new();
    repo.save_refresh_token(live_record(Uuid::new_v4(), "tok-1"))
        .await
        .unwrap();

    repo.revoke_token("tok-1").await.unwrap();

    assert!(repo.find_active_token("tok-1").await.unwrap().is_none());
    // The record itself still exists
    assert!(repo.get("tok-1").await.unwrap().is_revoked);
}

#[tokio::test]
async fn test_delete_expired_tokens_scoped_to_user() {
    let repo = MockTokenRepository::new();
    let user_a = Uuid::new_v4();
    let user_b = Uuid::new_v4();

    let expired = RefreshToken::new(
        user_a,
        "expired-a".to_string(),
        Utc::now() - Duration::hours(1),
    );
    repo.save_refresh_token(expired).await.unwrap();
    repo.save_refresh_token(live_record(user_a, "live-a"))
        .await
        .unwrap();

    let expired_other = RefreshToken::new(
        user_b,
        "expired-b".to_string(),
        Utc::now() - Duration::hours(1),
    );
    repo.save_refresh_token(expired_other).await.unwrap();

    let deleted = repo.delete_expired_tokens(user_a).await.unwrap();
    assert_eq!(deleted, 1);

    // Live record for user A and expired record for user B are untouched
    assert!(repo.find_active_token("live-a").await.unwrap().is_some());
    assert!(repo.get("expired-b").await.unwrap().user_id == user_b);
}

#[tokio::test]
async fn test_find_by_user_id_returns_all_states() {
    let repo = MockTokenRepository::new();
    let user_id = Uuid::new_v4();

    repo.save_refresh_token(live_record(user_id, "tok-1"))
        .await
        .unwrap();
    repo.save_refresh_token(live_record(user_id, "tok-2"))
        .await
        .unwrap();
    repo.revoke_token("tok-2").await.unwrap();

    let records = repo.find_by_user_id(user_id).await.unwrap();
    assert_eq!(records.len(), 2);
}
