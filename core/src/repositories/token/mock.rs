//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::trait_::TokenRepository;

/// Mock token repository for testing
#[derive(Clone)]
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Fetch a record by token string regardless of revocation state
    pub async fn get(&self, token: &str) -> Option<RefreshToken> {
        let tokens = self.tokens.read().await;
        tokens.get(token).cloned()
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token) {
            return Err(DomainError::Validation {
                message: "Token already exists".to_string(),
            });
        }

        tokens.insert(token.token.clone(), token.clone());
        Ok(token)
    }

    async fn find_active_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).filter(|t| !t.is_revoked).cloned())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn revoke_token(&self, token: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;

        // Same contract as `UPDATE ... WHERE token = ? AND is_revoked = FALSE`
        match tokens.get_mut(token) {
            Some(record) if !record.is_revoked => {
                record.revoke();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_expired_tokens(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let now = Utc::now();
        let initial_count = tokens.len();

        tokens.retain(|_, t| !(t.user_id == user_id && t.expires_at < now));

        Ok(initial_count - tokens.len())
    }
}
