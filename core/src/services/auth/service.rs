//! Main authentication service implementation

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::TokenService;

/// Authentication service for credential checks and the token lifecycle
///
/// Both repositories are injected at construction so the service can run
/// against the MySQL implementations in production and in-memory fakes in
/// tests.
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// User repository for credential lookup
    user_repository: Arc<U>,
    /// Token service for JWT minting and refresh token state
    token_service: Arc<TokenService<T>>,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService<T>>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Validate an email / password pair
    ///
    /// Looks the user up by exact email match and compares the plaintext
    /// password against the stored bcrypt hash. An unknown email and a
    /// failed comparison both come back as `Ok(None)` so a caller cannot
    /// tell which one happened. No side effects.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - Credentials match the stored user
    /// * `Ok(None)` - No match
    /// * `Err(DomainError)` - Repository failure
    pub async fn validate_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> DomainResult<Option<User>> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        // A malformed stored hash also reads as a mismatch
        match bcrypt::verify(password, &user.password_hash) {
            Ok(true) => Ok(Some(user)),
            _ => Ok(None),
        }
    }

    /// Log a user in, returning a fresh token pair
    ///
    /// Earlier sessions stay valid; only rotation revokes a specific
    /// predecessor token.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Credentials matched and a pair was issued
    /// * `Err(DomainError::InvalidCredentials)` - No matching user
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let user = self
            .validate_credentials(email, password)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        self.token_service.issue_token_pair(user.id, user.role).await
    }

    /// Exchange a refresh token for a new pair, revoking the presented one
    ///
    /// Ordered failure points:
    /// 1-3. Record lookup, persisted expiry, and signature verification
    ///      (see [`TokenService::verify_refresh_token`]) - `InvalidToken`.
    /// 4. The owning user must still exist - `UserNotFound`. The presented
    ///    record is left un-revoked in this case.
    /// 5. Conditional revocation of the presented record. Zero rows updated
    ///    means another rotation won the race - `InvalidToken`.
    /// 6. A fresh pair is issued for the resolved user.
    ///
    /// A presented token can therefore be exchanged exactly once, even under
    /// concurrent calls.
    pub async fn rotate_refresh_token(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let claims = self.token_service.verify_refresh_token(refresh_token).await?;

        let user_id = claims.user_id().map_err(|_| DomainError::InvalidToken)?;
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        if !self.token_service.revoke_refresh_token(refresh_token).await? {
            // Lost a concurrent rotation between lookup and revocation
            debug!("Refresh token already revoked during rotation");
            return Err(DomainError::InvalidToken);
        }

        self.token_service.issue_token_pair(user.id, user.role).await
    }

    /// Log out by revoking the presented refresh token
    ///
    /// Unknown or already-revoked tokens are a no-op; logout is idempotent.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        self.token_service.revoke_refresh_token(refresh_token).await?;
        Ok(())
    }
}
