//! Main token service implementation

use chrono::{Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::warn;
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, TokenPair};
use crate::domain::entities::user::UserRole;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Service for minting, verifying, and revoking JWT tokens
///
/// Access tokens are self-contained and never persisted. Refresh tokens are
/// persisted by their signed string so they can be revoked and rotated; both
/// the persisted record and the signature must agree before a refresh token
/// is honored.
pub struct TokenService<R: TokenRepository> {
    pub(crate) repository: R,
    config: TokenServiceConfig,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Token repository for refresh token persistence
    /// * `config` - Token service configuration
    pub fn new(repository: R, config: TokenServiceConfig) -> Self {
        let access_encoding_key = EncodingKey::from_secret(config.access_secret.as_bytes());
        let access_decoding_key = DecodingKey::from_secret(config.access_secret.as_bytes());
        let refresh_encoding_key = EncodingKey::from_secret(config.refresh_secret.as_bytes());
        let refresh_decoding_key = DecodingKey::from_secret(config.refresh_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            repository,
            config,
            access_encoding_key,
            access_decoding_key,
            refresh_encoding_key,
            refresh_decoding_key,
            validation,
        }
    }

    /// Issues a new token pair (access + refresh) for a user
    ///
    /// Mints both tokens, garbage-collects the user's expired refresh token
    /// records, and persists the new refresh token record. Cleanup failures
    /// are logged and ignored; a persistence failure fails the whole
    /// operation. Previously issued live tokens are left untouched, so a
    /// user may hold several valid sessions at once.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The issued pair
    /// * `Err(DomainError)` - Minting or persistence failed
    pub async fn issue_token_pair(
        &self,
        user_id: Uuid,
        role: UserRole,
    ) -> DomainResult<TokenPair> {
        let access_token = self.generate_access_token(user_id, role)?;

        let refresh_claims = Claims::new(
            user_id,
            role,
            Duration::days(self.config.refresh_token_expiry_days),
        );
        let refresh_token = self.encode_jwt(&refresh_claims, &self.refresh_encoding_key)?;

        // Absolute expiry for the persisted record, taken from the claim set
        let expires_at = Utc
            .timestamp_opt(refresh_claims.exp, 0)
            .single()
            .ok_or_else(|| DomainError::Internal {
                message: "Invalid refresh token expiry timestamp".to_string(),
            })?;

        // Garbage collection on write; bounds storage growth but is not
        // required for correctness
        if let Err(e) = self.repository.delete_expired_tokens(user_id).await {
            warn!("Failed to clean up expired refresh tokens: {}", e);
        }

        let record = RefreshToken::new(user_id, refresh_token.clone(), expires_at);
        self.repository.save_refresh_token(record).await?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_minutes * 60,
            self.config.refresh_token_expiry_days * 24 * 60 * 60,
        ))
    }

    /// Generates a self-contained access token
    fn generate_access_token(&self, user_id: Uuid, role: UserRole) -> DomainResult<String> {
        let claims = Claims::new(
            user_id,
            role,
            Duration::minutes(self.config.access_token_expiry_minutes),
        );
        self.encode_jwt(&claims, &self.access_encoding_key)
    }

    /// Encodes claims into a JWT with the given key
    fn encode_jwt(&self, claims: &Claims, key: &EncodingKey) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, key).map_err(|e| DomainError::Internal {
            message: format!("Token generation failed: {}", e),
        })
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if the signature and expiry hold
    /// * `Err(DomainError::InvalidToken)` - Token is invalid, expired, or malformed
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data = decode::<Claims>(token, &self.access_decoding_key, &self.validation)
            .map_err(|_| DomainError::InvalidToken)?;

        Ok(token_data.claims)
    }

    /// Verifies a refresh token against record state and signature
    ///
    /// Three checks, in order, each failing closed as `InvalidToken`:
    /// 1. A non-revoked record for the exact token string must exist
    ///    (missing covers never-issued, already-rotated, and revoked).
    /// 2. The persisted expiry must lie in the future. This uses the record,
    ///    not the signature: the record is the authority for revocation and
    ///    single-use state.
    /// 3. The signature and the embedded expiry must verify against the
    ///    refresh secret: the signature is the authority for tamper
    ///    evidence. A discrepancy between record and claims still fails.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The verified claims
    /// * `Err(DomainError::InvalidToken)` - Any check failed
    pub async fn verify_refresh_token(&self, token: &str) -> DomainResult<Claims> {
        let record = self
            .repository
            .find_active_token(token)
            .await?
            .ok_or(DomainError::InvalidToken)?;

        if record.expires_at <= Utc::now() {
            return Err(DomainError::InvalidToken);
        }

        let token_data = decode::<Claims>(token, &self.refresh_decoding_key, &self.validation)
            .map_err(|_| DomainError::InvalidToken)?;

        Ok(token_data.claims)
    }

    /// Revokes a refresh token record
    ///
    /// The underlying update is conditional on the record being un-revoked,
    /// so concurrent revocations of the same token yield exactly one `true`.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The record was revoked by this call
    /// * `Ok(false)` - No un-revoked record matched
    /// * `Err(DomainError)` - Revocation failed
    pub async fn revoke_refresh_token(&self, token: &str) -> DomainResult<bool> {
        self.repository.revoke_token(token).await
    }
}
