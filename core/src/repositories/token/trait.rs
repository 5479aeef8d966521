//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
///
/// This trait defines the contract for managing refresh tokens in the
/// database. The signed token string is the lookup key; revocation is a
/// conditional state transition so that rotation stays race-free.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token record
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved record
    /// * `Err(DomainError)` - Save failed (e.g., duplicate token)
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a non-revoked refresh token record by its exact token string
    ///
    /// Revoked records are not returned; expired records are, since expiry
    /// is checked by the caller against the persisted timestamp.
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - A matching non-revoked record exists
    /// * `Ok(None)` - No such record, or the record is revoked
    /// * `Err(DomainError)` - Database error occurred
    async fn find_active_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Find all refresh token records for a user, regardless of state
    ///
    /// # Returns
    /// * `Ok(Vec<RefreshToken>)` - All records for the user
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError>;

    /// Conditionally revoke a refresh token
    ///
    /// The update applies only where the record is currently un-revoked, so
    /// two concurrent calls for the same token see exactly one `true`.
    ///
    /// # Returns
    /// * `Ok(true)` - The record transitioned from un-revoked to revoked
    /// * `Ok(false)` - No record matched, or it was already revoked
    /// * `Err(DomainError)` - Revocation failed
    async fn revoke_token(&self, token: &str) -> Result<bool, DomainError>;

    /// Delete expired refresh token records for a user
    ///
    /// Called on every issuance to garbage-collect on write; correctness
    /// never depends on it.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired records deleted
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_expired_tokens(&self, user_id: Uuid) -> Result<usize, DomainError>;
}
