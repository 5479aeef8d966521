//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
///
/// This is a closed set: callers are expected to match every variant. The
/// presentation layer maps `InvalidToken` to 401 and `UserNotFound` to 404.
///
/// `InvalidToken` deliberately carries no sub-reason. A missing record, a
/// revoked record, an expired record, and a bad signature are all reported
/// identically so that callers cannot probe token state.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::InvalidToken.to_string(), "Invalid refresh token");
        assert_eq!(DomainError::UserNotFound.to_string(), "User not found");

        let err = DomainError::Database {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Database error: connection refused");
    }

    #[test]
    fn test_invalid_token_carries_no_reason() {
        // One variant for every rejection path, so the message is constant
        let err = DomainError::InvalidToken;
        assert!(!err.to_string().contains("revoked"));
        assert!(!err.to_string().contains("expired"));
    }
}
