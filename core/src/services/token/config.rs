//! Configuration for the token service

use lf_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for signing access tokens
    pub access_secret: String,
    /// Secret for signing refresh tokens, distinct from the access secret
    pub refresh_secret: String,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_secret: "development-access-secret-please-change".to_string(),
            refresh_secret: "development-refresh-secret-please-change".to_string(),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            access_secret: config.access_secret,
            refresh_secret: config.refresh_secret,
            access_token_expiry_minutes: config.access_expiry_minutes,
            refresh_token_expiry_days: config.refresh_expiry_days,
        }
    }
}
