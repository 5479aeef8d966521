//! Authentication configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
///
/// Access and refresh tokens are signed with distinct secrets so that a
/// refresh token can never be presented where an access token is expected.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing access tokens
    pub access_secret: String,

    /// Secret key for signing refresh tokens (must differ from `access_secret`)
    pub refresh_secret: String,

    /// Access token expiry time in minutes
    pub access_expiry_minutes: i64,

    /// Refresh token expiry time in days
    pub refresh_expiry_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from("access-secret-change-in-production"),
            refresh_secret: String::from("refresh-secret-change-in-production"),
            access_expiry_minutes: 15,
            refresh_expiry_days: 7,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with explicit secrets
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let access_secret =
            std::env::var("JWT_ACCESS_SECRET").unwrap_or(defaults.access_secret);
        let refresh_secret =
            std::env::var("JWT_REFRESH_SECRET").unwrap_or(defaults.refresh_secret);
        let access_expiry_minutes = std::env::var("JWT_ACCESS_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_expiry_minutes);
        let refresh_expiry_days = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.refresh_expiry_days);

        Self {
            access_secret,
            refresh_secret,
            access_expiry_minutes,
            refresh_expiry_days,
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_expiry_minutes = minutes;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_expiry_days = days;
        self
    }

    /// Check if either secret still carries a default value (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        let defaults = Self::default();
        self.access_secret == defaults.access_secret
            || self.refresh_secret == defaults.refresh_secret
    }
}
