//! User entity representing a registered user in the LeadFlow CRM.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a user, controlling what the CRM lets them do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Full administrative access
    Admin,
    /// Manages a sales team and its leads
    Manager,
    /// Works individual leads
    Sales,
}

impl UserRole {
    /// Returns the canonical string form stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Manager => "MANAGER",
            UserRole::Sales => "SALES",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(UserRole::Admin),
            "MANAGER" => Ok(UserRole::Manager),
            "SALES" => Ok(UserRole::Sales),
            other => Err(format!("Unknown user role: {}", other)),
        }
    }
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique email address used for login
    pub email: String,

    /// Bcrypt hash of the user's password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Role assigned to the user
    pub role: UserRole,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(email: String, password_hash: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the user has administrative access
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
