//! Profile entity - an authenticated user of the dashboard

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Profile entity, created on first GitHub login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    /// Numeric id from the identity provider, the upsert key
    pub github_id: i64,
    pub username: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new Profile with a freshly generated id
    pub fn new(github_id: i64, username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            github_id,
            username: username.into(),
            email: None,
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    /// Set the email address
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Set the avatar URL
    pub fn with_avatar_url(mut self, avatar_url: Option<String>) -> Self {
        self.avatar_url = avatar_url;
        self
    }
}
