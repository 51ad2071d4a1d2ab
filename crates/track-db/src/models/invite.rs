//! Invite database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for invites table
///
/// `permission` is stored as TEXT and parsed on the way out; the table
/// constrains it to the known values.
#[derive(Debug, Clone, FromRow)]
pub struct InviteModel {
    pub token: String,
    pub course_id: Uuid,
    pub permission: String,
    pub student_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl InviteModel {
    /// Check if invite is expired
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
