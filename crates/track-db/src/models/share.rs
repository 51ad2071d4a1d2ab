//! Share database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the course_shares table
#[derive(Debug, Clone, FromRow)]
pub struct ShareModel {
    pub course_id: Uuid,
    pub user_id: Uuid,
    pub permission: String,
    pub student_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
