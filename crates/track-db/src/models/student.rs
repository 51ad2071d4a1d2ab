//! Student database model

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for students table
#[derive(Debug, Clone, FromRow)]
pub struct StudentModel {
    pub id: Uuid,
    pub course_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub cell: Option<String>,
    pub photo_url: Option<String>,
}
