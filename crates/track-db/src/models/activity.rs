//! Activity database model

use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for activities table
#[derive(Debug, Clone, FromRow)]
pub struct ActivityModel {
    pub id: Uuid,
    pub course_id: Uuid,
    pub date: NaiveDate,
    pub name: String,
}
