//! Rating database model

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for ratings table
#[derive(Debug, Clone, FromRow)]
pub struct RatingModel {
    pub id: Uuid,
    pub student_id: Uuid,
    pub activity_id: Uuid,
    pub score: f64,
    pub notes: Option<String>,
}

/// Database model for the stats join of ratings with their activity and student
#[derive(Debug, Clone, FromRow)]
pub struct StatRowModel {
    pub date: chrono::NaiveDate,
    pub activity_id: Uuid,
    pub activity_name: String,
    pub student_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub score: f64,
}
