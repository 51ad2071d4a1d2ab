//! Rating entity - one score per (student, activity) pair

use uuid::Uuid;

/// Valid score range, inclusive
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 10.0;

/// Rating entity.
///
/// `(student_id, activity_id)` is the upsert key: saving the day's
/// ratings a second time overwrites, it does not duplicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: Uuid,
    pub student_id: Uuid,
    pub activity_id: Uuid,
    pub score: f64,
    pub notes: Option<String>,
}

impl Rating {
    /// Create a new Rating with a freshly generated id
    pub fn new(student_id: Uuid, activity_id: Uuid, score: f64, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            activity_id,
            score,
            notes,
        }
    }

    /// Check the score lies within the allowed range
    #[must_use]
    pub fn score_is_valid(&self) -> bool {
        (SCORE_MIN..=SCORE_MAX).contains(&self.score)
    }
}
