//! Activity entity - a rated activity on a specific course day

use chrono::NaiveDate;
use uuid::Uuid;

/// Activity entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: Uuid,
    pub course_id: Uuid,
    /// The course day this activity belongs to
    pub date: NaiveDate,
    pub name: String,
}

impl Activity {
    /// Create a new Activity with a freshly generated id
    pub fn new(course_id: Uuid, date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            course_id,
            date,
            name: name.into(),
        }
    }
}
