//! Visibility scope computed by the access evaluator

use uuid::Uuid;

/// The set of students a user may see within a course.
///
/// Owners and `tl` shares see everything, a `coder` share sees exactly
/// one student, and users without ownership or a share see nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// No access at all - caller must not expose any student rows
    None,
    /// Full access to every student in the course
    All,
    /// Access restricted to a single student
    Single(Uuid),
}

impl Visibility {
    /// Check whether a specific student is inside this scope
    #[must_use]
    pub fn can_view_student(&self, student_id: Uuid) -> bool {
        match self {
            Self::None => false,
            Self::All => true,
            Self::Single(id) => *id == student_id,
        }
    }

    /// Whether the user has any access to the course
    #[must_use]
    pub fn has_access(&self) -> bool {
        !matches!(self, Self::None)
    }
}
