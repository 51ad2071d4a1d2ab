//! Student entity - belongs to exactly one course

use uuid::Uuid;

/// Student entity, the unit of restriction for `coder` permission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: Uuid,
    pub course_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Cell/group name within the course, if any
    pub cell: Option<String>,
    pub photo_url: Option<String>,
}

impl Student {
    /// Create a new Student with a freshly generated id
    pub fn new(
        course_id: Uuid,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            course_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            cell: None,
            photo_url: None,
        }
    }

    /// Set the cell/group name
    pub fn with_cell(mut self, cell: Option<String>) -> Self {
        self.cell = cell;
        self
    }

    /// Set the photo URL
    pub fn with_photo_url(mut self, photo_url: Option<String>) -> Self {
        self.photo_url = photo_url;
        self
    }

    /// Display name used in listings and statistics
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
