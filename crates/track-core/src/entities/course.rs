//! Course entity - a tracked course owned by a single tutor

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Course entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    /// URL-safe identifier derived from the name, unique per owner
    pub slug: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Create a new Course with a freshly generated id and slug
    pub fn new(name: impl Into<String>, owner_id: Uuid) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            id: Uuid::new_v4(),
            name,
            slug,
            owner_id,
            created_at: Utc::now(),
        }
    }

    /// The owner implicitly has full access without a share row
    #[must_use]
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }
}

/// Derive a URL-safe slug from a course name.
///
/// Lowercases, maps runs of non-alphanumeric characters to single
/// hyphens, and trims leading/trailing hyphens.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
