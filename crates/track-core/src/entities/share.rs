//! Share entity - a durable access grant for a (course, user) pair

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::Invite;
use crate::value_objects::Permission;

/// Share entity.
///
/// At most one share exists per `(course_id, user_id)`; accepting a
/// second invitation for the same pair overwrites the first. Shares
/// never expire and are only created through invite acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub course_id: Uuid,
    pub user_id: Uuid,
    pub permission: Permission,
    /// Populated iff `permission` is `coder`
    pub student_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Share {
    /// Build the share an accepted invite grants to `user_id`.
    ///
    /// The student scope is forced to null for `tl` even if the invite
    /// row somehow carried one.
    #[must_use]
    pub fn from_invite(invite: &Invite, user_id: Uuid) -> Self {
        let student_id = match invite.permission {
            Permission::Coder => invite.student_id,
            Permission::Tl => None,
        };
        Self {
            course_id: invite.course_id,
            user_id,
            permission: invite.permission,
            student_id,
            created_at: Utc::now(),
        }
    }
}
