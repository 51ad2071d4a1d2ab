//! Invite entity - a single-use, time-limited offer of course access

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::value_objects::Permission;

/// Invite entity.
///
/// Created by a course owner, read once by a prospective acceptor, and
/// deleted on acceptance. Never updated in place. Expiry is computed at
/// resolve time from `expires_at`; an expired row is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invite {
    pub token: String,
    pub course_id: Uuid,
    pub permission: Permission,
    /// Populated iff `permission` is `coder`
    pub student_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Invite {
    /// Create a new Invite with a freshly generated token
    pub fn new(
        course_id: Uuid,
        permission: Permission,
        student_id: Option<Uuid>,
        ttl: Duration,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            token: generate_invite_token(),
            course_id,
            permission,
            student_id,
            created_at,
            expires_at: created_at + ttl,
        }
    }

    /// Check if the invite is past its expiry instant
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Check the permission/student pairing: coder requires a student,
    /// tl forbids one. Re-validated on every resolve as defense in depth.
    #[must_use]
    pub fn scope_is_valid(&self) -> bool {
        self.permission.requires_student() == self.student_id.is_some()
    }

    /// The full acceptance link distributed to the invitee
    #[must_use]
    pub fn url(&self, origin: &str) -> String {
        format!("{}/invite/{}", origin.trim_end_matches('/'), self.token)
    }
}

/// Generate a random invite token.
///
/// 32 alphanumeric characters, generated server-side; the token is the
/// only secret in the link, so it must be unguessable.
pub fn generate_invite_token() -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 32;

    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
