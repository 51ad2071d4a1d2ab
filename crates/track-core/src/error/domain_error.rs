//! Domain error type

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by domain operations and repositories
#[derive(Debug, Error)]
pub enum DomainError {
    /// The token does not resolve to a live invite. Unknown, expired and
    /// already-claimed tokens are deliberately indistinguishable.
    #[error("Invite is invalid or expired")]
    InvalidOrExpired,

    #[error("Only the course owner may perform this action")]
    NotOwner,

    #[error("Invalid invite scope: {0}")]
    InvalidScope(String),

    #[error("Failed to persist share: {0}")]
    UpsertFailed(String),

    #[error("Failed to remove invite token: {0}")]
    TokenCleanupFailed(String),

    #[error("Authentication redirect failed: {0}")]
    AuthRedirectFailed(String),

    #[error("Course not found: {0}")]
    CourseNotFound(Uuid),

    #[error("Student not found: {0}")]
    StudentNotFound(Uuid),

    #[error("Profile not found: {0}")]
    ProfileNotFound(Uuid),

    #[error("Course slug already in use: {0}")]
    SlugTaken(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidOrExpired => "INVITE_INVALID_OR_EXPIRED",
            Self::NotOwner => "NOT_OWNER",
            Self::InvalidScope(_) => "INVALID_SCOPE",
            Self::UpsertFailed(_) => "SHARE_UPSERT_FAILED",
            Self::TokenCleanupFailed(_) => "TOKEN_CLEANUP_FAILED",
            Self::AuthRedirectFailed(_) => "AUTH_REDIRECT_FAILED",
            Self::CourseNotFound(_) => "COURSE_NOT_FOUND",
            Self::StudentNotFound(_) => "STUDENT_NOT_FOUND",
            Self::ProfileNotFound(_) => "PROFILE_NOT_FOUND",
            Self::SlugTaken(_) => "SLUG_TAKEN",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error means the target does not exist (maps to 404)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::InvalidOrExpired
                | Self::CourseNotFound(_)
                | Self::StudentNotFound(_)
                | Self::ProfileNotFound(_)
        )
    }

    /// Whether this error came from bad input (maps to 400/422)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidScope(_) | Self::ValidationError(_))
    }

    /// Whether this error is an authorization failure (maps to 403)
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotOwner)
    }

    /// Whether this error represents a state conflict (maps to 409)
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::SlugTaken(_))
    }
}
