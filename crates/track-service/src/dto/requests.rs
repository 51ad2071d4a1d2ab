//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those with constrained
//! fields also implement `Validate`.

use chrono::NaiveDate;
use serde::Deserialize;
use track_core::value_objects::Permission;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// OAuth callback exchange request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Authorization code from the GitHub redirect
    pub code: String,
}

// ============================================================================
// Course Requests
// ============================================================================

/// Create course request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 100, message = "Course name must be 1-100 characters"))]
    pub name: String,
}

// ============================================================================
// Student Requests
// ============================================================================

/// Create student request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: String,

    pub cell: Option<String>,

    #[validate(url(message = "Photo URL must be a valid URL"))]
    pub photo_url: Option<String>,
}

/// Update student request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: Option<String>,

    pub cell: Option<String>,

    #[validate(url(message = "Photo URL must be a valid URL"))]
    pub photo_url: Option<String>,
}

// ============================================================================
// Tracking Requests
// ============================================================================

/// Create activity request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActivityRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 100, message = "Activity name must be 1-100 characters"))]
    pub name: String,
}

/// One rating within a save request
#[derive(Debug, Clone, Deserialize)]
pub struct RatingEntry {
    pub student_id: Uuid,
    pub score: f64,
    pub notes: Option<String>,
}

/// Save ratings for an activity, replacing existing scores
#[derive(Debug, Clone, Deserialize)]
pub struct SaveRatingsRequest {
    pub activity_id: Uuid,
    pub ratings: Vec<RatingEntry>,
}

// ============================================================================
// Invite Requests
// ============================================================================

/// Create invite request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInviteRequest {
    pub permission: Permission,

    /// Required for `coder` invites, forbidden for `tl`
    pub student_id: Option<Uuid>,
}
