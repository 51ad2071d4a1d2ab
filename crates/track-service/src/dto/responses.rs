//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use track_core::value_objects::Permission;
use uuid::Uuid;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness check response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: ProfileResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: ProfileResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// Profile response
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Course Responses
// ============================================================================

/// Course response
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Student Responses
// ============================================================================

/// Student response
#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

// ============================================================================
// Tracking Responses
// ============================================================================

/// Activity response
#[derive(Debug, Clone, Serialize)]
pub struct ActivityResponse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub date: NaiveDate,
    pub name: String,
}

/// Rating response
#[derive(Debug, Clone, Serialize)]
pub struct RatingResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub activity_id: Uuid,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One course day: its activities and every visible rating
#[derive(Debug, Serialize)]
pub struct DaySheetResponse {
    pub date: NaiveDate,
    pub activities: Vec<ActivityResponse>,
    pub ratings: Vec<RatingResponse>,
}

// ============================================================================
// Invite Responses
// ============================================================================

/// Invite response returned to the issuing owner
#[derive(Debug, Clone, Serialize)]
pub struct InviteResponse {
    pub token: String,
    pub url: String,
    pub course_id: Uuid,
    pub permission: Permission,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// What a prospective acceptor sees before accepting. Deliberately
/// omits the owner's identity and the rest of the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvitePreviewResponse {
    pub course_id: Uuid,
    pub course_name: String,
    pub permission: Permission,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    pub expires_at: DateTime<Utc>,
}

/// Share response
#[derive(Debug, Clone, Serialize)]
pub struct ShareResponse {
    pub course_id: Uuid,
    pub user_id: Uuid,
    pub permission: Permission,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Stats Responses
// ============================================================================

/// A single student's score on one activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentScore {
    pub student_id: Uuid,
    pub student_name: String,
    pub score: f64,
}

/// Aggregated statistics for one activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityStats {
    pub activity_id: Uuid,
    pub name: String,
    pub average: f64,
    pub scores: Vec<StudentScore>,
}

/// Aggregated statistics for one course day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStats {
    pub date: NaiveDate,
    pub average: f64,
    pub activities: Vec<ActivityStats>,
}

/// Full course statistics, day by day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseStatsResponse {
    pub days: Vec<DayStats>,
}
