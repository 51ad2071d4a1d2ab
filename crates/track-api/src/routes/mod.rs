//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, courses, health, invites, stats, students, tracking};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(course_routes())
        .merge(student_routes())
        .merge(invite_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/github", get(auth::github_authorize))
        .route("/auth/callback", post(auth::github_callback))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/me", get(auth::get_current_user))
}

/// Course routes
fn course_routes() -> Router<AppState> {
    Router::new()
        // Course CRUD
        .route("/courses", post(courses::create_course))
        .route("/courses", get(courses::list_courses))
        .route("/courses/:course_id", get(courses::get_course))
        .route("/courses/:course_id", delete(courses::delete_course))
        // Roster
        .route("/courses/:course_id/students", get(students::list_students))
        .route("/courses/:course_id/students", post(students::add_student))
        // Day-by-day tracking
        .route("/courses/:course_id/days", get(tracking::list_dates))
        .route("/courses/:course_id/days/:date", get(tracking::get_day))
        .route("/courses/:course_id/activities", post(tracking::create_activity))
        .route(
            "/courses/:course_id/activities/:activity_id",
            delete(tracking::delete_activity),
        )
        .route("/courses/:course_id/ratings", put(tracking::save_ratings))
        // Statistics
        .route("/courses/:course_id/stats", get(stats::get_course_stats))
        // Course invites
        .route("/courses/:course_id/invites", get(invites::list_course_invites))
        .route("/courses/:course_id/invites", post(invites::create_invite))
        .route(
            "/courses/:course_id/invites/:token",
            delete(invites::revoke_invite),
        )
}

/// Student routes
fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/students/:student_id", patch(students::update_student))
        .route("/students/:student_id", delete(students::delete_student))
}

/// Invite routes
fn invite_routes() -> Router<AppState> {
    Router::new()
        .route("/invites/:token", get(invites::get_invite))
        .route("/invites/:token/accept", post(invites::accept_invite))
}
