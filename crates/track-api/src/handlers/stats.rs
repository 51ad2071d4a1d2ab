//! Statistics handlers
//!
//! Endpoints for course statistics.

use axum::{
    extract::{Path, State},
    Json,
};

use track_service::{CourseStatsResponse, StatsService};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

use super::courses::parse_course_id;

/// Get per-day and per-activity averages for a course
///
/// GET /courses/{course_id}/stats
pub async fn get_course_stats(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<String>,
) -> ApiResult<Json<CourseStatsResponse>> {
    let course_id = parse_course_id(&course_id)?;

    let service = StatsService::new(state.service_context());
    let response = service.course_stats(course_id, auth.user_id).await?;
    Ok(Json(response))
}
