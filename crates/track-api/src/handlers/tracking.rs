//! Tracking handlers
//!
//! Endpoints for day-by-day activity and rating entry.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use uuid::Uuid;

use track_service::{
    ActivityResponse, CreateActivityRequest, DaySheetResponse, RatingResponse,
    SaveRatingsRequest, TrackingService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

use super::courses::parse_course_id;

/// List the dates of a course that have activities
///
/// GET /courses/{course_id}/days
pub async fn list_dates(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<String>,
) -> ApiResult<Json<Vec<NaiveDate>>> {
    let course_id = parse_course_id(&course_id)?;

    let service = TrackingService::new(state.service_context());
    let dates = service.list_dates(course_id, auth.user_id).await?;
    Ok(Json(dates))
}

/// Get the activities and visible ratings of one course day
///
/// GET /courses/{course_id}/days/{date}
pub async fn get_day(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((course_id, date)): Path<(String, String)>,
) -> ApiResult<Json<DaySheetResponse>> {
    let course_id = parse_course_id(&course_id)?;
    let date: NaiveDate = date
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid date format, expected YYYY-MM-DD"))?;

    let service = TrackingService::new(state.service_context());
    let response = service.get_day(course_id, auth.user_id, date).await?;
    Ok(Json(response))
}

/// Create an activity on a course day
///
/// POST /courses/{course_id}/activities
pub async fn create_activity(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateActivityRequest>,
) -> ApiResult<Created<Json<ActivityResponse>>> {
    let course_id = parse_course_id(&course_id)?;

    let service = TrackingService::new(state.service_context());
    let response = service
        .create_activity(course_id, auth.user_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Delete an activity and its ratings
///
/// DELETE /courses/{course_id}/activities/{activity_id}
pub async fn delete_activity(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((course_id, activity_id)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let course_id = parse_course_id(&course_id)?;
    let activity_id: Uuid = activity_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid activity_id format"))?;

    let service = TrackingService::new(state.service_context());
    service
        .delete_activity(course_id, activity_id, auth.user_id)
        .await?;
    Ok(NoContent)
}

/// Save the ratings for an activity, overwriting existing scores
///
/// PUT /courses/{course_id}/ratings
pub async fn save_ratings(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<String>,
    Json(request): Json<SaveRatingsRequest>,
) -> ApiResult<Json<Vec<RatingResponse>>> {
    let course_id = parse_course_id(&course_id)?;

    let service = TrackingService::new(state.service_context());
    let response = service.save_ratings(course_id, auth.user_id, request).await?;
    Ok(Json(response))
}
