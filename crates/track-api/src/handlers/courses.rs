//! Course handlers
//!
//! Endpoints for course management.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use track_service::{CourseResponse, CourseService, CreateCourseRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a course
///
/// POST /courses
pub async fn create_course(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCourseRequest>,
) -> ApiResult<Created<Json<CourseResponse>>> {
    let service = CourseService::new(state.service_context());
    let response = service.create_course(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the caller's courses (owned and shared)
///
/// GET /courses
pub async fn list_courses(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let service = CourseService::new(state.service_context());
    let courses = service.list_courses(auth.user_id).await?;
    Ok(Json(courses))
}

/// Get a course
///
/// GET /courses/{course_id}
pub async fn get_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<String>,
) -> ApiResult<Json<CourseResponse>> {
    let course_id = parse_course_id(&course_id)?;

    let service = CourseService::new(state.service_context());
    let response = service.get_course(course_id, auth.user_id).await?;
    Ok(Json(response))
}

/// Delete a course
///
/// DELETE /courses/{course_id}
pub async fn delete_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<String>,
) -> ApiResult<NoContent> {
    let course_id = parse_course_id(&course_id)?;

    let service = CourseService::new(state.service_context());
    service.delete_course(course_id, auth.user_id).await?;
    Ok(NoContent)
}

pub(crate) fn parse_course_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid course_id format"))
}
