//! Student handlers
//!
//! Endpoints for roster management.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use track_service::{CreateStudentRequest, StudentResponse, StudentService, UpdateStudentRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

use super::courses::parse_course_id;

/// Add a student to a course
///
/// POST /courses/{course_id}/students
pub async fn add_student(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateStudentRequest>,
) -> ApiResult<Created<Json<StudentResponse>>> {
    let course_id = parse_course_id(&course_id)?;

    let service = StudentService::new(state.service_context());
    let response = service.add_student(course_id, auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the students of a course the caller may see
///
/// GET /courses/{course_id}/students
pub async fn list_students(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<String>,
) -> ApiResult<Json<Vec<StudentResponse>>> {
    let course_id = parse_course_id(&course_id)?;

    let service = StudentService::new(state.service_context());
    let students = service.list_students(course_id, auth.user_id).await?;
    Ok(Json(students))
}

/// Update a student's details
///
/// PATCH /students/{student_id}
pub async fn update_student(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(student_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateStudentRequest>,
) -> ApiResult<Json<StudentResponse>> {
    let student_id = parse_student_id(&student_id)?;

    let service = StudentService::new(state.service_context());
    let response = service
        .update_student(student_id, auth.user_id, request)
        .await?;
    Ok(Json(response))
}

/// Remove a student from the roster
///
/// DELETE /students/{student_id}
pub async fn delete_student(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(student_id): Path<String>,
) -> ApiResult<NoContent> {
    let student_id = parse_student_id(&student_id)?;

    let service = StudentService::new(state.service_context());
    service.delete_student(student_id, auth.user_id).await?;
    Ok(NoContent)
}

fn parse_student_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid student_id format"))
}
