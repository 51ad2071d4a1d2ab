//! Invite handlers
//!
//! Endpoints for issuing, previewing, accepting and revoking course
//! invites.

use axum::{
    extract::{Path, State},
    Json,
};

use track_service::{
    CreateInviteRequest, InvitePreviewResponse, InviteResponse, InviteService, ShareResponse,
};

use crate::extractors::AuthUser;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

use super::courses::parse_course_id;

/// Issue an invite for a course
///
/// POST /courses/{course_id}/invites
pub async fn create_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<String>,
    Json(request): Json<CreateInviteRequest>,
) -> ApiResult<Created<Json<InviteResponse>>> {
    let course_id = parse_course_id(&course_id)?;

    let service = InviteService::new(state.service_context());
    let response = service.issue(course_id, auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the pending invites of a course
///
/// GET /courses/{course_id}/invites
pub async fn list_course_invites(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(course_id): Path<String>,
) -> ApiResult<Json<Vec<InviteResponse>>> {
    let course_id = parse_course_id(&course_id)?;

    let service = InviteService::new(state.service_context());
    let invites = service.list_for_course(course_id, auth.user_id).await?;
    Ok(Json(invites))
}

/// Preview an invite without consuming it (no auth required)
///
/// GET /invites/{token}
pub async fn get_invite(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> ApiResult<Json<InvitePreviewResponse>> {
    let service = InviteService::new(state.service_context());
    let response = service.resolve(&token).await?;
    Ok(Json(response))
}

/// Accept an invite, converting it into a share
///
/// POST /invites/{token}/accept
pub async fn accept_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(token): Path<String>,
) -> ApiResult<Json<ShareResponse>> {
    let service = InviteService::new(state.service_context());
    let response = service.accept(&token, auth.user_id).await?;
    Ok(Json(response))
}

/// Revoke a pending invite
///
/// DELETE /courses/{course_id}/invites/{token}
pub async fn revoke_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((course_id, token)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let course_id = parse_course_id(&course_id)?;

    let service = InviteService::new(state.service_context());
    service.revoke(course_id, &token, auth.user_id).await?;
    Ok(NoContent)
}
