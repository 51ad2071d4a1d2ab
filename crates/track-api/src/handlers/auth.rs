//! Authentication handlers
//!
//! Endpoints for the GitHub OAuth flow, token refresh, and the current
//! user's profile.

use axum::{
    extract::{Query, State},
    Json,
};
use track_service::{AuthResponse, AuthService, LoginRequest, ProfileResponse};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Query parameters for the authorize redirect
#[derive(Debug, serde::Deserialize, Default)]
pub struct AuthorizeQuery {
    /// Opaque CSRF value echoed back by GitHub
    pub state: Option<String>,
}

/// Authorize URL response body
#[derive(Debug, serde::Serialize)]
pub struct AuthorizeUrlResponse {
    pub url: String,
}

/// Get the GitHub consent URL the frontend should redirect to
///
/// GET /auth/github
pub async fn github_authorize(
    State(state): State<AppState>,
    Query(query): Query<AuthorizeQuery>,
) -> ApiResult<Json<AuthorizeUrlResponse>> {
    let service = AuthService::new(state.service_context());
    let url = service.authorize_url(query.state.as_deref().unwrap_or_default())?;
    Ok(Json(AuthorizeUrlResponse { url }))
}

/// Complete the OAuth callback: exchange the code for tokens
///
/// POST /auth/callback
pub async fn github_callback(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(&request.code).await?;
    Ok(Json(response))
}

/// Refresh token request body
#[derive(Debug, serde::Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Refresh access token
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(&request.refresh_token).await?;
    Ok(Json(response))
}

/// Get the authenticated user's profile
///
/// GET /auth/me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.me(auth.user_id).await?;
    Ok(Json(response))
}
