//! Authentication service
//!
//! GitHub OAuth login: the callback code is exchanged for a GitHub
//! access token, the user profile is fetched and upserted, and a JWT
//! pair is issued for the session.

use tracing::{info, instrument};
use uuid::Uuid;

use track_common::auth::{GithubUser, TokenPair};
use track_core::entities::Profile;
use track_core::error::DomainError;

use crate::dto::responses::{AuthResponse, ProfileResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The GitHub consent URL the frontend redirects to
    pub fn authorize_url(&self, state: &str) -> ServiceResult<String> {
        let oauth = self
            .ctx
            .github_oauth()
            .ok_or_else(|| ServiceError::internal("GitHub OAuth is not configured"))?;
        Ok(oauth.authorize_url(state))
    }

    /// Complete the OAuth callback: exchange the code, fetch the user,
    /// and issue tokens.
    ///
    /// Failures talking to GitHub surface as `AuthRedirectFailed` so the
    /// frontend can route the user back to the login screen.
    #[instrument(skip(self, code))]
    pub async fn login(&self, code: &str) -> ServiceResult<AuthResponse> {
        let oauth = self
            .ctx
            .github_oauth()
            .ok_or_else(|| ServiceError::internal("GitHub OAuth is not configured"))?;

        let access_token = oauth
            .exchange_code(code)
            .await
            .map_err(|e| DomainError::AuthRedirectFailed(e.to_string()))?;

        let github_user = oauth
            .fetch_user(&access_token)
            .await
            .map_err(|e| DomainError::AuthRedirectFailed(e.to_string()))?;

        self.login_github_user(github_user).await
    }

    /// Upsert the profile for an authenticated GitHub user and issue a
    /// token pair. Split out from `login` so it can run without network
    /// access.
    #[instrument(skip(self, github_user), fields(github_id = github_user.id))]
    pub async fn login_github_user(&self, github_user: GithubUser) -> ServiceResult<AuthResponse> {
        let profile = Profile::new(github_user.id, github_user.login)
            .with_email(github_user.email)
            .with_avatar_url(github_user.avatar_url);

        let profile = self.ctx.profile_repo().upsert(&profile).await?;

        info!(user_id = %profile.id, "User logged in");

        let pair = self.issue_tokens(profile.id)?;
        Ok(AuthResponse::new(
            pair.access_token,
            pair.refresh_token,
            pair.expires_in,
            ProfileResponse::from(profile),
        ))
    }

    /// Exchange a refresh token for a fresh pair
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<AuthResponse> {
        let pair = self.ctx.jwt_service().refresh_tokens(refresh_token)?;
        let claims = self.ctx.jwt_service().validate_access_token(&pair.access_token)?;
        let user_id = claims.user_id()?;

        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::ProfileNotFound(user_id))?;

        Ok(AuthResponse::new(
            pair.access_token,
            pair.refresh_token,
            pair.expires_in,
            ProfileResponse::from(profile),
        ))
    }

    /// Fetch the authenticated user's own profile
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Uuid) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::ProfileNotFound(user_id))?;

        Ok(ProfileResponse::from(profile))
    }

    fn issue_tokens(&self, user_id: Uuid) -> ServiceResult<TokenPair> {
        Ok(self.ctx.jwt_service().generate_token_pair(user_id)?)
    }
}
