//! GitHub OAuth client
//!
//! Implements the authorization-code flow: the frontend redirects the
//! user to GitHub, GitHub redirects back with a code, and this client
//! exchanges the code for an access token and fetches the user profile.

use serde::Deserialize;

use crate::config::GithubConfig;
use crate::error::AppError;

const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const USER_URL: &str = "https://api.github.com/user";

/// The subset of the GitHub user payload we persist
#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    pub id: i64,
    pub login: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error_description: Option<String>,
}

/// GitHub OAuth client
#[derive(Clone)]
pub struct GithubOAuth {
    config: GithubConfig,
    http: reqwest::Client,
}

impl GithubOAuth {
    #[must_use]
    pub fn new(config: GithubConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Build the URL the user is sent to for consent. `state` is an
    /// opaque value echoed back on the redirect for CSRF protection.
    #[must_use]
    pub fn authorize_url(&self, state: &str) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&scope=read:user%20user:email&state={}",
            AUTHORIZE_URL, self.config.client_id, self.config.redirect_uri, state
        )
    }

    /// Exchange an authorization code for an access token
    ///
    /// # Errors
    /// Returns an error if GitHub rejects the code or the request fails
    pub async fn exchange_code(&self, code: &str) -> Result<String, AppError> {
        let response = self
            .http
            .post(TOKEN_URL)
            .header("Accept", "application/json")
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("GitHub token exchange: {e}")))?;

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("GitHub token response: {e}")))?;

        token.access_token.ok_or_else(|| {
            AppError::ExternalService(format!(
                "GitHub rejected authorization code: {}",
                token.error_description.unwrap_or_else(|| "unknown".into())
            ))
        })
    }

    /// Fetch the authenticated user's profile
    ///
    /// # Errors
    /// Returns an error if the token is rejected or the request fails
    pub async fn fetch_user(&self, access_token: &str) -> Result<GithubUser, AppError> {
        let response = self
            .http
            .get(USER_URL)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "course-tracker")
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("GitHub user fetch: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "GitHub user fetch failed with status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("GitHub user payload: {e}")))
    }
}

impl std::fmt::Debug for GithubOAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubOAuth")
            .field("client_id", &self.config.client_id)
            .finish_non_exhaustive()
    }
}
