//! Service context - dependency container for services
//!
//! Holds all repositories and shared helpers needed by services. The
//! context only depends on the repository traits, so tests can inject
//! in-memory implementations.

use std::sync::Arc;

use chrono::Duration;
use track_common::auth::{GithubOAuth, JwtService};
use track_core::traits::{
    ActivityRepository, CourseRepository, InviteRepository, ProfileRepository, RatingRepository,
    ShareRepository, StudentRepository,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - GitHub OAuth client
/// - Invite issuing parameters
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    profile_repo: Arc<dyn ProfileRepository>,
    course_repo: Arc<dyn CourseRepository>,
    student_repo: Arc<dyn StudentRepository>,
    activity_repo: Arc<dyn ActivityRepository>,
    rating_repo: Arc<dyn RatingRepository>,
    invite_repo: Arc<dyn InviteRepository>,
    share_repo: Arc<dyn ShareRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    github_oauth: Option<Arc<GithubOAuth>>,

    // Invite issuing parameters
    invite_ttl: Duration,
    invite_origin: String,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        course_repo: Arc<dyn CourseRepository>,
        student_repo: Arc<dyn StudentRepository>,
        activity_repo: Arc<dyn ActivityRepository>,
        rating_repo: Arc<dyn RatingRepository>,
        invite_repo: Arc<dyn InviteRepository>,
        share_repo: Arc<dyn ShareRepository>,
        jwt_service: Arc<JwtService>,
        github_oauth: Option<Arc<GithubOAuth>>,
        invite_ttl: Duration,
        invite_origin: String,
    ) -> Self {
        Self {
            profile_repo,
            course_repo,
            student_repo,
            activity_repo,
            rating_repo,
            invite_repo,
            share_repo,
            jwt_service,
            github_oauth,
            invite_ttl,
            invite_origin,
        }
    }

    // === Repositories ===

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the course repository
    pub fn course_repo(&self) -> &dyn CourseRepository {
        self.course_repo.as_ref()
    }

    /// Get the student repository
    pub fn student_repo(&self) -> &dyn StudentRepository {
        self.student_repo.as_ref()
    }

    /// Get the activity repository
    pub fn activity_repo(&self) -> &dyn ActivityRepository {
        self.activity_repo.as_ref()
    }

    /// Get the rating repository
    pub fn rating_repo(&self) -> &dyn RatingRepository {
        self.rating_repo.as_ref()
    }

    /// Get the invite repository
    pub fn invite_repo(&self) -> &dyn InviteRepository {
        self.invite_repo.as_ref()
    }

    /// Get the share repository
    pub fn share_repo(&self) -> &dyn ShareRepository {
        self.share_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the GitHub OAuth client, if configured
    pub fn github_oauth(&self) -> Option<&GithubOAuth> {
        self.github_oauth.as_deref()
    }

    // === Invite parameters ===

    /// Lifetime applied to newly issued invites
    pub fn invite_ttl(&self) -> Duration {
        self.invite_ttl
    }

    /// Origin used to build invite links
    pub fn invite_origin(&self) -> &str {
        &self.invite_origin
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("invite_ttl", &self.invite_ttl)
            .field("invite_origin", &self.invite_origin)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    course_repo: Option<Arc<dyn CourseRepository>>,
    student_repo: Option<Arc<dyn StudentRepository>>,
    activity_repo: Option<Arc<dyn ActivityRepository>>,
    rating_repo: Option<Arc<dyn RatingRepository>>,
    invite_repo: Option<Arc<dyn InviteRepository>>,
    share_repo: Option<Arc<dyn ShareRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    github_oauth: Option<Arc<GithubOAuth>>,
    invite_ttl: Duration,
    invite_origin: String,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            profile_repo: None,
            course_repo: None,
            student_repo: None,
            activity_repo: None,
            rating_repo: None,
            invite_repo: None,
            share_repo: None,
            jwt_service: None,
            github_oauth: None,
            invite_ttl: Duration::days(7),
            invite_origin: "http://localhost:5173".to_string(),
        }
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn course_repo(mut self, repo: Arc<dyn CourseRepository>) -> Self {
        self.course_repo = Some(repo);
        self
    }

    pub fn student_repo(mut self, repo: Arc<dyn StudentRepository>) -> Self {
        self.student_repo = Some(repo);
        self
    }

    pub fn activity_repo(mut self, repo: Arc<dyn ActivityRepository>) -> Self {
        self.activity_repo = Some(repo);
        self
    }

    pub fn rating_repo(mut self, repo: Arc<dyn RatingRepository>) -> Self {
        self.rating_repo = Some(repo);
        self
    }

    pub fn invite_repo(mut self, repo: Arc<dyn InviteRepository>) -> Self {
        self.invite_repo = Some(repo);
        self
    }

    pub fn share_repo(mut self, repo: Arc<dyn ShareRepository>) -> Self {
        self.share_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn github_oauth(mut self, oauth: Arc<GithubOAuth>) -> Self {
        self.github_oauth = Some(oauth);
        self
    }

    pub fn invite_ttl(mut self, ttl: Duration) -> Self {
        self.invite_ttl = ttl;
        self
    }

    pub fn invite_origin(mut self, origin: impl Into<String>) -> Self {
        self.invite_origin = origin.into();
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.course_repo
                .ok_or_else(|| ServiceError::validation("course_repo is required"))?,
            self.student_repo
                .ok_or_else(|| ServiceError::validation("student_repo is required"))?,
            self.activity_repo
                .ok_or_else(|| ServiceError::validation("activity_repo is required"))?,
            self.rating_repo
                .ok_or_else(|| ServiceError::validation("rating_repo is required"))?,
            self.invite_repo
                .ok_or_else(|| ServiceError::validation("invite_repo is required"))?,
            self.share_repo
                .ok_or_else(|| ServiceError::validation("share_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.github_oauth,
            self.invite_ttl,
            self.invite_origin,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
