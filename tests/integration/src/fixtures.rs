//! Test fixtures and data generators
//!
//! Provides a ready-made in-memory service context and reusable test
//! data for service-layer tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Duration;
use track_common::{GithubUser, JwtService};
use track_service::{AuthService, ServiceContext, ServiceContextBuilder};
use uuid::Uuid;

use crate::memory::{
    MemoryActivityRepository, MemoryCourseRepository, MemoryInviteRepository,
    MemoryProfileRepository, MemoryRatingRepository, MemoryShareRepository, MemoryStore,
    MemoryStudentRepository,
};

/// Counter for unique test data
static COUNTER: AtomicI64 = AtomicI64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> i64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Build a service context builder wired to one shared in-memory store
pub fn memory_context_builder() -> ServiceContextBuilder {
    let store = MemoryStore::new();
    ServiceContextBuilder::new()
        .profile_repo(Arc::new(MemoryProfileRepository(store.clone())))
        .course_repo(Arc::new(MemoryCourseRepository(store.clone())))
        .student_repo(Arc::new(MemoryStudentRepository(store.clone())))
        .activity_repo(Arc::new(MemoryActivityRepository(store.clone())))
        .rating_repo(Arc::new(MemoryRatingRepository(store.clone())))
        .invite_repo(Arc::new(MemoryInviteRepository(store.clone())))
        .share_repo(Arc::new(MemoryShareRepository(store)))
        .jwt_service(Arc::new(JwtService::new("test-secret-key", 900, 604_800)))
        .invite_ttl(Duration::days(7))
        .invite_origin("http://localhost:5173")
}

/// Build a ready-to-use in-memory service context
pub fn memory_context() -> ServiceContext {
    memory_context_builder()
        .build()
        .expect("all repositories provided")
}

/// A unique GitHub user payload, as returned by the OAuth user endpoint
pub fn github_user() -> GithubUser {
    let suffix = unique_suffix();
    GithubUser {
        id: suffix,
        login: format!("tutor{suffix}"),
        email: Some(format!("tutor{suffix}@example.com")),
        avatar_url: None,
    }
}

/// Log a fresh user in through the network-free seam, returning their id
pub async fn login_user(ctx: &ServiceContext) -> Uuid {
    let auth = AuthService::new(ctx);
    let response = auth
        .login_github_user(github_user())
        .await
        .expect("login should succeed");
    response.user.id
}
