//! Repository trait definitions
//!
//! Persistence seams for the domain. The database crate provides the
//! Postgres implementations; tests substitute in-memory doubles.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::entities::{Activity, Course, Invite, Profile, Rating, Share, Student};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Profile repository operations
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>>;

    async fn find_by_github_id(&self, github_id: i64) -> RepoResult<Option<Profile>>;

    /// Insert or refresh a profile keyed by its GitHub id, returning the
    /// stored row. Login always goes through here.
    async fn upsert(&self, profile: &Profile) -> RepoResult<Profile>;
}

/// Course repository operations
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, course: &Course) -> RepoResult<Course>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Course>>;

    async fn find_by_slug(&self, owner_id: Uuid, slug: &str) -> RepoResult<Option<Course>>;

    /// Courses the user owns plus courses shared with them, most recent first
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Course>>;

    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

/// Student repository operations
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create(&self, student: &Student) -> RepoResult<Student>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Student>>;

    async fn find_by_course(&self, course_id: Uuid) -> RepoResult<Vec<Student>>;

    async fn update(&self, student: &Student) -> RepoResult<Student>;

    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

/// Activity repository operations
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn create(&self, activity: &Activity) -> RepoResult<Activity>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Activity>>;

    /// Activities for one course day, in insertion order
    async fn find_by_course_and_date(
        &self,
        course_id: Uuid,
        date: NaiveDate,
    ) -> RepoResult<Vec<Activity>>;

    /// Distinct dates that have at least one activity, ascending
    async fn dates_for_course(&self, course_id: Uuid) -> RepoResult<Vec<NaiveDate>>;

    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

/// One denormalized row of the stats join: a rating together with the
/// day, activity and student it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub date: NaiveDate,
    pub activity_id: Uuid,
    pub activity_name: String,
    pub student_id: Uuid,
    pub student_name: String,
    pub score: f64,
}

/// Rating repository operations
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Insert or overwrite ratings keyed by `(student_id, activity_id)`
    async fn upsert_batch(&self, ratings: &[Rating]) -> RepoResult<Vec<Rating>>;

    async fn find_by_activity(&self, activity_id: Uuid) -> RepoResult<Vec<Rating>>;

    async fn find_by_student(&self, student_id: Uuid) -> RepoResult<Vec<Rating>>;

    /// Every rating in the course joined with its activity and student,
    /// the raw input of the stats aggregation
    async fn stat_rows(&self, course_id: Uuid) -> RepoResult<Vec<StatRow>>;
}

/// Invite repository operations
#[async_trait]
pub trait InviteRepository: Send + Sync {
    async fn create(&self, invite: &Invite) -> RepoResult<Invite>;

    /// Look up a live (unexpired) invite without consuming it
    async fn find_live(&self, token: &str) -> RepoResult<Option<Invite>>;

    /// Atomically claim a live invite: delete it and return the deleted
    /// row. Returns `None` when the token is unknown, expired or already
    /// claimed by a concurrent acceptor. At most one caller per token
    /// ever receives `Some`.
    async fn claim(&self, token: &str) -> RepoResult<Option<Invite>>;

    /// Pending invites for a course, newest first
    async fn find_by_course(&self, course_id: Uuid) -> RepoResult<Vec<Invite>>;

    /// Delete a token belonging to the given course. Returns `false`
    /// when no such row exists.
    async fn delete(&self, course_id: Uuid, token: &str) -> RepoResult<bool>;
}

/// Share repository operations
#[async_trait]
pub trait ShareRepository: Send + Sync {
    /// Insert or overwrite the share keyed by `(course_id, user_id)`.
    /// The last accepted invite wins.
    async fn upsert(&self, share: &Share) -> RepoResult<Share>;

    async fn find(&self, course_id: Uuid, user_id: Uuid) -> RepoResult<Option<Share>>;

    async fn find_by_course(&self, course_id: Uuid) -> RepoResult<Vec<Share>>;

    async fn delete(&self, course_id: Uuid, user_id: Uuid) -> RepoResult<bool>;
}
