//! PostgreSQL implementation of CourseRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use track_core::entities::Course;
use track_core::error::DomainError;
use track_core::traits::{CourseRepository, RepoResult};

use crate::models::CourseModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CourseRepository
#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    /// Create a new PgCourseRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    #[instrument(skip(self))]
    async fn create(&self, course: &Course) -> RepoResult<Course> {
        let result = sqlx::query_as::<_, CourseModel>(
            r#"
            INSERT INTO courses (id, name, slug, owner_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, slug, owner_id, created_at
            "#,
        )
        .bind(course.id)
        .bind(&course.name)
        .bind(&course.slug)
        .bind(course.owner_id)
        .bind(course.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugTaken(course.slug.clone())))?;

        Ok(Course::from(result))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Course>> {
        let result = sqlx::query_as::<_, CourseModel>(
            r#"
            SELECT id, name, slug, owner_id, created_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Course::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, owner_id: Uuid, slug: &str) -> RepoResult<Option<Course>> {
        let result = sqlx::query_as::<_, CourseModel>(
            r#"
            SELECT id, name, slug, owner_id, created_at
            FROM courses
            WHERE owner_id = $1 AND slug = $2
            "#,
        )
        .bind(owner_id)
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Course::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Course>> {
        // Owned courses plus courses shared with the user
        let results = sqlx::query_as::<_, CourseModel>(
            r#"
            SELECT c.id, c.name, c.slug, c.owner_id, c.created_at
            FROM courses c
            WHERE c.owner_id = $1
            UNION
            SELECT c.id, c.name, c.slug, c.owner_id, c.created_at
            FROM courses c
            JOIN course_shares s ON s.course_id = c.id
            WHERE s.user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Course::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
