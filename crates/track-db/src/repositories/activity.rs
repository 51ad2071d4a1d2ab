//! PostgreSQL implementation of ActivityRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use track_core::entities::Activity;
use track_core::traits::{ActivityRepository, RepoResult};

use crate::models::ActivityModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ActivityRepository
#[derive(Clone)]
pub struct PgActivityRepository {
    pool: PgPool,
}

impl PgActivityRepository {
    /// Create a new PgActivityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PgActivityRepository {
    #[instrument(skip(self))]
    async fn create(&self, activity: &Activity) -> RepoResult<Activity> {
        let result = sqlx::query_as::<_, ActivityModel>(
            r#"
            INSERT INTO activities (id, course_id, date, name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, course_id, date, name
            "#,
        )
        .bind(activity.id)
        .bind(activity.course_id)
        .bind(activity.date)
        .bind(&activity.name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Activity::from(result))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Activity>> {
        let result = sqlx::query_as::<_, ActivityModel>(
            r#"
            SELECT id, course_id, date, name
            FROM activities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Activity::from))
    }

    #[instrument(skip(self))]
    async fn find_by_course_and_date(
        &self,
        course_id: Uuid,
        date: NaiveDate,
    ) -> RepoResult<Vec<Activity>> {
        let results = sqlx::query_as::<_, ActivityModel>(
            r#"
            SELECT id, course_id, date, name
            FROM activities
            WHERE course_id = $1 AND date = $2
            ORDER BY name
            "#,
        )
        .bind(course_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Activity::from).collect())
    }

    #[instrument(skip(self))]
    async fn dates_for_course(&self, course_id: Uuid) -> RepoResult<Vec<NaiveDate>> {
        let rows: Vec<(NaiveDate,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT date
            FROM activities
            WHERE course_id = $1
            ORDER BY date
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(|(d,)| d).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
