//! PostgreSQL implementation of ShareRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use track_core::entities::Share;
use track_core::traits::{RepoResult, ShareRepository};

use crate::models::ShareModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ShareRepository
#[derive(Clone)]
pub struct PgShareRepository {
    pool: PgPool,
}

impl PgShareRepository {
    /// Create a new PgShareRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShareRepository for PgShareRepository {
    #[instrument(skip(self, share), fields(course_id = %share.course_id, user_id = %share.user_id))]
    async fn upsert(&self, share: &Share) -> RepoResult<Share> {
        let result = sqlx::query_as::<_, ShareModel>(
            r#"
            INSERT INTO course_shares (course_id, user_id, permission, student_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (course_id, user_id) DO UPDATE
            SET permission = EXCLUDED.permission,
                student_id = EXCLUDED.student_id,
                created_at = EXCLUDED.created_at
            RETURNING course_id, user_id, permission, student_id, created_at
            "#,
        )
        .bind(share.course_id)
        .bind(share.user_id)
        .bind(share.permission.as_str())
        .bind(share.student_id)
        .bind(share.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Share::try_from(result)
    }

    #[instrument(skip(self))]
    async fn find(&self, course_id: Uuid, user_id: Uuid) -> RepoResult<Option<Share>> {
        let result = sqlx::query_as::<_, ShareModel>(
            r#"
            SELECT course_id, user_id, permission, student_id, created_at
            FROM course_shares
            WHERE course_id = $1 AND user_id = $2
            "#,
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Share::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_course(&self, course_id: Uuid) -> RepoResult<Vec<Share>> {
        let results = sqlx::query_as::<_, ShareModel>(
            r#"
            SELECT course_id, user_id, permission, student_id, created_at
            FROM course_shares
            WHERE course_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Share::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn delete(&self, course_id: Uuid, user_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM course_shares WHERE course_id = $1 AND user_id = $2")
            .bind(course_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
