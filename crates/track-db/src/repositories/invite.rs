//! PostgreSQL implementation of InviteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use track_core::entities::Invite;
use track_core::error::DomainError;
use track_core::traits::{InviteRepository, RepoResult};

use crate::models::InviteModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of InviteRepository
#[derive(Clone)]
pub struct PgInviteRepository {
    pool: PgPool,
}

impl PgInviteRepository {
    /// Create a new PgInviteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InviteRepository for PgInviteRepository {
    #[instrument(skip(self, invite), fields(course_id = %invite.course_id))]
    async fn create(&self, invite: &Invite) -> RepoResult<Invite> {
        let result = sqlx::query_as::<_, InviteModel>(
            r#"
            INSERT INTO invites (token, course_id, permission, student_id, created_at, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING token, course_id, permission, student_id, created_at, expires_at
            "#,
        )
        .bind(&invite.token)
        .bind(invite.course_id)
        .bind(invite.permission.as_str())
        .bind(invite.student_id)
        .bind(invite.created_at)
        .bind(invite.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::InternalError("invite token collision".to_string())
            })
        })?;

        Invite::try_from(result)
    }

    #[instrument(skip(self, token))]
    async fn find_live(&self, token: &str) -> RepoResult<Option<Invite>> {
        let result = sqlx::query_as::<_, InviteModel>(
            r#"
            SELECT token, course_id, permission, student_id, created_at, expires_at
            FROM invites
            WHERE token = $1 AND expires_at > NOW()
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Invite::try_from).transpose()
    }

    #[instrument(skip(self, token))]
    async fn claim(&self, token: &str) -> RepoResult<Option<Invite>> {
        // Conditional delete-returning: the row disappears in the same
        // statement that reads it, so concurrent acceptors cannot both
        // win. The loser sees zero rows.
        let result = sqlx::query_as::<_, InviteModel>(
            r#"
            DELETE FROM invites
            WHERE token = $1 AND expires_at > NOW()
            RETURNING token, course_id, permission, student_id, created_at, expires_at
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Invite::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_course(&self, course_id: Uuid) -> RepoResult<Vec<Invite>> {
        let results = sqlx::query_as::<_, InviteModel>(
            r#"
            SELECT token, course_id, permission, student_id, created_at, expires_at
            FROM invites
            WHERE course_id = $1 AND expires_at > NOW()
            ORDER BY created_at DESC
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Invite::try_from).collect()
    }

    #[instrument(skip(self, token))]
    async fn delete(&self, course_id: Uuid, token: &str) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM invites WHERE course_id = $1 AND token = $2")
            .bind(course_id)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
