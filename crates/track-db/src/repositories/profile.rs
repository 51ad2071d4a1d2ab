//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use track_core::entities::Profile;
use track_core::traits::{ProfileRepository, RepoResult};

use crate::models::ProfileModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r#"
            SELECT id, github_id, username, email, avatar_url, created_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_github_id(&self, github_id: i64) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r#"
            SELECT id, github_id, username, email, avatar_url, created_at
            FROM profiles
            WHERE github_id = $1
            "#,
        )
        .bind(github_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn upsert(&self, profile: &Profile) -> RepoResult<Profile> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r#"
            INSERT INTO profiles (id, github_id, username, email, avatar_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (github_id) DO UPDATE
            SET username = EXCLUDED.username,
                email = EXCLUDED.email,
                avatar_url = EXCLUDED.avatar_url
            RETURNING id, github_id, username, email, avatar_url, created_at
            "#,
        )
        .bind(profile.id)
        .bind(profile.github_id)
        .bind(&profile.username)
        .bind(&profile.email)
        .bind(&profile.avatar_url)
        .bind(profile.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Profile::from(result))
    }
}
