//! PostgreSQL implementation of RatingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use track_core::entities::Rating;
use track_core::traits::{RatingRepository, RepoResult, StatRow};

use crate::models::{RatingModel, StatRowModel};

use super::error::map_db_error;

/// PostgreSQL implementation of RatingRepository
#[derive(Clone)]
pub struct PgRatingRepository {
    pool: PgPool,
}

impl PgRatingRepository {
    /// Create a new PgRatingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for PgRatingRepository {
    #[instrument(skip(self, ratings), fields(count = ratings.len()))]
    async fn upsert_batch(&self, ratings: &[Rating]) -> RepoResult<Vec<Rating>> {
        let mut saved = Vec::with_capacity(ratings.len());

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for rating in ratings {
            let result = sqlx::query_as::<_, RatingModel>(
                r#"
                INSERT INTO ratings (id, student_id, activity_id, score, notes)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (student_id, activity_id) DO UPDATE
                SET score = EXCLUDED.score, notes = EXCLUDED.notes
                RETURNING id, student_id, activity_id, score, notes
                "#,
            )
            .bind(rating.id)
            .bind(rating.student_id)
            .bind(rating.activity_id)
            .bind(rating.score)
            .bind(&rating.notes)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

            saved.push(Rating::from(result));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn find_by_activity(&self, activity_id: Uuid) -> RepoResult<Vec<Rating>> {
        let results = sqlx::query_as::<_, RatingModel>(
            r#"
            SELECT id, student_id, activity_id, score, notes
            FROM ratings
            WHERE activity_id = $1
            "#,
        )
        .bind(activity_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Rating::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_student(&self, student_id: Uuid) -> RepoResult<Vec<Rating>> {
        let results = sqlx::query_as::<_, RatingModel>(
            r#"
            SELECT id, student_id, activity_id, score, notes
            FROM ratings
            WHERE student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Rating::from).collect())
    }

    #[instrument(skip(self))]
    async fn stat_rows(&self, course_id: Uuid) -> RepoResult<Vec<StatRow>> {
        let results = sqlx::query_as::<_, StatRowModel>(
            r#"
            SELECT a.date, a.id AS activity_id, a.name AS activity_name,
                   s.id AS student_id, s.first_name, s.last_name, r.score
            FROM ratings r
            JOIN activities a ON a.id = r.activity_id
            JOIN students s ON s.id = r.student_id
            WHERE a.course_id = $1
            ORDER BY a.date, a.name, s.last_name, s.first_name
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(StatRow::from).collect())
    }
}
