//! PostgreSQL implementation of StudentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use track_core::entities::Student;
use track_core::traits::{RepoResult, StudentRepository};

use crate::models::StudentModel;

use super::error::{map_db_error, student_not_found};

/// PostgreSQL implementation of StudentRepository
#[derive(Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    /// Create a new PgStudentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    #[instrument(skip(self))]
    async fn create(&self, student: &Student) -> RepoResult<Student> {
        let result = sqlx::query_as::<_, StudentModel>(
            r#"
            INSERT INTO students (id, course_id, first_name, last_name, cell, photo_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, course_id, first_name, last_name, cell, photo_url
            "#,
        )
        .bind(student.id)
        .bind(student.course_id)
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.cell)
        .bind(&student.photo_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Student::from(result))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Student>> {
        let result = sqlx::query_as::<_, StudentModel>(
            r#"
            SELECT id, course_id, first_name, last_name, cell, photo_url
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Student::from))
    }

    #[instrument(skip(self))]
    async fn find_by_course(&self, course_id: Uuid) -> RepoResult<Vec<Student>> {
        let results = sqlx::query_as::<_, StudentModel>(
            r#"
            SELECT id, course_id, first_name, last_name, cell, photo_url
            FROM students
            WHERE course_id = $1
            ORDER BY last_name, first_name
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Student::from).collect())
    }

    #[instrument(skip(self))]
    async fn update(&self, student: &Student) -> RepoResult<Student> {
        let result = sqlx::query_as::<_, StudentModel>(
            r#"
            UPDATE students
            SET first_name = $2, last_name = $3, cell = $4, photo_url = $5
            WHERE id = $1
            RETURNING id, course_id, first_name, last_name, cell, photo_url
            "#,
        )
        .bind(student.id)
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.cell)
        .bind(&student.photo_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| student_not_found(student.id))?;

        Ok(Student::from(result))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
