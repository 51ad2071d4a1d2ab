//! Student service
//!
//! Roster management. Mutations are owner-only; reads are filtered by
//! the caller's visibility.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use track_core::entities::Student;

use crate::dto::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::dto::responses::StudentResponse;

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Student service
pub struct StudentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StudentService<'a> {
    /// Create a new StudentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a student to a course. Owner only.
    #[instrument(skip(self, request))]
    pub async fn add_student(
        &self,
        course_id: Uuid,
        user_id: Uuid,
        request: CreateStudentRequest,
    ) -> ServiceResult<StudentResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let access = AccessService::new(self.ctx);
        let course = access.require_owner(course_id, user_id).await?;

        let student = Student::new(course.id, request.first_name, request.last_name)
            .with_cell(request.cell)
            .with_photo_url(request.photo_url);

        let student = self.ctx.student_repo().create(&student).await?;

        info!(student_id = %student.id, course_id = %course.id, "Student added");

        Ok(StudentResponse::from(student))
    }

    /// List the students the caller may see in a course
    #[instrument(skip(self))]
    pub async fn list_students(
        &self,
        course_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<Vec<StudentResponse>> {
        let access = AccessService::new(self.ctx);
        let (course, visibility) = access.require_access(course_id, user_id).await?;

        let students = self.ctx.student_repo().find_by_course(course.id).await?;
        let visible = AccessService::filter_students(visibility, students);

        Ok(visible.into_iter().map(StudentResponse::from).collect())
    }

    /// Update a student's details. Owner only.
    #[instrument(skip(self, request))]
    pub async fn update_student(
        &self,
        student_id: Uuid,
        user_id: Uuid,
        request: UpdateStudentRequest,
    ) -> ServiceResult<StudentResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let mut student = self
            .ctx
            .student_repo()
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Student", student_id.to_string()))?;

        let access = AccessService::new(self.ctx);
        access.require_owner(student.course_id, user_id).await?;

        if let Some(first_name) = request.first_name {
            student.first_name = first_name;
        }
        if let Some(last_name) = request.last_name {
            student.last_name = last_name;
        }
        if let Some(cell) = request.cell {
            student.cell = Some(cell);
        }
        if let Some(photo_url) = request.photo_url {
            student.photo_url = Some(photo_url);
        }

        let student = self.ctx.student_repo().update(&student).await?;

        Ok(StudentResponse::from(student))
    }

    /// Remove a student from the roster. Owner only.
    #[instrument(skip(self))]
    pub async fn delete_student(&self, student_id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        let student = self
            .ctx
            .student_repo()
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Student", student_id.to_string()))?;

        let access = AccessService::new(self.ctx);
        access.require_owner(student.course_id, user_id).await?;

        self.ctx.student_repo().delete(student.id).await?;

        info!(student_id = %student.id, "Student deleted");

        Ok(())
    }
}
