//! Access evaluation service
//!
//! Computes what a user may see in a course. Access is evaluated fresh
//! on every request from the ownership row and the share table; nothing
//! is cached, so a revoked share takes effect immediately.

use tracing::instrument;
use uuid::Uuid;

use track_core::entities::{Course, Student};
use track_core::error::DomainError;
use track_core::value_objects::{Permission, Visibility};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Access evaluation service
pub struct AccessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessService<'a> {
    /// Create a new AccessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compute the user's visibility into a course.
    ///
    /// Owners and `tl` shares see everything, a `coder` share sees its
    /// single student, anyone else sees nothing.
    #[instrument(skip(self, course), fields(course_id = %course.id))]
    pub async fn visibility(&self, course: &Course, user_id: Uuid) -> ServiceResult<Visibility> {
        if course.is_owned_by(user_id) {
            return Ok(Visibility::All);
        }

        let share = self.ctx.share_repo().find(course.id, user_id).await?;

        Ok(match share {
            Some(share) => match share.permission {
                Permission::Tl => Visibility::All,
                Permission::Coder => match share.student_id {
                    Some(student_id) => Visibility::Single(student_id),
                    // A coder share without a student grants nothing
                    None => Visibility::None,
                },
            },
            None => Visibility::None,
        })
    }

    /// Load a course the user can see, along with their visibility.
    ///
    /// A course the user has no access to is reported as not found, so
    /// callers cannot probe for course existence.
    #[instrument(skip(self))]
    pub async fn require_access(
        &self,
        course_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<(Course, Visibility)> {
        let course = self
            .ctx
            .course_repo()
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Course", course_id.to_string()))?;

        let visibility = self.visibility(&course, user_id).await?;
        if !visibility.has_access() {
            return Err(ServiceError::not_found("Course", course_id.to_string()));
        }

        Ok((course, visibility))
    }

    /// Load a course and verify the user owns it
    #[instrument(skip(self))]
    pub async fn require_owner(&self, course_id: Uuid, user_id: Uuid) -> ServiceResult<Course> {
        let course = self
            .ctx
            .course_repo()
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Course", course_id.to_string()))?;

        if !course.is_owned_by(user_id) {
            return Err(ServiceError::from(DomainError::NotOwner));
        }

        Ok(course)
    }

    /// Drop the students the visibility does not cover
    pub fn filter_students(visibility: Visibility, students: Vec<Student>) -> Vec<Student> {
        students
            .into_iter()
            .filter(|s| visibility.can_view_student(s.id))
            .collect()
    }
}
