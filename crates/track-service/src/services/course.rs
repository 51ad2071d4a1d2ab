//! Course service
//!
//! Course creation, listing, and deletion.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use track_core::entities::Course;

use crate::dto::requests::CreateCourseRequest;
use crate::dto::responses::CourseResponse;

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Course service
pub struct CourseService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CourseService<'a> {
    /// Create a new CourseService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a course owned by the caller. The slug is derived from the
    /// name and must be unique among the owner's courses.
    #[instrument(skip(self, request))]
    pub async fn create_course(
        &self,
        owner_id: Uuid,
        request: CreateCourseRequest,
    ) -> ServiceResult<CourseResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let course = Course::new(request.name, owner_id);
        if course.slug.is_empty() {
            return Err(ServiceError::validation(
                "Course name must contain at least one alphanumeric character",
            ));
        }

        let course = self.ctx.course_repo().create(&course).await?;

        info!(course_id = %course.id, slug = %course.slug, "Course created");

        Ok(CourseResponse::from(course))
    }

    /// Courses the user owns or has a share in
    #[instrument(skip(self))]
    pub async fn list_courses(&self, user_id: Uuid) -> ServiceResult<Vec<CourseResponse>> {
        let courses = self.ctx.course_repo().find_by_user(user_id).await?;
        Ok(courses.into_iter().map(CourseResponse::from).collect())
    }

    /// Fetch a course the user can see
    #[instrument(skip(self))]
    pub async fn get_course(&self, course_id: Uuid, user_id: Uuid) -> ServiceResult<CourseResponse> {
        let access = AccessService::new(self.ctx);
        let (course, _visibility) = access.require_access(course_id, user_id).await?;
        Ok(CourseResponse::from(course))
    }

    /// Delete a course. Owner only; cascades to students, activities,
    /// ratings, invites and shares.
    #[instrument(skip(self))]
    pub async fn delete_course(&self, course_id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        let access = AccessService::new(self.ctx);
        let course = access.require_owner(course_id, user_id).await?;

        self.ctx.course_repo().delete(course.id).await?;

        info!(course_id = %course.id, "Course deleted");

        Ok(())
    }
}
