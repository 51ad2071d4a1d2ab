//! Tracking service
//!
//! Day-by-day activity and rating entry. Writes require full visibility
//! (owner or `tl`); reads are filtered to what the caller may see.

use chrono::NaiveDate;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use track_core::entities::{Activity, Rating};
use track_core::value_objects::Visibility;

use crate::dto::requests::{CreateActivityRequest, SaveRatingsRequest};
use crate::dto::responses::{ActivityResponse, DaySheetResponse, RatingResponse};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Tracking service
pub struct TrackingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TrackingService<'a> {
    /// Create a new TrackingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an activity on a course day. Requires full visibility.
    #[instrument(skip(self, request))]
    pub async fn create_activity(
        &self,
        course_id: Uuid,
        user_id: Uuid,
        request: CreateActivityRequest,
    ) -> ServiceResult<ActivityResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let course = self.require_full_visibility(course_id, user_id).await?;

        let activity = Activity::new(course.id, request.date, request.name);
        let activity = self.ctx.activity_repo().create(&activity).await?;

        info!(activity_id = %activity.id, course_id = %course.id, date = %activity.date, "Activity created");

        Ok(ActivityResponse::from(activity))
    }

    /// The activities and visible ratings of one course day
    #[instrument(skip(self))]
    pub async fn get_day(
        &self,
        course_id: Uuid,
        user_id: Uuid,
        date: NaiveDate,
    ) -> ServiceResult<DaySheetResponse> {
        let access = AccessService::new(self.ctx);
        let (course, visibility) = access.require_access(course_id, user_id).await?;

        let activities = self
            .ctx
            .activity_repo()
            .find_by_course_and_date(course.id, date)
            .await?;

        let mut ratings = Vec::new();
        for activity in &activities {
            let found = self.ctx.rating_repo().find_by_activity(activity.id).await?;
            ratings.extend(
                found
                    .into_iter()
                    .filter(|r| visibility.can_view_student(r.student_id)),
            );
        }

        Ok(DaySheetResponse {
            date,
            activities: activities.into_iter().map(ActivityResponse::from).collect(),
            ratings: ratings.into_iter().map(RatingResponse::from).collect(),
        })
    }

    /// The dates of a course that have activities
    #[instrument(skip(self))]
    pub async fn list_dates(&self, course_id: Uuid, user_id: Uuid) -> ServiceResult<Vec<NaiveDate>> {
        let access = AccessService::new(self.ctx);
        let (course, _visibility) = access.require_access(course_id, user_id).await?;

        Ok(self.ctx.activity_repo().dates_for_course(course.id).await?)
    }

    /// Save the ratings for an activity. Saving twice for the same
    /// student overwrites. Requires full visibility.
    #[instrument(skip(self, request), fields(activity_id = %request.activity_id))]
    pub async fn save_ratings(
        &self,
        course_id: Uuid,
        user_id: Uuid,
        request: SaveRatingsRequest,
    ) -> ServiceResult<Vec<RatingResponse>> {
        let course = self.require_full_visibility(course_id, user_id).await?;

        let activity = self
            .ctx
            .activity_repo()
            .find_by_id(request.activity_id)
            .await?
            .filter(|a| a.course_id == course.id)
            .ok_or_else(|| {
                ServiceError::not_found("Activity", request.activity_id.to_string())
            })?;

        let mut ratings = Vec::with_capacity(request.ratings.len());
        for entry in request.ratings {
            let student = self
                .ctx
                .student_repo()
                .find_by_id(entry.student_id)
                .await?
                .filter(|s| s.course_id == course.id)
                .ok_or_else(|| {
                    ServiceError::not_found("Student", entry.student_id.to_string())
                })?;

            let rating = Rating::new(student.id, activity.id, entry.score, entry.notes);
            if !rating.score_is_valid() {
                return Err(ServiceError::validation(format!(
                    "Score {} is out of range 0..=10",
                    entry.score
                )));
            }
            ratings.push(rating);
        }

        let saved = self.ctx.rating_repo().upsert_batch(&ratings).await?;

        info!(activity_id = %activity.id, count = saved.len(), "Ratings saved");

        Ok(saved.into_iter().map(RatingResponse::from).collect())
    }

    /// Remove an activity and its ratings. Requires full visibility.
    #[instrument(skip(self))]
    pub async fn delete_activity(
        &self,
        course_id: Uuid,
        activity_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<()> {
        let course = self.require_full_visibility(course_id, user_id).await?;

        let activity = self
            .ctx
            .activity_repo()
            .find_by_id(activity_id)
            .await?
            .filter(|a| a.course_id == course.id)
            .ok_or_else(|| ServiceError::not_found("Activity", activity_id.to_string()))?;

        self.ctx.activity_repo().delete(activity.id).await?;

        info!(activity_id = %activity.id, "Activity deleted");

        Ok(())
    }

    /// Load the course and verify the caller sees all students. Coders
    /// are read-only.
    async fn require_full_visibility(
        &self,
        course_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<track_core::entities::Course> {
        let access = AccessService::new(self.ctx);
        let (course, visibility) = access.require_access(course_id, user_id).await?;

        if visibility != Visibility::All {
            return Err(ServiceError::permission_denied("FULL_COURSE_ACCESS"));
        }

        Ok(course)
    }
}
