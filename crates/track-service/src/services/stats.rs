//! Statistics service
//!
//! Aggregates ratings into per-day and per-activity averages. The
//! aggregation itself is a pure function over the joined rating rows;
//! visibility filtering happens before aggregation, so a coder's
//! averages cover only their student.

use tracing::instrument;
use uuid::Uuid;

use track_core::traits::StatRow;

use crate::dto::responses::{ActivityStats, CourseStatsResponse, DayStats, StudentScore};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Statistics service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Full course statistics, filtered to the caller's visibility
    #[instrument(skip(self))]
    pub async fn course_stats(
        &self,
        course_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<CourseStatsResponse> {
        let access = AccessService::new(self.ctx);
        let (course, visibility) = access.require_access(course_id, user_id).await?;

        let rows = self.ctx.rating_repo().stat_rows(course.id).await?;
        let visible: Vec<StatRow> = rows
            .into_iter()
            .filter(|r| visibility.can_view_student(r.student_id))
            .collect();

        Ok(build_course_stats(visible))
    }
}

/// Aggregate joined rating rows into day and activity statistics.
///
/// Days are ordered ascending; activities within a day by name. The day
/// average is the mean of every score of that day, not the mean of
/// activity averages, so activities with more rated students weigh more.
pub fn build_course_stats(mut rows: Vec<StatRow>) -> CourseStatsResponse {
    rows.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.activity_name.cmp(&b.activity_name))
            .then_with(|| a.student_name.cmp(&b.student_name))
    });

    let mut days: Vec<DayStats> = Vec::new();

    for row in rows {
        if days.last().map(|d| d.date) != Some(row.date) {
            days.push(DayStats {
                date: row.date,
                average: 0.0,
                activities: Vec::new(),
            });
        }
        let Some(day) = days.last_mut() else { continue };

        if day.activities.last().map(|a| a.activity_id) != Some(row.activity_id) {
            day.activities.push(ActivityStats {
                activity_id: row.activity_id,
                name: row.activity_name.clone(),
                average: 0.0,
                scores: Vec::new(),
            });
        }
        let Some(activity) = day.activities.last_mut() else {
            continue;
        };

        activity.scores.push(StudentScore {
            student_id: row.student_id,
            student_name: row.student_name,
            score: row.score,
        });
    }

    for day in &mut days {
        let mut day_sum = 0.0;
        let mut day_count = 0usize;

        for activity in &mut day.activities {
            let sum: f64 = activity.scores.iter().map(|s| s.score).sum();
            activity.average = sum / activity.scores.len() as f64;
            day_sum += sum;
            day_count += activity.scores.len();
        }

        day.average = day_sum / day_count as f64;
    }

    CourseStatsResponse { days }
}
