//! Activity entity <-> model mapper

use track_core::entities::Activity;

use crate::models::ActivityModel;

impl From<ActivityModel> for Activity {
    fn from(model: ActivityModel) -> Self {
        Activity {
            id: model.id,
            course_id: model.course_id,
            date: model.date,
            name: model.name,
        }
    }
}
