//! Course entity <-> model mapper

use track_core::entities::Course;

use crate::models::CourseModel;

impl From<CourseModel> for Course {
    fn from(model: CourseModel) -> Self {
        Course {
            id: model.id,
            name: model.name,
            slug: model.slug,
            owner_id: model.owner_id,
            created_at: model.created_at,
        }
    }
}
