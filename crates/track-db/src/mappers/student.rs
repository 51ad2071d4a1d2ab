//! Student entity <-> model mapper

use track_core::entities::Student;

use crate::models::StudentModel;

impl From<StudentModel> for Student {
    fn from(model: StudentModel) -> Self {
        Student {
            id: model.id,
            course_id: model.course_id,
            first_name: model.first_name,
            last_name: model.last_name,
            cell: model.cell,
            photo_url: model.photo_url,
        }
    }
}
