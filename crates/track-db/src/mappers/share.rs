//! Share entity <-> model mapper

use track_core::entities::Share;
use track_core::error::DomainError;

use crate::models::ShareModel;

use super::parse_permission;

impl TryFrom<ShareModel> for Share {
    type Error = DomainError;

    fn try_from(model: ShareModel) -> Result<Self, Self::Error> {
        Ok(Share {
            course_id: model.course_id,
            user_id: model.user_id,
            permission: parse_permission(&model.permission)?,
            student_id: model.student_id,
            created_at: model.created_at,
        })
    }
}
