//! Invite entity <-> model mapper

use track_core::entities::Invite;
use track_core::error::DomainError;
use track_core::value_objects::Permission;

use crate::models::InviteModel;

/// Parse a permission column value. The table constrains the column to
/// known values, so a parse failure means schema drift.
pub(crate) fn parse_permission(value: &str) -> Result<Permission, DomainError> {
    value
        .parse::<Permission>()
        .map_err(|e| DomainError::InternalError(e.to_string()))
}

impl TryFrom<InviteModel> for Invite {
    type Error = DomainError;

    fn try_from(model: InviteModel) -> Result<Self, Self::Error> {
        Ok(Invite {
            token: model.token,
            course_id: model.course_id,
            permission: parse_permission(&model.permission)?,
            student_id: model.student_id,
            created_at: model.created_at,
            expires_at: model.expires_at,
        })
    }
}
