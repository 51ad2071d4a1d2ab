//! Profile entity <-> model mapper

use track_core::entities::Profile;

use crate::models::ProfileModel;

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: model.id,
            github_id: model.github_id,
            username: model.username,
            email: model.email,
            avatar_url: model.avatar_url,
            created_at: model.created_at,
        }
    }
}
