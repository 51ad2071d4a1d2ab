pub mod repositories;

pub use repositories::{
    ActivityRepository, CourseRepository, InviteRepository, ProfileRepository, RatingRepository,
    RepoResult, ShareRepository, StatRow, StudentRepository,
};
