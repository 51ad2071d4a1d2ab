//! # track-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    generate_invite_token, slugify, Activity, Course, Invite, Profile, Rating, Share, Student,
};
pub use error::DomainError;
pub use traits::{
    ActivityRepository, CourseRepository, InviteRepository, ProfileRepository, RatingRepository,
    RepoResult, ShareRepository, StatRow, StudentRepository,
};
pub use value_objects::{Permission, PermissionParseError, Visibility};
