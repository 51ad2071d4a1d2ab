//! Domain entities - core business objects

mod activity;
mod course;
mod invite;
mod profile;
mod rating;
mod share;
mod student;

pub use activity::Activity;
pub use course::{slugify, Course};
pub use invite::{generate_invite_token, Invite};
pub use profile::Profile;
pub use rating::Rating;
pub use share::Share;
pub use student::Student;
