//! Database models - SQLx-compatible structs for PostgreSQL tables

mod activity;
mod course;
mod invite;
mod profile;
mod rating;
mod share;
mod student;

pub use activity::ActivityModel;
pub use course::CourseModel;
pub use invite::InviteModel;
pub use profile::ProfileModel;
pub use rating::{RatingModel, StatRowModel};
pub use share::ShareModel;
pub use student::StudentModel;
