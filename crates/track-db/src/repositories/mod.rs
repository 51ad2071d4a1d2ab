//! PostgreSQL repository implementations

mod activity;
mod course;
mod error;
mod invite;
mod profile;
mod rating;
mod share;
mod student;

pub use activity::PgActivityRepository;
pub use course::PgCourseRepository;
pub use invite::PgInviteRepository;
pub use profile::PgProfileRepository;
pub use rating::PgRatingRepository;
pub use share::PgShareRepository;
pub use student::PgStudentRepository;
