//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod access;
pub mod auth;
pub mod context;
pub mod course;
pub mod error;
pub mod invite;
pub mod stats;
pub mod student;
pub mod tracking;

// Re-export all services for convenience
pub use access::AccessService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use course::CourseService;
pub use error::{ServiceError, ServiceResult};
pub use invite::InviteService;
pub use stats::StatsService;
pub use student::StudentService;
pub use tracking::TrackingService;
