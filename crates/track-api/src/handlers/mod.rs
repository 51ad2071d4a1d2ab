//! Request handlers
//!
//! Handler functions organized by resource.

pub mod auth;
pub mod courses;
pub mod health;
pub mod invites;
pub mod stats;
pub mod students;
pub mod tracking;
