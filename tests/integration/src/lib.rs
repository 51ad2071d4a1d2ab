//! Integration test utilities for the course tracker
//!
//! This crate provides helpers for testing the service layer against
//! in-memory repositories, and for running end-to-end tests against
//! the REST API when a database is available.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
pub use memory::*;
