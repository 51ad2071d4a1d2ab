//! Entity <-> model mappers

mod activity;
mod course;
mod invite;
mod profile;
mod rating;
mod share;
mod student;

pub(crate) use invite::parse_permission;
