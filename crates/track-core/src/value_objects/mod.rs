//! Value objects - immutable types that represent domain concepts

mod permission;
mod visibility;

pub use permission::{Permission, PermissionParseError};
pub use visibility::Visibility;
