//! Permission tier granted by an invitation or share

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Permission tier for shared course access.
///
/// `Tl` grants read access to every student in the course; `Coder` is
/// restricted to a single named student. Course owners never hold a
/// permission - ownership implies full access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Tl,
    Coder,
}

impl Permission {
    /// String form used in the database and on the wire
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tl => "tl",
            Self::Coder => "coder",
        }
    }

    /// Whether this tier requires a student scope
    #[must_use]
    pub fn requires_student(&self) -> bool {
        matches!(self, Self::Coder)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown permission string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown permission: {0}")]
pub struct PermissionParseError(pub String);

impl FromStr for Permission {
    type Err = PermissionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tl" => Ok(Self::Tl),
            "coder" => Ok(Self::Coder),
            other => Err(PermissionParseError(other.to_string())),
        }
    }
}
