use std::fmt;

use crate::routes::DEFAULT_KEY;

/// Errors raised while building a route table
///
/// Both variants are programming errors in the static route entries,
/// so they surface at startup and stop the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    /// The table has no entry for the default key
    MissingDefault,
    /// The same key appears more than once
    DuplicateKey(String),
}

impl fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTableError::MissingDefault => {
                write!(f, "route table is missing its '{}' entry", DEFAULT_KEY)
            }
            RouteTableError::DuplicateKey(key) => {
                write!(f, "route table defines key '{}' more than once", key)
            }
        }
    }
}

impl std::error::Error for RouteTableError {}
