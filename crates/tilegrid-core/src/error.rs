//! Error reporting for the tile renderer.
//!
//! All errors are local and recoverable: the host framework that drives the
//! renderer can skip the offending call and carry on. None are fatal.

use std::fmt;

/// Errors reported by the tile renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A palette key or grid coordinate outside the configured bounds.
    OutOfRange {
        /// What was out of range ("palette key", "grid x", ...).
        what: &'static str,
        /// The offending value.
        value: i32,
        /// The exclusive upper bound that was violated.
        limit: i32,
    },
    /// A draw was requested before the grid was allocated, or a non-empty
    /// cell references a palette slot with no registered bitmap.
    NotConfigured(&'static str),
    /// The view configuration cannot produce a drawable layout.
    InvalidConfiguration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { what, value, limit } => {
                write!(f, "{what} {value} out of range [0, {limit})")
            }
            Self::NotConfigured(what) => write!(f, "not configured: {what}"),
            Self::InvalidConfiguration(why) => write!(f, "invalid configuration: {why}"),
        }
    }
}

impl std::error::Error for Error {}
