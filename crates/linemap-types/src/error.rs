use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid location mapping ({orig}, {new}): {reason}")]
    InvalidMapping {
        orig: i64,
        new: i64,
        reason: &'static str,
    },

    #[error("invalid version number: {0} (version numbers are 1-based)")]
    InvalidVersionNumber(usize),
}
