//! Error types for roster loading.

use thiserror::Error;

/// Failure while fetching or interpreting a roster.
///
/// Both variants are non-fatal to the caller: the session logs them and
/// keeps whatever roster it already had.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    /// The source could not be read (connection failure, non-success
    /// status, unreadable file).
    #[error("transport error: {0}")]
    Transport(String),

    /// The payload was not tabular text with the expected header.
    #[error("parse error: {0}")]
    Parse(String),
}
