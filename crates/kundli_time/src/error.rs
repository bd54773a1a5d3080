//! Error types for time handling.

use thiserror::Error;

/// Errors from instant parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The instant string is not valid RFC 3339.
    #[error("cannot parse instant {input:?}: {reason}")]
    Parse { input: String, reason: String },
}
