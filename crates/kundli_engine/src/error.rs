//! Error types for the kundli engine.

use kundli_ephem::EphemError;
use kundli_time::TimeError;
use thiserror::Error;

/// Errors raised while validating input or computing a chart.
///
/// Input is validated before any computation starts; a well-formed
/// [`BirthEvent`](crate::BirthEvent) never fails downstream.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum KundliError {
    /// Latitude or longitude is not finite or out of range.
    #[error("invalid {field}: {value} (expected {expected})")]
    InvalidCoordinate {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
    /// The instant cannot be represented or parsed.
    #[error("invalid instant: {0}")]
    InvalidInstant(String),
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemError),
    /// An instant string was not valid RFC 3339.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// A configuration file or value was rejected.
    #[error("invalid configuration: {0}")]
    Config(String),
}
