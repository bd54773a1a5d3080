//! UTC instant with calendar-of-record access.
//!
//! Wraps a `chrono::DateTime<Utc>`. The Julian Date is derived from the Unix
//! timestamp so that sub-second precision survives.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Timelike, Utc};

use crate::error::TimeError;
use crate::julian::unix_seconds_to_jd;

/// A universal instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcTime {
    instant: DateTime<Utc>,
}

impl UtcTime {
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Parse an RFC 3339 timestamp; any offset is converted to UTC.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let parsed = DateTime::parse_from_rfc3339(s.trim()).map_err(|e| TimeError::Parse {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            instant: parsed.with_timezone(&Utc),
        })
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Julian Date (UTC) of this instant.
    pub fn jd(&self) -> f64 {
        let secs = self.instant.timestamp() as f64
            + self.instant.timestamp_subsec_nanos() as f64 * 1e-9;
        unix_seconds_to_jd(secs)
    }

    /// UTC time of day in fractional hours [0, 24).
    pub fn fractional_hour(&self) -> f64 {
        self.instant.hour() as f64
            + self.instant.minute() as f64 / 60.0
            + (self.instant.second() as f64 + self.instant.nanosecond() as f64 * 1e-9) / 3600.0
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::from_datetime(instant)
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.instant.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}
