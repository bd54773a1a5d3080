//! Birth event input.

use chrono::{DateTime, Utc};
use kundli_time::UtcTime;
use serde::{Deserialize, Serialize};

use crate::error::KundliError;

/// Immutable chart input: a UTC instant and a place on Earth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthEvent {
    pub utc_instant: DateTime<Utc>,
    /// Geographic latitude, degrees in [-90, 90].
    pub latitude_deg: f64,
    /// Geographic longitude, degrees in [-180, 180], east positive.
    pub longitude_deg: f64,
    /// Display only; never used in computation.
    #[serde(default)]
    pub timezone_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

impl BirthEvent {
    /// Build and validate a birth event.
    pub fn new(
        utc_instant: DateTime<Utc>,
        latitude_deg: f64,
        longitude_deg: f64,
        timezone_label: impl Into<String>,
    ) -> Result<Self, KundliError> {
        let event = Self {
            utc_instant,
            latitude_deg,
            longitude_deg,
            timezone_label: timezone_label.into(),
            name: None,
            place: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Build from an RFC 3339 instant string. Parse failures surface as
    /// [`KundliError::Time`].
    pub fn from_rfc3339(
        instant: &str,
        latitude_deg: f64,
        longitude_deg: f64,
        timezone_label: impl Into<String>,
    ) -> Result<Self, KundliError> {
        let utc = UtcTime::parse(instant)?;
        Self::new(utc.datetime(), latitude_deg, longitude_deg, timezone_label)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    /// Check coordinate ranges. Deserialized events should be validated
    /// before use.
    pub fn validate(&self) -> Result<(), KundliError> {
        check_range("latitude", self.latitude_deg, -90.0, 90.0, "-90..=90")?;
        check_range("longitude", self.longitude_deg, -180.0, 180.0, "-180..=180")?;
        Ok(())
    }

    pub fn utc_time(&self) -> UtcTime {
        UtcTime::from_datetime(self.utc_instant)
    }

    /// UTC Julian Date from the Unix timestamp.
    pub fn jd(&self) -> f64 {
        self.utc_time().jd()
    }
}

fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
    expected: &'static str,
) -> Result<(), KundliError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(KundliError::InvalidCoordinate {
            field,
            value,
            expected,
        })
    }
}
