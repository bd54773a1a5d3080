//! Time handling for the kundli engine.
//!
//! This crate provides:
//! - Julian Date arithmetic
//! - `UtcTime`, the calendar-of-record UTC instant used by every stage
//! - Greenwich and local sidereal time
//!
//! Ephemeris time is taken equal to UTC throughout: the analytical theories
//! downstream are accurate to arc-minutes, well above the ΔT effect.

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD,
    jd_to_centuries, julian_years_since_j2000, unix_seconds_to_jd,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_deg, gmst_rad, local_sidereal_time_deg};
pub use utc_time::UtcTime;
