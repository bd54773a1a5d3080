//! Julian Date arithmetic.
//!
//! Instants reach the engine as Unix timestamps, so the only calendar entry
//! point is the Unix epoch offset.

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Unix seconds (may be fractional or negative) to Julian Date.
pub fn unix_seconds_to_jd(unix_seconds: f64) -> f64 {
    unix_seconds / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Julian years (365.25 days) since J2000.0.
pub fn julian_years_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch() {
        assert_eq!(unix_seconds_to_jd(0.0), UNIX_EPOCH_JD);
        // 2000-01-01T12:00:00Z = 946728000 s
        assert!((unix_seconds_to_jd(946_728_000.0) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn meeus_sputnik_example() {
        // Meeus example 7.a: 1957 Oct 4.81 = JD 2436116.31
        assert!((unix_seconds_to_jd(-386_310_816.0) - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn delhi_1990_instant() {
        // 1990-01-15T10:30Z
        assert!((unix_seconds_to_jd(632_399_400.0) - 2_447_906.9375).abs() < 1e-9);
    }

    #[test]
    fn years_and_centuries() {
        let jd = J2000_JD + DAYS_PER_JULIAN_CENTURY;
        assert!((jd_to_centuries(jd) - 1.0).abs() < 1e-15);
        assert!((julian_years_since_j2000(jd) - 100.0).abs() < 1e-12);
        assert!((julian_years_since_j2000(J2000_JD - 365.25) + 1.0).abs() < 1e-12);
    }
}
