//! Ayanamsha: the tropical-to-sidereal offset.
//!
//! A linear model anchored at 23.85° on J2000.0 and advancing
//! 0.013888888°/year (50″ per year).

use kundli_time::julian_years_since_j2000;

use crate::util::normalize_360;

/// Ayanamsha at J2000.0, degrees.
pub const AYANAMSHA_J2000_DEG: f64 = 23.85;

/// Annual rate, degrees per Julian year.
pub const AYANAMSHA_RATE_DEG_PER_YEAR: f64 = 0.013888888;

/// Ayanamsha in degrees at a Julian Date.
pub fn ayanamsha_deg(jd: f64) -> f64 {
    AYANAMSHA_J2000_DEG + julian_years_since_j2000(jd) * AYANAMSHA_RATE_DEG_PER_YEAR
}

/// Convert a tropical longitude to sidereal, [0, 360).
pub fn tropical_to_sidereal(tropical_lon_deg: f64, ayanamsha: f64) -> f64 {
    normalize_360(tropical_lon_deg - ayanamsha)
}
