//! Lagna (ascendant) computation.
//!
//! The default simplified formula ignores observer latitude:
//! `Asc = atan2(sin(RAMC)·cos ε, cos RAMC)` with ε = 23.4397°.
//! The spherical formula (Meeus ch. 13) uses latitude:
//! `Asc = atan2(cos RAMC, −(sin RAMC·cos ε + tan φ·sin ε))`,
//! the quadrant chosen so the eastern (rising) intersection is returned.
//! The spherical form degenerates near the poles.

use serde::{Deserialize, Serialize};

use kundli_frames::ASCENDANT_OBLIQUITY_DEG;
use kundli_time::local_sidereal_time_deg;

use crate::util::normalize_360;

/// Which ascendant formula to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LagnaMode {
    /// Latitude-free formula.
    #[default]
    Simplified,
    /// Standard spherical-astronomy formula using observer latitude.
    Spherical,
}

/// Tropical ascendant longitude in degrees [0, 360) from RAMC.
pub fn tropical_lagna_deg(ramc_deg: f64, latitude_deg: f64, mode: LagnaMode) -> f64 {
    let ramc = ramc_deg.to_radians();
    let eps = ASCENDANT_OBLIQUITY_DEG.to_radians();
    let asc = match mode {
        LagnaMode::Simplified => f64::atan2(ramc.sin() * eps.cos(), ramc.cos()),
        LagnaMode::Spherical => {
            let phi = latitude_deg.to_radians();
            f64::atan2(ramc.cos(), -(ramc.sin() * eps.cos() + phi.tan() * eps.sin()))
        }
    };
    normalize_360(asc.to_degrees())
}

/// Sidereal ascendant for an instant and place.
///
/// `jd` is the UTC Julian Date, `longitude_east_deg` positive east.
pub fn sidereal_lagna_deg(
    jd: f64,
    latitude_deg: f64,
    longitude_east_deg: f64,
    ayanamsha: f64,
    mode: LagnaMode,
) -> f64 {
    let ramc = local_sidereal_time_deg(jd, longitude_east_deg);
    normalize_360(tropical_lagna_deg(ramc, latitude_deg, mode) - ayanamsha)
}
