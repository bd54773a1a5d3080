//! Lunar node (Rahu/Ketu) longitudes.
//!
//! Two modes: a fixed placeholder that pins tropical Rahu to 0°, and the
//! mean ascending node (Meeus, *Astronomical Algorithms* 2nd ed., eq. 47.7).
//! Ketu is always Rahu + 180°.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Nominal daily motion reported for the fixed placeholder nodes.
pub const FIXED_NODE_SPEED_DEG_PER_DAY: f64 = -0.05;

/// How the ascending node is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMode {
    /// Tropical Rahu held at 0° with a nominal retrograde speed.
    #[default]
    Fixed,
    /// Mean ascending node polynomial.
    Mean,
}

/// Mean ascending node (Rahu) tropical longitude in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    normalize_360(
        125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0
            - t4 / 60_616_000.0,
    )
}

/// Tropical Rahu longitude for a node mode.
pub fn tropical_rahu_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Fixed => 0.0,
        NodeMode::Mean => mean_rahu_deg(t),
    }
}

/// Ketu from Rahu: always the opposite point.
pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    normalize_360(rahu_deg + 180.0)
}
