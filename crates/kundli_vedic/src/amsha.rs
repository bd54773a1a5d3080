//! Navamsha (D9) divisional mapping.
//!
//! Each 30° sign is split into nine pieces of 3°20′. Piece `k` of sign index
//! `s` maps to sign index `(9·s + k) mod 12`. Odd and even signs use the
//! same origin.

use crate::rashi::{Rashi, rashi_from_longitude};

/// Span of one navamsha piece: 30/9 = 3.3333... degrees.
pub const NAVAMSHA_SPAN: f64 = 30.0 / 9.0;

/// Navamsha rashi from a rashi and the degrees within it.
pub fn navamsha_from_rashi_position(rashi: Rashi, degrees_in_rashi: f64) -> Rashi {
    let piece = ((degrees_in_rashi / NAVAMSHA_SPAN).floor().max(0.0) as u8).min(8);
    Rashi::from_index(((rashi.index() as u16 * 9 + piece as u16) % 12) as u8)
}

/// Navamsha rashi of a sidereal longitude.
pub fn navamsha_rashi(sidereal_lon_deg: f64) -> Rashi {
    let info = rashi_from_longitude(sidereal_lon_deg);
    navamsha_from_rashi_position(info.rashi, info.degrees_in_rashi)
}
