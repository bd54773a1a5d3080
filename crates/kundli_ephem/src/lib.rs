//! Mid-precision analytical ephemeris.
//!
//! Places the Sun, Moon and five classical planets in geocentric ecliptic
//! longitude referred to the mean equinox of date. Planets come from JPL
//! Keplerian elements, the Moon from a truncated Meeus series. Accuracy is
//! of the order of arc-minutes, enough for sign, degree and house placement.
//!
//! Ephemeris time is taken equal to UTC.

pub mod body;
pub mod error;
pub mod kepler;
pub mod lunar;

pub use body::{ALL_BODIES, Body};
pub use error::EphemError;
pub use kepler::{OrbitalElements, heliocentric_position, solve_kepler};
pub use lunar::moon_longitude_deg;

use kundli_frames::{cartesian_to_spherical, general_precession_longitude_deg};
use kundli_time::jd_to_centuries;

/// Geocentric position in the J2000 ecliptic frame (AU) for bodies on
/// Keplerian orbits, and for the Sun.
///
/// Returns `None` for the Moon, which has no vector model here.
pub fn geocentric_ecliptic_j2000(body: Body, t: f64) -> Result<Option<[f64; 3]>, EphemError> {
    let elements = match body {
        Body::Moon => return Ok(None),
        Body::Sun => None,
        Body::Mercury => Some(&kepler::MERCURY),
        Body::Venus => Some(&kepler::VENUS),
        Body::Mars => Some(&kepler::MARS),
        Body::Jupiter => Some(&kepler::JUPITER),
        Body::Saturn => Some(&kepler::SATURN),
    };
    let earth = heliocentric_position(&kepler::EARTH_MOON_BARYCENTER, t)?;
    let geo = match elements {
        None => [-earth[0], -earth[1], -earth[2]],
        Some(el) => {
            let p = heliocentric_position(el, t)?;
            [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]]
        }
    };
    Ok(Some(geo))
}

/// Tropical geocentric ecliptic longitude of date, degrees [0, 360).
pub fn tropical_longitude_deg(body: Body, jd: f64) -> Result<f64, EphemError> {
    if !jd.is_finite() {
        return Err(EphemError::NonFiniteEpoch { jd });
    }
    let t = jd_to_centuries(jd);
    match geocentric_ecliptic_j2000(body, t)? {
        None => Ok(moon_longitude_deg(t)),
        Some(xyz) => {
            let j2000 = cartesian_to_spherical(&xyz).lon_deg;
            Ok((j2000 + general_precession_longitude_deg(t)).rem_euclid(360.0))
        }
    }
}

/// Tropical longitudes of all seven bodies, in [`ALL_BODIES`] order.
pub fn all_tropical_longitudes(jd: f64) -> Result<[f64; 7], EphemError> {
    let mut out = [0.0; 7];
    for (slot, body) in out.iter_mut().zip(ALL_BODIES) {
        *slot = tropical_longitude_deg(body, jd)?;
    }
    Ok(out)
}
