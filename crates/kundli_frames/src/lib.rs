//! Frame helpers for the analytical ephemeris and the ascendant.
//!
//! Provides the ascendant obliquity, IAU 2006 general precession in
//! longitude, and Cartesian ↔ spherical conversion.

pub mod obliquity;
pub mod precession;
pub mod spherical;

pub use obliquity::ASCENDANT_OBLIQUITY_DEG;
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
pub use spherical::{SphericalCoords, cartesian_to_spherical, ecliptic_longitude_deg};
