//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! The ascendant needs the right ascension of the meridian (RAMC), which is
//! local sidereal time expressed in degrees. UT1 is approximated by UTC.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians [0, 2π).
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du), Du = JD − 2451545.0.
pub fn earth_rotation_angle_rad(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians [0, 2π).
///
/// GMST = ERA + polynomial(T) where the polynomial (arcseconds) is
/// 0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
/// − 0.000029956·T⁴ − 0.0000000368·T⁵.
pub fn gmst_rad(jd: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd);
    let t = (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in degrees [0, 360).
pub fn gmst_deg(jd: f64) -> f64 {
    gmst_rad(jd).to_degrees().rem_euclid(360.0)
}

/// Local Sidereal Time in degrees [0, 360), which is also the RAMC.
pub fn local_sidereal_time_deg(jd: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd) + longitude_east_deg).rem_euclid(360.0)
}
