//! IAU 2006 general precession in ecliptic longitude.
//!
//! The Keplerian planet vectors are referred to the J2000 ecliptic and
//! equinox. Adding p_A moves their longitudes onto the mean equinox of date.
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567-586 (Table 1).

/// General precession in longitude, in arcseconds.
///
/// `t` = Julian centuries since J2000.0. Positive means the equinox has moved
/// westward and longitudes of date exceed J2000 longitudes.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// General precession in longitude, in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn about_fifty_arcsec_per_year() {
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p_A(0.01) = {p}");
    }

    #[test]
    fn earlier_epochs_are_negative() {
        // 1990 is -0.1 century
        let p = general_precession_longitude_deg(-0.1);
        assert!(p < 0.0 && p > -0.15, "p_A(-0.1) = {p}");
    }
}
