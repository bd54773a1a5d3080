//! Whole-sign houses measured from the ascendant.
//!
//! House 1 starts at the ascendant longitude; each house spans 30°.

use crate::util::normalize_360;

/// House number (1..12) of a sidereal longitude.
///
/// `house = floor(((lon − asc) mod 360) / 30) mod 12 + 1`.
pub fn house_number(sidereal_lon_deg: f64, ascendant_deg: f64) -> u8 {
    let offset = normalize_360(sidereal_lon_deg - ascendant_deg);
    ((offset / 30.0).floor() as u8 % 12) + 1
}

/// Twelve cusp longitudes, cusp `i` at `asc + 30°·i`.
pub fn house_cusps(ascendant_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(ascendant_deg + 30.0 * i as f64);
    }
    cusps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascendant_itself_is_house_one() {
        assert_eq!(house_number(326.47, 326.47), 1);
    }

    #[test]
    fn just_before_ascendant_is_house_twelve() {
        assert_eq!(house_number(326.47 - 1e-9, 326.47), 12);
        assert_eq!(house_number(326.47 + 1e-9, 326.47), 1);
    }

    #[test]
    fn wraps_through_zero() {
        assert_eq!(house_number(10.0, 350.0), 1);
        assert_eq!(house_number(50.0, 350.0), 3);
        assert_eq!(house_number(349.0, 350.0), 12);
    }

    #[test]
    fn opposite_point_is_house_seven() {
        assert_eq!(house_number(180.0, 0.0), 7);
        assert_eq!(house_number(200.0, 15.0), 7);
    }

    #[test]
    fn cusps_step_thirty_degrees() {
        let c = house_cusps(345.0);
        assert!((c[0] - 345.0).abs() < 1e-12);
        assert!((c[1] - 15.0).abs() < 1e-12);
        assert!((c[11] - 315.0).abs() < 1e-12);
        for cusp in c {
            assert_eq!(house_number(cusp, 345.0), house_number(cusp + 1.0, 345.0));
        }
    }
}
