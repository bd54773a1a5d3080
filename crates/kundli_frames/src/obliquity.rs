//! Obliquity of the ecliptic.

/// Fixed obliquity used by the ascendant formula, in degrees.
pub const ASCENDANT_OBLIQUITY_DEG: f64 = 23.4397;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascendant_constant_close_to_iau_2006_j2000() {
        // IAU 2006 mean obliquity at J2000.0 is 84381.406″.
        assert!((ASCENDANT_OBLIQUITY_DEG - 84_381.406 / 3600.0).abs() < 0.001);
    }
}
