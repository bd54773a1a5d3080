//! Shared angle helpers. Every longitude operation routes through these.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-20 + 360 rounds to 360
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed difference `a − b` wrapped into [-180, 180).
pub fn signed_delta(a: f64, b: f64) -> f64 {
    normalize_360(a - b + 540.0) - 180.0
}

/// Minor-arc separation of two longitudes, [0, 180].
pub fn minor_arc(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 { 360.0 - diff } else { diff }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn signed_delta_wraps_through_zero() {
        assert!((signed_delta(1.0, 359.0) - 2.0).abs() < 1e-12);
        assert!((signed_delta(359.0, 1.0) + 2.0).abs() < 1e-12);
        assert!((signed_delta(100.0, 90.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn minor_arc_symmetric() {
        assert!((minor_arc(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((minor_arc(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((minor_arc(0.0, 180.0) - 180.0).abs() < 1e-12);
    }
}
