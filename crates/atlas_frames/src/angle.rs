//! Angle normalization helpers (degrees).

/// Normalize an angle to [0, 360).
///
/// Tiny negative inputs whose `rem_euclid` rounds up to 360.0 map to 0.0,
/// so the result is always strictly below 360.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to [-180, 180).
pub fn normalize_180(deg: f64) -> f64 {
    normalize_360(deg + 180.0) - 180.0
}

/// Signed shortest difference `to - from`, in [-180, 180).
///
/// Used wherever a quantity crosses the 360°/0° seam: longitude rates,
/// unwrapping a path of longitudes.
pub fn wrap_delta(from: f64, to: f64) -> f64 {
    normalize_180(to - from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_basic() {
        assert_eq!(normalize_360(0.0), 0.0);
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-15);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn normalize_signed() {
        assert!((normalize_180(190.0) - -170.0).abs() < 1e-12);
        assert!((normalize_180(-74.0) - -74.0).abs() < 1e-12);
        assert_eq!(normalize_180(180.0), -180.0);
    }

    #[test]
    fn delta_across_seam() {
        assert!((wrap_delta(359.5, 0.5) - 1.0).abs() < 1e-12);
        assert!((wrap_delta(0.5, 359.5) - -1.0).abs() < 1e-12);
        assert!((wrap_delta(179.0, -179.0) - 2.0).abs() < 1e-12);
    }
}
