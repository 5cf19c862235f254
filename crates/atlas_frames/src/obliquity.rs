//! Mean obliquity of the ecliptic at J2000.0.
//!
//! ε₀ = 84381.448″ = 23°26′21.448″ (IAU 1976). The engine treats it as a
//! constant; the secular drift (−47″ per century) is far below the
//! precision the orbital-element ephemeris delivers.

/// Obliquity in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_111;

/// Obliquity in radians.
pub const OBLIQUITY_J2000_RAD: f64 = OBLIQUITY_J2000_DEG * std::f64::consts::PI / 180.0;

/// cos ε₀.
pub const COS_OBL: f64 = 0.917_482_062_069_953_2;

/// sin ε₀.
pub const SIN_OBL: f64 = 0.397_777_155_930_134_5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trig_constants_match() {
        assert!((OBLIQUITY_J2000_RAD.cos() - COS_OBL).abs() < 1e-12);
        assert!((OBLIQUITY_J2000_RAD.sin() - SIN_OBL).abs() < 1e-12);
    }

    #[test]
    fn close_to_nominal() {
        assert!((OBLIQUITY_J2000_DEG - 23.4393).abs() < 1e-4);
    }
}
