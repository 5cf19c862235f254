//! Frame and angle helpers shared by the ephemeris, chart and line crates.
//!
//! Provides the J2000 obliquity constant, precession to the equinox of
//! date, ecliptic ↔ equatorial conversion, and angle normalization.

pub mod angle;
pub mod equatorial;
pub mod obliquity;
pub mod precession;

pub use angle::{normalize_180, normalize_360, wrap_delta};
pub use equatorial::{EquatorialCoords, ecliptic_to_equatorial};
pub use obliquity::{COS_OBL, OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD, SIN_OBL};
pub use precession::{general_precession_deg, j2000_to_date_longitude};
