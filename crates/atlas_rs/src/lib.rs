//! Convenience facade for the astrocartography engine.
//!
//! Takes a [`BirthData`] record and an [`EngineConfig`] and returns
//! positions, the natal chart, the astrocartography lines and their
//! ratings. Callers should only need `use atlas_rs::*`.
//!
//! # Quick start
//!
//! ```rust
//! use atlas_rs::*;
//!
//! let birth = BirthData::new("1990-06-15", "14:30", 40.7128, -74.0060);
//! let report = chart_report(&birth, &EngineConfig::default()).unwrap();
//! assert_eq!(report.lines.len(), 40);
//! println!("Sun in {}", report.chart.sun().unwrap().position);
//! ```

pub mod birth;
pub mod convenience;
pub mod error;

pub use birth::BirthData;
pub use convenience::{
    ChartReport, astro_lines, chart_report, julian_moment, line_ratings, natal_chart,
    planet_positions,
};
pub use error::InputError;

// Re-export the types appearing in the facade's signatures.
pub use atlas_chart::{
    BodyPlacement, ChartAngles, ChartError, Element, GeoLocation, Modality, NatalChart,
    SignPosition, ZodiacSign, sign_position,
};
pub use atlas_config::{ConfigError, EngineConfig};
pub use atlas_ephem::{Body, MinorBody, Planet, PlanetPosition};
pub use atlas_lines::{
    AngleKind, AstroLine, GeoPoint, LineConfig, LinePiece, LineRating, LineSentiment, classify,
};
pub use atlas_time::{CivilTime, JulianMoment, TimeError, TimeReference};
