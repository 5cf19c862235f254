//! Astrocartography lines and their qualitative ratings.
//!
//! For each primary planet, four lines are traced on the globe: where the
//! planet culminates (MC), anti-culminates (IC), rises (ASC) and sets
//! (DSC) at the chart moment. Horizon lines can be interrupted by
//! latitude bands where the planet is circumpolar; those bands appear as
//! explicit [`LinePiece::Gap`]s.

pub mod config;
pub mod error;
pub mod sentiment;
pub mod task;
pub mod trace;
pub mod types;

pub use config::{LineConfig, MIN_LATITUDE_STEP_DEG};
pub use error::LineError;
pub use sentiment::{LineRating, LineSentiment, all_ratings, classify};
pub use task::{LineTask, build_tasks, generate_lines, run_tasks};
pub use trace::{meridian_longitude_deg, rising_hour_angle_deg};
pub use types::{ALL_ANGLES, AngleKind, AstroLine, GeoPoint, LinePiece};
