//! Caller-facing error type.

use atlas_chart::ChartError;
use atlas_config::ConfigError;
use atlas_lines::LineError;
use atlas_time::TimeError;
use thiserror::Error;

/// Rejected input. Raised before any computation starts, so a failed call
/// never yields partial output.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InputError {
    /// Malformed date/time text or out-of-range calendar field.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Coordinates out of range or non-finite.
    #[error(transparent)]
    Location(#[from] ChartError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<LineError> for InputError {
    fn from(e: LineError) -> Self {
        Self::Config(ConfigError::from(e))
    }
}
