//! Error types for line generation.

use thiserror::Error;

/// Errors from astrocartography line generation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum LineError {
    /// Sampling parameters are unusable.
    #[error("invalid line config: {0}")]
    InvalidConfig(&'static str),
}
