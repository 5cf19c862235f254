//! Latitude sampling parameters.

use serde::{Deserialize, Serialize};

use crate::error::LineError;

/// Finest accepted latitude step, degrees (at most 18 001 samples per line).
pub const MIN_LATITUDE_STEP_DEG: f64 = 0.01;

/// How densely lines are sampled and how close to the poles they run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    /// Spacing between latitude samples, degrees.
    pub latitude_step_deg: f64,
    /// Lines stop this far short of each pole, degrees.
    pub pole_margin_deg: f64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            latitude_step_deg: 1.0,
            pole_margin_deg: 1.0,
        }
    }
}

impl LineConfig {
    /// Validate sampling parameters.
    pub fn validate(&self) -> Result<(), LineError> {
        if !self.latitude_step_deg.is_finite() || self.latitude_step_deg <= 0.0 {
            return Err(LineError::InvalidConfig(
                "latitude_step_deg must be finite and positive",
            ));
        }
        if self.latitude_step_deg < MIN_LATITUDE_STEP_DEG {
            return Err(LineError::InvalidConfig("latitude_step_deg must be >= 0.01"));
        }
        if self.latitude_step_deg > 90.0 {
            return Err(LineError::InvalidConfig("latitude_step_deg must be <= 90"));
        }
        if !self.pole_margin_deg.is_finite() || !(0.0..90.0).contains(&self.pole_margin_deg) {
            return Err(LineError::InvalidConfig("pole_margin_deg must be in [0, 90)"));
        }
        Ok(())
    }

    /// Northern and southern sampling limit, degrees.
    pub fn max_latitude_deg(&self) -> f64 {
        90.0 - self.pole_margin_deg
    }

    /// Sampled latitudes, south to north, both limits included.
    ///
    /// Samples sit at `-max + k·step`; the northern limit is appended when
    /// the step does not land on it. Returns an empty grid for an invalid
    /// config.
    pub fn latitudes(&self) -> Vec<f64> {
        if self.validate().is_err() {
            return Vec::new();
        }
        let max = self.max_latitude_deg();
        let step = self.latitude_step_deg;
        let n = ((2.0 * max) / step + 1e-9).floor() as usize;
        let mut lats: Vec<f64> = (0..=n).map(|k| -max + k as f64 * step).collect();
        if lats.last().is_some_and(|&last| max - last > 1e-9) {
            lats.push(max);
        }
        lats
    }
}
