//! Engine configuration loaded from TOML.
//!
//! Every field has a default, so a partial (or empty) file is valid:
//!
//! ```toml
//! include_minor_bodies = true
//! retrograde_step_days = 0.01
//!
//! [lines]
//! latitude_step_deg = 0.5
//! pole_margin_deg = 1.0
//! ```

use std::path::{Path, PathBuf};

use atlas_ephem::{DEFAULT_RETROGRADE_STEP_DAYS, EphemerisConfig};
use atlas_lines::{LineConfig, LineError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming a config file for [`EngineConfig::discover`].
pub const CONFIG_ENV_VAR: &str = "ATLAS_CONFIG";

/// File name looked up in the working directory by [`EngineConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "atlas.toml";

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

impl From<LineError> for ConfigError {
    fn from(e: LineError) -> Self {
        match e {
            LineError::InvalidConfig(msg) => Self::Invalid(msg),
            _ => Self::Invalid("invalid line config"),
        }
    }
}

/// Caller-supplied options for a whole chart computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Include nodes, Lilith, Chiron and the main-belt asteroids.
    pub include_minor_bodies: bool,
    /// Forward step for the retrograde test, days.
    pub retrograde_step_days: f64,
    pub lines: LineConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            include_minor_bodies: false,
            retrograde_step_days: DEFAULT_RETROGRADE_STEP_DAYS,
            lines: LineConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Load from `$ATLAS_CONFIG`, else `./atlas.toml`, else defaults.
    ///
    /// A file that exists but fails to parse is an error, not a fallback.
    pub fn discover() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load(path);
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(local);
        }
        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.retrograde_step_days.is_finite() || self.retrograde_step_days <= 0.0 {
            return Err(ConfigError::Invalid(
                "retrograde_step_days must be finite and positive",
            ));
        }
        if self.retrograde_step_days > 1.0 {
            return Err(ConfigError::Invalid("retrograde_step_days must be <= 1 day"));
        }
        self.lines.validate()?;
        Ok(())
    }

    /// The ephemeris subset of this config.
    pub fn ephemeris(&self) -> EphemerisConfig {
        EphemerisConfig {
            include_minor_bodies: self.include_minor_bodies,
            retrograde_step_days: self.retrograde_step_days,
        }
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn partial_document() {
        let cfg = EngineConfig::from_toml_str(
            "include_minor_bodies = true\n[lines]\nlatitude_step_deg = 0.5\n",
        )
        .unwrap();
        assert!(cfg.include_minor_bodies);
        assert_eq!(cfg.retrograde_step_days, DEFAULT_RETROGRADE_STEP_DAYS);
        assert_eq!(cfg.lines.latitude_step_deg, 0.5);
        assert_eq!(cfg.lines.pole_margin_deg, 1.0);
    }

    #[test]
    fn ephemeris_subset() {
        let cfg = EngineConfig {
            include_minor_bodies: true,
            retrograde_step_days: 0.05,
            ..EngineConfig::default()
        };
        let eph = cfg.ephemeris();
        assert!(eph.include_minor_bodies);
        assert_eq!(eph.retrograde_step_days, 0.05);
    }

    #[test]
    fn rejects_bad_step() {
        let err = EngineConfig::from_toml_str("retrograde_step_days = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
        let err = EngineConfig::from_toml_str("retrograde_step_days = 3.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_bad_lines() {
        let err = EngineConfig::from_toml_str("[lines]\npole_margin_deg = 95.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unbounded_sampling() {
        for text in ["[lines]\nlatitude_step_deg = 1e-300", "[lines]\nlatitude_step_deg = 1e-6"] {
            let err = EngineConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{text}");
        }
    }

    #[test]
    fn parse_error_surfaces() {
        let err = EngineConfig::from_toml_str("include_minor_bodies = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = EngineConfig::load("/nonexistent/atlas.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/atlas.toml"));
    }

    #[test]
    fn toml_round_trip() {
        let cfg = EngineConfig {
            include_minor_bodies: true,
            ..EngineConfig::default()
        };
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), cfg);
    }
}
