//! Kernel configuration.
//!
//! The kernel operations are pure functions; the few numeric knobs that are
//! not fixed by the geometry itself live here so callers can tune them once.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Error, Result};

/// Tunable parameters of the geometry kernel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Maximum distance between a curve and its polyline approximation when
    /// outlines are handed to the polygon clipper
    pub flatten_tolerance: f64,
    /// Whether alignment and distribution measure shapes including half the
    /// stroke width
    pub alignment_includes_stroke: bool,
    /// Default step count for rough (sampled) arc rendering
    pub arc_sample_steps: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            flatten_tolerance: 0.05,
            alignment_includes_stroke: false,
            arc_sample_steps: 32,
        }
    }
}

impl KernelConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        config.validate()?;
        debug!(path = %path.display(), ?config, "Loaded kernel config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        std::fs::write(path, content).map_err(Error::from)
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !self.flatten_tolerance.is_finite() || self.flatten_tolerance <= 0.0 {
            return Err(ConfigError::invalid(
                "flatten_tolerance",
                "must be a finite number > 0",
            ));
        }

        if self.arc_sample_steps == 0 {
            return Err(ConfigError::invalid("arc_sample_steps", "must be > 0"));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
