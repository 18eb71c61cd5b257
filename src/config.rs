//! Beam and scene settings supplied by the host as JSON.
//!
//! Every field has a default, so the host only sends what it wants to
//! change: `{}` is a valid config, and `{"beam": {"color": "#0f0"}}` only
//! recolors beams.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{BEAM_LENGTH, DEFAULT_BEAM_COLOR, DEFAULT_SAMPLE_GAP};
use crate::error::ConfigError;

/// Settings shared by every beam the engine fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamConfig {
    /// Distance from the emitter to the far edge, in CSS pixels.
    pub length: f64,
    /// CSS fill color.
    pub color: String,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self { length: BEAM_LENGTH, color: DEFAULT_BEAM_COLOR.to_string() }
    }
}

/// Top-level engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub beam: BeamConfig,
    /// Grid spacing between the beam points probed for DOM targets.
    pub sample_gap: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self { beam: BeamConfig::default(), sample_gap: DEFAULT_SAMPLE_GAP }
    }
}

impl SceneConfig {
    /// Parse and validate a config from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON and
    /// [`ConfigError::Invalid`] for values that fail [`SceneConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field holds a usable value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.beam.length.is_finite() || self.beam.length <= 0.0 {
            return Err(invalid("beam.length", format!("must be a positive number, got {}", self.beam.length)));
        }
        if self.beam.color.trim().is_empty() {
            return Err(invalid("beam.color", "must not be empty".into()));
        }
        if !self.sample_gap.is_finite() || self.sample_gap <= 0.0 {
            return Err(invalid("sample_gap", format!("must be a positive number, got {}", self.sample_gap)));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    log::warn!("rejecting scene config: {field} {reason}");
    ConfigError::Invalid { field, reason }
}
