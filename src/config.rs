//! Builder configuration.
//!
//! Hosts usually take the defaults. A JS host can pass a plain object to
//! `ShapeBuilder.withConfig`, and native callers can parse JSON with
//! [`BuilderConfig::from_json`]. Missing fields fall back to their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_EPSILON;
use crate::error::ConfigError;

/// How [`crate::ShapeBuilder::is_closed`] decides that the figure is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosureMode {
    /// At least three segments and the first start meets the last end.
    #[default]
    Endpoints,
    /// As `Endpoints`, and every segment also starts where the previous one ends.
    Connected,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Tolerance for every coordinate comparison and for the zero-area test.
    pub epsilon: f64,
    pub closure: ClosureMode,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self { epsilon: DEFAULT_EPSILON, closure: ClosureMode::default() }
    }
}

impl BuilderConfig {
    /// Parse and validate a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown closure
    /// modes, and [`ConfigError::InvalidEpsilon`] if validation fails.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    /// Check the config, returning it unchanged when valid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEpsilon`] if epsilon is negative or not finite.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        Ok(self)
    }
}
