//! Top-level WeightSet configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, EngineConfig, ObservabilityConfig};
use crate::errors::ConfigError;

/// Environment variable overriding `observability.log_level`.
pub const ENV_LOG_LEVEL: &str = "WEIGHTSET_LOG_LEVEL";
/// Environment variable overriding `engine.balance_tolerance`.
pub const ENV_BALANCE_TOLERANCE: &str = "WEIGHTSET_BALANCE_TOLERANCE";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`WEIGHTSET_*`), via `apply_env_overrides`
/// 2. TOML file or string
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeightSetConfig {
    pub engine: EngineConfig,
    pub observability: ObservabilityConfig,
}

impl WeightSetConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `WEIGHTSET_*` environment overrides. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            if !level.trim().is_empty() {
                self.observability.log_level = level;
            }
        }
        if let Ok(raw) = std::env::var(ENV_BALANCE_TOLERANCE) {
            if let Ok(tolerance) = raw.trim().parse::<f64>() {
                self.engine.balance_tolerance = tolerance;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let engine = &self.engine;
        if !engine.balance_tolerance.is_finite() || engine.balance_tolerance <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "engine.balance_tolerance".to_string(),
                message: "must be a positive number".to_string(),
            });
        }
        if !engine.correction_epsilon.is_finite() || engine.correction_epsilon <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "engine.correction_epsilon".to_string(),
                message: "must be a positive number".to_string(),
            });
        }
        if engine.decimal_places > defaults::MAX_DECIMAL_PLACES {
            return Err(ConfigError::ValidationFailed {
                field: "engine.decimal_places".to_string(),
                message: format!("must be at most {}", defaults::MAX_DECIMAL_PLACES),
            });
        }
        if self.observability.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
