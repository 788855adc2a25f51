//! Runtime Configuration (treewalk.toml)
//!
//! Handles the settings an interpreter reads before a run.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Nesting depth allowed when no configuration says otherwise
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Runtime configuration from treewalk.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Evaluation limits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<LimitsConfig>,

    /// Output and diagnostics settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,
}

/// Evaluation limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum nesting depth of active node evaluations (default: 512)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

/// Output and diagnostics settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Log every executed statement at debug level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<bool>,
}

impl RuntimeConfig {
    /// Load runtime configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse runtime configuration from TOML text
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::TomlParseError {
            file: Path::new("<inline>").to_path_buf(),
            error: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the runtime configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(0) = self.limits.as_ref().and_then(|l| l.max_depth) {
            return Err(ConfigError::InvalidValue {
                field: "limits.max_depth".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Effective maximum nesting depth
    pub fn max_depth(&self) -> usize {
        self.limits
            .as_ref()
            .and_then(|l| l.max_depth)
            .unwrap_or(DEFAULT_MAX_DEPTH)
    }

    /// Whether statement tracing is enabled
    pub fn trace(&self) -> bool {
        self.output.as_ref().and_then(|o| o.trace).unwrap_or(false)
    }

    /// Set the maximum nesting depth
    pub fn set_max_depth(&mut self, depth: usize) {
        self.limits.get_or_insert_with(Default::default).max_depth = Some(depth);
    }

    /// Enable or disable statement tracing
    pub fn set_trace(&mut self, trace: bool) {
        self.output.get_or_insert_with(Default::default).trace = Some(trace);
    }

    /// Merge another runtime config into this one
    /// Other config takes precedence for non-None values
    pub fn merge(&mut self, other: &RuntimeConfig) {
        if let Some(depth) = other.limits.as_ref().and_then(|l| l.max_depth) {
            self.set_max_depth(depth);
        }
        if let Some(trace) = other.output.as_ref().and_then(|o| o.trace) {
            self.set_trace(trace);
        }
    }
}
