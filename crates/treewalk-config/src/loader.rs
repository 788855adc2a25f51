//! Configuration Loader
//!
//! Handles loading and merging configuration from multiple sources with proper precedence.

use crate::runtime::RuntimeConfig;
use crate::{ConfigError, ConfigResult, CONFIG_FILE_NAME};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding `limits.max_depth`
pub const ENV_MAX_DEPTH: &str = "TREEWALK_MAX_DEPTH";
/// Environment variable overriding `output.trace`
pub const ENV_TRACE: &str = "TREEWALK_TRACE";

/// Configuration loader
///
/// Loads configuration from multiple sources and merges them with proper precedence:
/// 1. Built-in defaults - lowest priority
/// 2. Project config (./treewalk.toml) - overrides defaults
/// 3. Environment variables (TREEWALK_*) - overrides project
pub struct ConfigLoader {
    /// File name searched for while walking up the directory tree
    file_name: String,
}

/// Merged configuration result
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// Effective runtime configuration
    pub runtime: RuntimeConfig,

    /// Directory where treewalk.toml was found
    pub config_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            file_name: CONFIG_FILE_NAME.to_string(),
        }
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find treewalk.toml, then applies
    /// environment variable overrides.
    pub fn load_from_directory(&self, start_dir: &Path) -> ConfigResult<LoadedConfig> {
        let (config_root, runtime) = self.find_config(start_dir)?;
        let runtime = self.apply_env_overrides(runtime)?;

        Ok(LoadedConfig {
            runtime,
            config_root,
        })
    }

    /// Load configuration from a specific config file
    pub fn load_from_file(&self, config_path: &Path) -> ConfigResult<LoadedConfig> {
        let runtime = RuntimeConfig::load_from_file(config_path)?;
        let runtime = self.apply_env_overrides(runtime)?;

        Ok(LoadedConfig {
            runtime,
            config_root: config_path.parent().map(|p| p.to_path_buf()),
        })
    }

    /// Find the config file by walking up the directory tree
    ///
    /// Returns (config_root, runtime_config); defaults when nothing is found
    fn find_config(&self, start_dir: &Path) -> ConfigResult<(Option<PathBuf>, RuntimeConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(&self.file_name);

            if config_path.exists() {
                let config = RuntimeConfig::load_from_file(&config_path)?;
                return Ok((Some(current), config));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok((None, RuntimeConfig::default())),
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Environment variables follow the pattern: TREEWALK_<KEY>
    /// Example: TREEWALK_MAX_DEPTH=128
    fn apply_env_overrides(&self, mut config: RuntimeConfig) -> ConfigResult<RuntimeConfig> {
        if let Ok(depth) = env::var(ENV_MAX_DEPTH) {
            let depth = depth
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: ENV_MAX_DEPTH.to_string(),
                    reason: e.to_string(),
                })?;
            config.set_max_depth(depth);
        }

        if let Ok(trace) = env::var(ENV_TRACE) {
            let trace_bool = matches!(trace.to_lowercase().as_str(), "true" | "1" | "yes");
            config.set_trace(trace_bool);
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadedConfig {
    /// Effective maximum nesting depth
    pub fn max_depth(&self) -> usize {
        self.runtime.max_depth()
    }

    /// Whether statement tracing is enabled
    pub fn trace(&self) -> bool {
        self.runtime.trace()
    }

    /// Directory holding the config file, if one was found
    pub fn config_root(&self) -> Option<&Path> {
        self.config_root.as_deref()
    }

    /// Check if a treewalk.toml was found
    pub fn has_config_file(&self) -> bool {
        self.config_root.is_some()
    }
}
