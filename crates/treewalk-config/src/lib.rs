//! Treewalk Configuration System
//!
//! Provides the settings that shape an evaluation run:
//! - Runtime configuration (treewalk.toml)
//! - Environment variable overrides (TREEWALK_*)
//! - Configuration precedence and merging
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded and merged in the following order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Project config (./treewalk.toml, searched upwards)
//! 3. Environment variables (TREEWALK_*)
//!
//! # Example
//!
//! ```no_run
//! use treewalk_config::ConfigLoader;
//! use std::path::Path;
//!
//! let loader = ConfigLoader::new();
//! let config = loader.load_from_directory(Path::new(".")).unwrap();
//! println!("max depth: {}", config.max_depth());
//! ```

pub mod loader;
pub mod runtime;

use std::path::PathBuf;
use thiserror::Error;

/// Name of the configuration file looked up by the loader
pub const CONFIG_FILE_NAME: &str = "treewalk.toml";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

// Re-export main types
pub use loader::{ConfigLoader, LoadedConfig};
pub use runtime::{LimitsConfig, OutputConfig, RuntimeConfig, DEFAULT_MAX_DEPTH};
