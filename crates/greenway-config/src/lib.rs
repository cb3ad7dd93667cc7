//! # Greenway configuration system
//!
//! Type-safe TOML configuration for the connectivity pipeline:
//! - TOML file parsing with automatic discovery
//! - Environment variable overrides
//! - Validation that names the offending field, so failures downstream can
//!   point at the parameter to retune
//!
//! ## Usage
//!
//! ```rust,no_run
//! use greenway_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("cell size: {} m", config.raster.cell_size_m);
//! ```
//!
//! Every tunable the pipeline exposes lives here; nothing is hardcoded in
//! the algorithm crates.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{apply_environment_overrides, find_config_file, load_config};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
