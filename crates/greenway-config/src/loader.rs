//! Configuration file loading with override support
//!
//! Two-tier loading: the TOML file provides the base values, environment
//! variables override individual fields at runtime.

use crate::{validate_config, ConfigError, ConfigResult, GreenwayConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name searched for by [`find_config_file`].
pub const CONFIG_FILE_NAME: &str = "greenway.toml";

/// Environment variable pointing at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "GREENWAY_CONFIG_PATH";

/// Find the greenway configuration file.
///
/// Search order:
/// 1. `GREENWAY_CONFIG_PATH` environment variable
/// 2. Current working directory: `./greenway.toml`
/// 3. Parent directories (up to 5 levels, for workspace roots)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` listing every searched location.
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "config file specified by {CONFIG_PATH_ENV} not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        let mut current = cwd;
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent.to_path_buf();
                }
                None => break,
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");
    Err(ConfigError::FileNotFound(format!(
        "'{CONFIG_FILE_NAME}' not found in any of these locations:\n{search_list}\n\nSet {CONFIG_PATH_ENV} to specify a custom location."
    )))
}

/// Load, override and validate the configuration.
///
/// `path = None` triggers automatic discovery via [`find_config_file`].
pub fn load_config(path: Option<&Path>) -> ConfigResult<GreenwayConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => find_config_file()?,
    };

    let text = fs::read_to_string(&path)?;
    let mut config: GreenwayConfig = toml::from_str(&text)?;

    apply_environment_overrides(&mut config)?;
    validate_config(&config)?;
    Ok(config)
}

/// Apply `GREENWAY_*` environment variable overrides.
///
/// Supported overrides cover the parameters most commonly retuned between
/// runs; everything else changes through the TOML file.
pub fn apply_environment_overrides(config: &mut GreenwayConfig) -> ConfigResult<()> {
    override_f64("GREENWAY_CELL_SIZE_M", &mut config.raster.cell_size_m)?;
    override_f64(
        "GREENWAY_SIGNIFICANCE_THRESHOLD_M2",
        &mut config.network.significance_threshold_m2,
    )?;
    override_usize("GREENWAY_NEIGHBOR_COUNT", &mut config.network.neighbor_count)?;
    override_f64(
        "GREENWAY_BOTTLENECK_PERCENTILE",
        &mut config.bottlenecks.percentile,
    )?;
    override_f64("GREENWAY_BREAK_DISTANCE_M", &mut config.cores.break_distance_m)?;
    Ok(())
}

fn override_f64(var: &str, slot: &mut f64) -> ConfigResult<()> {
    if let Ok(raw) = env::var(var) {
        *slot = raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue(format!("{var}={raw} is not a number")))?;
    }
    Ok(())
}

fn override_usize(var: &str, slot: &mut usize) -> ConfigResult<()> {
    if let Ok(raw) = env::var(var) {
        *slot = raw.parse().map_err(|_| {
            ConfigError::InvalidValue(format!("{var}={raw} is not a non-negative integer"))
        })?;
    }
    Ok(())
}
