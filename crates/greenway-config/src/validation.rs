//! Configuration validation
//!
//! Ensures parameter values are individually sane and mutually consistent.
//! Every validation message names the offending field so the user knows
//! what to retune.

use crate::{ConfigError, ConfigResult, GreenwayConfig};

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    NonPositive { field: String, value: f64 },
    InvalidRange { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} = {value} must be positive")
            }
            Self::InvalidRange { field, reason } => {
                write!(f, "invalid value for {field}: {reason}")
            }
        }
    }
}

/// Validate the complete configuration.
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` aggregating every violation.
pub fn validate_config(config: &GreenwayConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    check_positive(config.cores.break_distance_m, "cores.break_distance_m", &mut errors);
    check_non_negative(config.cores.min_patch_area_m2, "cores.min_patch_area_m2", &mut errors);
    check_non_negative(config.cores.min_core_area_m2, "cores.min_core_area_m2", &mut errors);

    check_positive(config.raster.cell_size_m, "raster.cell_size_m", &mut errors);
    check_positive(config.raster.core_cost as f64, "raster.core_cost", &mut errors);
    check_positive(config.raster.green_cost as f64, "raster.green_cost", &mut errors);
    check_positive(config.raster.default_cost as f64, "raster.default_cost", &mut errors);
    if !(config.raster.core_cost <= config.raster.green_cost
        && config.raster.green_cost <= config.raster.default_cost)
    {
        errors.push(ConfigValidationError::InvalidRange {
            field: "raster.core_cost/green_cost/default_cost".to_string(),
            reason: format!(
                "priority order requires core_cost <= green_cost <= default_cost, got {} / {} / {}",
                config.raster.core_cost, config.raster.green_cost, config.raster.default_cost
            ),
        });
    }

    check_non_negative(
        config.network.significance_threshold_m2,
        "network.significance_threshold_m2",
        &mut errors,
    );
    if config.network.neighbor_count == 0 {
        errors.push(ConfigValidationError::InvalidRange {
            field: "network.neighbor_count".to_string(),
            reason: "at least 1 neighbor per core is required".to_string(),
        });
    }

    check_positive(config.zones.min_buffer_width_m, "zones.min_buffer_width_m", &mut errors);
    if config.zones.max_buffer_width_m <= config.zones.min_buffer_width_m {
        errors.push(ConfigValidationError::InvalidRange {
            field: "zones.max_buffer_width_m".to_string(),
            reason: format!(
                "must exceed zones.min_buffer_width_m ({} <= {})",
                config.zones.max_buffer_width_m, config.zones.min_buffer_width_m
            ),
        });
    }
    if config.geometry.quad_segs == 0 {
        errors.push(ConfigValidationError::InvalidRange {
            field: "geometry.quad_segs".to_string(),
            reason: "at least 1 segment per quarter circle is required".to_string(),
        });
    }

    if !(config.bottlenecks.percentile > 0.0 && config.bottlenecks.percentile <= 100.0) {
        errors.push(ConfigValidationError::InvalidRange {
            field: "bottlenecks.percentile".to_string(),
            reason: format!("{} is outside (0, 100]", config.bottlenecks.percentile),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        let joined = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Err(ConfigError::ValidationError(joined))
    }
}

fn check_positive(value: f64, field: &str, errors: &mut Vec<ConfigValidationError>) {
    if !(value > 0.0) {
        errors.push(ConfigValidationError::NonPositive {
            field: field.to_string(),
            value,
        });
    }
}

fn check_non_negative(value: f64, field: &str, errors: &mut Vec<ConfigValidationError>) {
    if !(value >= 0.0) {
        errors.push(ConfigValidationError::InvalidRange {
            field: field.to_string(),
            reason: format!("{value} must not be negative"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GreenwayConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&GreenwayConfig::default()).is_ok());
    }

    #[test]
    fn zero_cell_size_names_field() {
        let mut config = GreenwayConfig::default();
        config.raster.cell_size_m = 0.0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("raster.cell_size_m"));
    }

    #[test]
    fn inverted_buffer_widths_name_field() {
        let mut config = GreenwayConfig::default();
        config.zones.min_buffer_width_m = 400.0; // above max (350)
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("zones.max_buffer_width_m"));
    }

    #[test]
    fn broken_cost_priority_order_is_rejected() {
        let mut config = GreenwayConfig::default();
        config.raster.core_cost = 25.0; // above default_cost
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("core_cost"));
    }

    #[test]
    fn out_of_range_percentile_is_rejected() {
        let mut config = GreenwayConfig::default();
        config.bottlenecks.percentile = 120.0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("bottlenecks.percentile"));
    }

    #[test]
    fn multiple_violations_are_aggregated() {
        let mut config = GreenwayConfig::default();
        config.raster.cell_size_m = -1.0;
        config.network.neighbor_count = 0;
        let err = validate_config(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("raster.cell_size_m"));
        assert!(msg.contains("network.neighbor_count"));
    }
}
