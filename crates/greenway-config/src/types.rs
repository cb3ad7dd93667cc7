//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `greenway.toml`. Defaults carry the reference Strasbourg parameter set.

use greenway_structures::ClassMatcher;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GreenwayConfig {
    pub geometry: GeometryConfig,
    pub cores: CoresConfig,
    pub raster: RasterConfig,
    pub network: NetworkConfig,
    pub zones: ZonesConfig,
    pub bottlenecks: BottlenecksConfig,
}

/// Shared geometry settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Circle-approximation segments per quarter circle for all buffering.
    /// One value for the whole run keeps area comparisons stable.
    pub quad_segs: usize,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self { quad_segs: 8 }
    }
}

/// Habitat-core extraction parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CoresConfig {
    /// Remove tiny habitat fragments before building cores.
    pub min_patch_area_m2: f64,
    /// Negative-buffer distance that severs corridor-like connections
    /// narrower than twice this value (20-60 m typical).
    pub break_distance_m: f64,
    /// Final cores must be at least this large (10-50 ha typical).
    pub min_core_area_m2: f64,
    /// Which land-cover tags count as habitat candidates.
    pub candidates: ClassMatcher,
}

impl Default for CoresConfig {
    fn default() -> Self {
        Self {
            min_patch_area_m2: 10_000.0,  // 1 ha
            break_distance_m: 30.0,
            min_core_area_m2: 200_000.0,  // 20 ha
            candidates: ClassMatcher {
                landuse: vec!["forest".to_string()],
                natural: vec![
                    "wood".to_string(),
                    "wetland".to_string(),
                    "grassland".to_string(),
                ],
                leisure: Vec::new(),
            },
        }
    }
}

/// Resistance-surface rasterization parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Grid cell edge length in meters (50 m is reasonable at city scale).
    pub cell_size_m: f64,
    /// Cost burned for cells inside a habitat core (highest priority).
    pub core_cost: f32,
    /// Cost burned for semi-natural green space (second priority).
    pub green_cost: f32,
    /// Fill cost for everything else.
    pub default_cost: f32,
    /// Which land-cover tags count as semi-natural green space.
    pub green: ClassMatcher,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            cell_size_m: 50.0,
            core_cost: 1.0,
            green_cost: 5.0,
            default_cost: 20.0,
            green: ClassMatcher {
                landuse: vec![
                    "grass".to_string(),
                    "meadow".to_string(),
                    "recreation_ground".to_string(),
                ],
                natural: Vec::new(),
                leisure: vec!["park".to_string()],
            },
        }
    }
}

/// Corridor-network parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Only cores at least this large are connected.
    pub significance_threshold_m2: f64,
    /// Nearest neighbors connected per significant core.
    pub neighbor_count: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            significance_threshold_m2: 150_000.0, // 15 ha
            neighbor_count: 3,
        }
    }
}

/// Corridor-zone parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ZonesConfig {
    /// Width assigned to the highest-cost corridor (meters).
    pub min_buffer_width_m: f64,
    /// Width assigned to the lowest-cost corridor (meters).
    pub max_buffer_width_m: f64,
}

impl Default for ZonesConfig {
    fn default() -> Self {
        Self {
            min_buffer_width_m: 80.0,
            max_buffer_width_m: 350.0,
        }
    }
}

/// Bottleneck-detection parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BottlenecksConfig {
    /// Zones with width at or below this percentile are bottlenecks.
    pub percentile: f64,
}

impl Default for BottlenecksConfig {
    fn default() -> Self {
        Self { percentile: 20.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_parameters() {
        let config = GreenwayConfig::default();
        assert_eq!(config.cores.break_distance_m, 30.0);
        assert_eq!(config.cores.min_core_area_m2, 200_000.0);
        assert_eq!(config.raster.cell_size_m, 50.0);
        assert_eq!(config.raster.default_cost, 20.0);
        assert_eq!(config.network.neighbor_count, 3);
        assert_eq!(config.zones.max_buffer_width_m, 350.0);
        assert_eq!(config.bottlenecks.percentile, 20.0);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: GreenwayConfig = toml::from_str(
            r#"
            [raster]
            cell_size_m = 25.0

            [network]
            neighbor_count = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.raster.cell_size_m, 25.0);
        assert_eq!(config.network.neighbor_count, 2);
        // Untouched sections keep their defaults.
        assert_eq!(config.raster.default_cost, 20.0);
        assert_eq!(config.cores.break_distance_m, 30.0);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = GreenwayConfig::default();
        let text = toml::to_string(&config).unwrap();
        let back: GreenwayConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.zones.min_buffer_width_m, config.zones.min_buffer_width_m);
        assert_eq!(back.cores.candidates.landuse, config.cores.candidates.landuse);
    }
}
