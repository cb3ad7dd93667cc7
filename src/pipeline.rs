//! End-to-end connectivity pipeline.
//!
//! Chains the stages in their fixed order: habitat cores, resistance
//! surface, corridor network, corridor zones, bottlenecks. Every stage
//! output is kept in [`PipelineOutput`] so callers can export or inspect
//! intermediate layers.

use thiserror::Error;
use tracing::info;

use greenway_config::{validate_config, ConfigError, GreenwayConfig};
use greenway_connectivity::{
    build_network, build_zones, detect_bottlenecks, extract_cores, rasterize, BottleneckParams,
    ConnectivityError, CoreParams, NetworkParams, RasterParams, ZoneParams,
};
use greenway_structures::{Bottlenecks, CoreSet, CorridorEdge, CorridorZones, LandCoverLayer, ResistanceGrid};

/// Everything the pipeline produces, stage by stage.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub cores: CoreSet,
    pub grid: ResistanceGrid,
    pub edges: Vec<CorridorEdge>,
    pub zones: CorridorZones,
    pub bottlenecks: Bottlenecks,
}

/// Errors surfaced by [`run_pipeline`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Connectivity(#[from] ConnectivityError),
}

/// Runs the full connectivity analysis over one land-cover layer.
///
/// The configuration is validated up front; a failing run leaves no
/// partial output. The resistance extent is derived from the land cover.
pub fn run_pipeline(
    landcover: &LandCoverLayer,
    config: &GreenwayConfig,
) -> Result<PipelineOutput, PipelineError> {
    validate_config(config)?;

    let cores = extract_cores(
        landcover,
        &CoreParams {
            min_patch_area_m2: config.cores.min_patch_area_m2,
            break_distance_m: config.cores.break_distance_m,
            min_core_area_m2: config.cores.min_core_area_m2,
            candidates: config.cores.candidates.clone(),
            quad_segs: config.geometry.quad_segs,
        },
    )?;
    info!(cores = cores.len(), "habitat cores extracted");

    let grid = rasterize(
        landcover,
        &cores,
        &landcover.crs,
        &RasterParams {
            cell_size_m: config.raster.cell_size_m,
            core_cost: config.raster.core_cost,
            green_cost: config.raster.green_cost,
            default_cost: config.raster.default_cost,
            green: config.raster.green.clone(),
        },
        None,
    )?;
    let (rows, cols) = grid.shape();
    info!(rows, cols, "resistance surface rasterized");

    let edges = build_network(
        &cores,
        &grid,
        &NetworkParams {
            significance_threshold_m2: config.network.significance_threshold_m2,
            neighbor_count: config.network.neighbor_count,
        },
    )?;
    info!(edges = edges.len(), "corridor network solved");

    let zones = build_zones(
        &edges,
        &ZoneParams {
            min_buffer_width_m: config.zones.min_buffer_width_m,
            max_buffer_width_m: config.zones.max_buffer_width_m,
            quad_segs: config.geometry.quad_segs,
        },
    )?;

    let bottlenecks = detect_bottlenecks(
        &zones,
        &BottleneckParams {
            percentile: config.bottlenecks.percentile,
        },
    )?;
    info!(
        segments = bottlenecks.segments.len(),
        threshold_m = bottlenecks.threshold_m,
        "bottlenecks flagged"
    );

    Ok(PipelineOutput {
        cores,
        grid,
        edges,
        zones,
        bottlenecks,
    })
}
