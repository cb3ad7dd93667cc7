//! Corridor zones: variable-width belts around least-cost paths.
//!
//! Edge costs are normalized across the network and inverted, so the
//! cheapest corridor (highest connectivity value) gets the widest belt
//! and the most expensive one the narrowest.

use greenway_geometry::{buffer_line, dissolve};
use greenway_structures::{CorridorEdge, CorridorZone, CorridorZones};
use tracing::info;

use crate::error::{ConnectivityError, ConnectivityResult};

/// Corridor-zone parameters.
#[derive(Debug, Clone)]
pub struct ZoneParams {
    /// Width of the highest-cost corridor (meters).
    pub min_buffer_width_m: f64,
    /// Width of the lowest-cost corridor (meters).
    pub max_buffer_width_m: f64,
    /// Segments per quarter circle for buffering.
    pub quad_segs: usize,
}

/// Buffers every edge to its cost-derived width and dissolves the union.
///
/// Width per edge is `min + (1 - norm) × (max - min)` where `norm` is the
/// edge cost normalized over the whole network. All-identical costs leave
/// the normalization undefined and fail with [`ConnectivityError::DegenerateCost`].
pub fn build_zones(
    edges: &[CorridorEdge],
    params: &ZoneParams,
) -> ConnectivityResult<CorridorZones> {
    if edges.is_empty() {
        return Err(ConnectivityError::EmptyNetwork);
    }

    let costs: Vec<f64> = edges.iter().map(|e| e.cost).collect();
    let cmin = costs.iter().cloned().fold(f64::INFINITY, f64::min);
    let cmax = costs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if cmax == cmin {
        return Err(ConnectivityError::DegenerateCost {
            count: edges.len(),
            cost: cmin,
        });
    }

    let span = params.max_buffer_width_m - params.min_buffer_width_m;
    let mut zones = Vec::with_capacity(edges.len());
    for edge in edges {
        let norm = (edge.cost - cmin) / (cmax - cmin);
        let width = params.min_buffer_width_m + (1.0 - norm) * span;
        let geometry = buffer_line(&edge.path, width, params.quad_segs)?;
        zones.push(CorridorZone {
            from_core: edge.from_core,
            to_core: edge.to_core,
            cost: edge.cost,
            width_m: width,
            geometry,
        });
    }

    let dissolved = dissolve(
        &zones
            .iter()
            .map(|z| z.geometry.clone())
            .collect::<Vec<_>>(),
    );

    info!(zones = zones.len(), "built corridor zones");
    Ok(CorridorZones { zones, dissolved })
}
