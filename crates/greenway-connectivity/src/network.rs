//! Corridor network construction.
//!
//! Significant cores are paired with their k nearest neighbors by centroid
//! distance and each ordered pair gets a least-cost path. The k-nearest
//! relation is directed and possibly asymmetric: A may list B without B
//! listing A, and the A→B and B→A paths are solved independently and both
//! retained - no deduplication, no symmetrization.
//!
//! Path solves only read the shared resistance grid, so with the
//! `parallel` feature the pair list is partitioned across a rayon pool.
//! Results are collected in pair order (source, neighbor rank) regardless
//! of completion order, keeping downstream output reproducible.

use geo::{Centroid, EuclideanDistance, LineString, Point};
use greenway_geometry::GeometryError;
use greenway_structures::{CoreSet, CorridorEdge, HabitatCore, ResistanceGrid};
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{ConnectivityError, ConnectivityResult};
use crate::solver;

/// Corridor-network parameters.
#[derive(Debug, Clone)]
pub struct NetworkParams {
    /// Cores below this area are not connected (m²).
    pub significance_threshold_m2: f64,
    /// Nearest neighbors connected per significant core.
    pub neighbor_count: usize,
}

/// Builds the directed corridor network between significant cores.
///
/// The edge list has exactly `|significant| × min(k, |significant|-1)`
/// entries; any failed path attempt aborts the run with the first error.
pub fn build_network(
    cores: &CoreSet,
    grid: &ResistanceGrid,
    params: &NetworkParams,
) -> ConnectivityResult<Vec<CorridorEdge>> {
    grid.crs().ensure_matches(&cores.crs, "corridor network")?;

    let significant: Vec<&HabitatCore> = cores
        .cores
        .iter()
        .filter(|c| c.area_m2 >= params.significance_threshold_m2)
        .collect();
    if significant.len() < 2 {
        return Err(ConnectivityError::InsufficientCores {
            found: significant.len(),
            threshold_m2: params.significance_threshold_m2,
        });
    }
    debug!(
        significant = significant.len(),
        total = cores.len(),
        "selected significant cores"
    );

    let centroids = significant
        .iter()
        .map(|core| {
            core.geometry.centroid().ok_or_else(|| {
                GeometryError::Empty {
                    context: format!("centroid of core {}", core.core_id),
                }
            })
        })
        .collect::<Result<Vec<Point<f64>>, _>>()?;

    let pairs = nearest_neighbor_pairs(&significant, &centroids, params.neighbor_count);

    let solve_pair = |&(i, j): &(usize, usize)| -> ConnectivityResult<CorridorEdge> {
        solve_edge(
            grid,
            significant[i],
            significant[j],
            centroids[i],
            centroids[j],
        )
    };

    #[cfg(feature = "parallel")]
    let edges: ConnectivityResult<Vec<CorridorEdge>> = pairs.par_iter().map(solve_pair).collect();
    #[cfg(not(feature = "parallel"))]
    let edges: ConnectivityResult<Vec<CorridorEdge>> = pairs.iter().map(solve_pair).collect();
    let edges = edges?;

    info!(edges = edges.len(), "built corridor network");
    Ok(edges)
}

/// Ordered (source index, neighbor index) pairs: for each core, its k
/// nearest other cores by ascending centroid distance, ties broken by
/// core id so the pairing is deterministic.
fn nearest_neighbor_pairs(
    significant: &[&HabitatCore],
    centroids: &[Point<f64>],
    neighbor_count: usize,
) -> Vec<(usize, usize)> {
    let n = significant.len();
    let k = neighbor_count.min(n - 1);
    let mut pairs = Vec::with_capacity(n * k);
    for i in 0..n {
        let mut others: Vec<(usize, f64)> = (0..n)
            .filter(|&j| j != i)
            .map(|j| (j, centroids[i].euclidean_distance(&centroids[j])))
            .collect();
        others.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| significant[a.0].core_id.cmp(&significant[b.0].core_id))
        });
        pairs.extend(others.into_iter().take(k).map(|(j, _)| (i, j)));
    }
    pairs
}

fn solve_edge(
    grid: &ResistanceGrid,
    from: &HabitatCore,
    to: &HabitatCore,
    from_pt: Point<f64>,
    to_pt: Point<f64>,
) -> ConnectivityResult<CorridorEdge> {
    let source = grid.transform().world_to_cell(from_pt);
    let destination = grid.transform().world_to_cell(to_pt);

    let path = solver::solve(grid, source, destination).map_err(|source| {
        ConnectivityError::NoPath {
            from_core: from.core_id,
            to_core: to.core_id,
            source,
        }
    })?;

    let coords: Vec<_> = path
        .cells
        .iter()
        .map(|&(row, col)| grid.transform().cell_center(row, col))
        .collect();

    Ok(CorridorEdge {
        from_core: from.core_id,
        to_core: to.core_id,
        path: LineString(coords),
        cost: path.cost,
    })
}
