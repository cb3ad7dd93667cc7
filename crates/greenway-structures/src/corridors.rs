//! Corridor network products: paths, edges, zones and bottlenecks.

use geo::{LineString, MultiPolygon};
use serde::{Deserialize, Serialize};

/// A least-cost traversal between two grid cells.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Ordered (row, col) cells from source to destination inclusive.
    pub cells: Vec<(usize, usize)>,
    /// Accumulated resistance-weighted cost along the path.
    pub cost: f64,
}

/// One directed corridor between two significant cores.
///
/// Edges are directed pairs representing an undirected connectivity
/// relation; both directions may be requested independently and may yield
/// different paths on the same grid. Neither direction is deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorridorEdge {
    pub from_core: u32,
    pub to_core: u32,
    /// Least-cost path mapped to world coordinates (cell centers).
    pub path: LineString<f64>,
    pub cost: f64,
}

/// A corridor edge buffered to its connectivity-weighted width.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorridorZone {
    pub from_core: u32,
    pub to_core: u32,
    pub cost: f64,
    /// Buffer width in meters; lowest-cost edges get the widest belt.
    pub width_m: f64,
    pub geometry: MultiPolygon<f64>,
}

/// The full corridor-zone layer: individual variable-width zones plus the
/// dissolved union belt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorridorZones {
    pub zones: Vec<CorridorZone>,
    pub dissolved: MultiPolygon<f64>,
}

/// Corridor zones narrower than the chosen width percentile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bottlenecks {
    pub segments: Vec<CorridorZone>,
    pub dissolved: MultiPolygon<f64>,
    /// The width threshold actually applied (meters).
    pub threshold_m: f64,
}
