//! Engine error types.
//!
//! Stage-local recoverable issues (a single degenerate feature) are
//! filtered out with a count reported via `tracing`; everything surfacing
//! here is fatal to the run and names the parameter to retune.

use greenway_geometry::GeometryError;
use greenway_structures::CrsMismatch;
use thiserror::Error;

use crate::solver::PathError;

/// Result type for connectivity-engine operations.
pub type ConnectivityResult<T> = Result<T, ConnectivityError>;

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum ConnectivityError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    CrsMismatch(#[from] CrsMismatch),

    #[error("rasterization extent is empty or degenerate; supply features or an explicit extent")]
    EmptyExtent,

    #[error("only {found} significant core(s), need at least 2; lower `significance_threshold_m2` (currently {threshold_m2} m²)")]
    InsufficientCores { found: usize, threshold_m2: f64 },

    #[error("no least-cost path from core {from_core} to core {to_core}: {source}")]
    NoPath {
        from_core: u32,
        to_core: u32,
        #[source]
        source: PathError,
    },

    #[error("corridor network has no edges; lower `significance_threshold_m2` or raise `neighbor_count`")]
    EmptyNetwork,

    #[error("all {count} corridor costs are identical ({cost}); variable widths cannot be derived - adjust `cell_size_m` or the core selection")]
    DegenerateCost { count: usize, cost: f64 },

    #[error("no corridor zone is at or below the width threshold for percentile {percentile}; raise `bottleneck_percentile`")]
    NoBottlenecks { percentile: f64 },
}
