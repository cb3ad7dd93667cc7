//! # Greenway - urban habitat connectivity
//!
//! Greenway identifies ecologically valuable habitat cores inside an urban
//! boundary, builds a resistance surface describing how hard wildlife
//! movement is across the landscape, computes least-cost corridors between
//! cores, derives variable-width corridor zones and flags narrow
//! bottleneck segments.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use greenway::prelude::*;
//!
//! # fn landcover_from_provider() -> LandCoverLayer {
//! #     LandCoverLayer::new(vec![], Crs::epsg(2154))
//! # }
//! // Tagged polygons from the vector-data provider, in one metric CRS.
//! let landcover = landcover_from_provider();
//!
//! let config = GreenwayConfig::default();
//! let output = run_pipeline(&landcover, &config)?;
//!
//! println!("{} cores, {} corridors", output.cores.len(), output.edges.len());
//! println!("bottleneck threshold: {:.1} m", output.bottlenecks.threshold_m);
//! # Ok::<(), greenway::PipelineError>(())
//! ```
//!
//! ## Architecture
//!
//! The member crates map directly onto the pipeline stages:
//!
//! - [`structures`] - immutable data structures handed between stages
//! - [`geometry`] - polygon/polyline primitives (buffer, dissolve,
//!   connected components)
//! - [`config`] - TOML configuration with validation and env overrides
//! - [`connectivity`] - the engine: cores, resistance, paths, corridors
//!
//! File I/O of geospatial formats, CLI handling and visualization are
//! external collaborators and stay outside this workspace.
//!
//! ## Feature flags
//!
//! - **`parallel`** (default): solve least-cost paths across a rayon
//!   worker pool; the resistance grid is shared read-only.

pub use greenway_config as config;
pub use greenway_connectivity as connectivity;
pub use greenway_geometry as geometry;
pub use greenway_structures as structures;

mod pipeline;

pub use pipeline::{run_pipeline, PipelineError, PipelineOutput};

/// The commonly used types and entry points in one import.
pub mod prelude {
    pub use crate::pipeline::{run_pipeline, PipelineError, PipelineOutput};
    pub use greenway_config::GreenwayConfig;
    pub use greenway_connectivity::ConnectivityError;
    pub use greenway_structures::{
        Bottlenecks, ClassMatcher, CoreSet, CorridorEdge, CorridorZones, Crs, HabitatCore,
        LandCoverFeature, LandCoverLayer, ResistanceGrid,
    };
}
