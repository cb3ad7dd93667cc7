//! Core data structures for the greenway connectivity pipeline.
//!
//! Every structure in this crate is produced once per pipeline run and is
//! immutable downstream; no entity is mutated in place after being handed
//! to the next stage.

mod corridors;
mod crs;
mod grid;
mod habitat;
mod landcover;

pub use corridors::{Bottlenecks, CorridorEdge, CorridorZone, CorridorZones, PathResult};
pub use crs::{Crs, CrsMismatch};
pub use grid::{GridTransform, ResistanceGrid};
pub use habitat::{CoreSet, HabitatCore};
pub use landcover::{ClassMatcher, LandCoverFeature, LandCoverLayer};

/// Square meters per hectare; the reference parameters are quoted in
/// hectares while all geometry is computed in a metric CRS.
pub const M2_PER_HA: f64 = 10_000.0;
