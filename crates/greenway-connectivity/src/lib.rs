//! The greenway connectivity engine.
//!
//! Stages, in pipeline order:
//!
//! 1. [`cores`] - morphological extraction of habitat cores from tagged
//!    land-cover polygons (clean → filter → shrink → split → regrow →
//!    filter).
//! 2. [`resistance`] - rasterization of a movement-cost surface with an
//!    explicit feature-priority list.
//! 3. [`solver`] - least-cost paths on the 8-connected resistance grid.
//! 4. [`network`] - k-nearest-neighbor corridor network between
//!    significant cores.
//! 5. [`zones`] - variable-width corridor belts derived from path costs.
//! 6. [`bottlenecks`] - narrow-segment detection by width percentile.
//!
//! Each stage consumes the previous stage's immutable output; the
//! resistance grid in particular is shared read-only across all path
//! computations, which is what makes the network stage embarrassingly
//! parallel (enabled via the default `parallel` feature).

pub mod bottlenecks;
pub mod cores;
pub mod error;
pub mod network;
pub mod resistance;
pub mod solver;
pub mod zones;

pub use bottlenecks::{detect_bottlenecks, BottleneckParams};
pub use cores::{extract_cores, CoreParams};
pub use error::{ConnectivityError, ConnectivityResult};
pub use network::{build_network, NetworkParams};
pub use resistance::{rasterize, Extent, RasterParams};
pub use solver::{solve, PathError};
pub use zones::{build_zones, ZoneParams};
