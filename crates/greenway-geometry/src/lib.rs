//! Planar polygon and polyline primitives.
//!
//! Everything here operates on a single projected, metric CRS; CRS
//! bookkeeping is the caller's responsibility. All functions are pure:
//! inputs are borrowed, outputs are fresh geometries.

mod error;
mod offset;
mod ops;

pub use error::{GeometryError, GeometryResult};
pub use offset::{buffer, buffer_line};
pub use ops::{area_ha, area_m2, clean, connected_components, dissolve};
