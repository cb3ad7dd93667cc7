//! Polygon set operations: cleaning, dissolving, component decomposition.
//!
//! Boolean operations go through `geo`'s i_overlay backend, which resolves
//! self-intersections as part of every operation. That makes self-union the
//! exact equivalent of the classic buffer-by-zero repair trick.

use geo::{Area, BooleanOps, MultiPolygon, Polygon};

use crate::{GeometryError, GeometryResult};

/// Square meters per hectare.
const M2_PER_HA: f64 = 10_000.0;

/// Planar area in square meters (CRS native units).
pub fn area_m2(geometry: &MultiPolygon<f64>) -> f64 {
    geometry.unsigned_area()
}

/// Planar area in hectares.
pub fn area_ha(geometry: &MultiPolygon<f64>) -> f64 {
    area_m2(geometry) / M2_PER_HA
}

/// Repairs self-intersections and drops collapsed parts.
///
/// Idempotent: cleaning an already-clean geometry returns it unchanged
/// apart from floating-point noise. An input that is empty, or that
/// collapses to nothing, is a [`GeometryError`]; the caller decides whether
/// to drop the feature or abort.
pub fn clean(geometry: &MultiPolygon<f64>) -> GeometryResult<MultiPolygon<f64>> {
    let candidates: Vec<Polygon<f64>> = geometry
        .0
        .iter()
        .filter(|p| p.exterior().0.len() >= 4)
        .cloned()
        .collect();
    if candidates.is_empty() {
        return Err(GeometryError::empty("clean: no valid rings"));
    }

    let candidates = MultiPolygon(candidates);
    let repaired = retain_nonzero(candidates.union(&candidates));
    if repaired.0.is_empty() {
        return Err(GeometryError::empty("clean: geometry collapsed"));
    }
    Ok(repaired)
}

/// Order-independent geometric union of a set of (multi)polygons.
///
/// An empty input dissolves to an empty multipolygon.
pub fn dissolve(parts: &[MultiPolygon<f64>]) -> MultiPolygon<f64> {
    let mut nonempty = parts.iter().filter(|mp| !mp.0.is_empty());
    let Some(first) = nonempty.next() else {
        return MultiPolygon(vec![]);
    };
    nonempty.fold(first.clone(), |acc, mp| acc.union(mp))
}

/// Splits a multi-part geometry into its maximal connected parts.
///
/// Overlapping or touching parts are merged first, so the output polygons
/// are pairwise disjoint and their union equals the input up to
/// floating-point tolerance. No output part is empty.
pub fn connected_components(geometry: &MultiPolygon<f64>) -> Vec<Polygon<f64>> {
    if geometry.0.is_empty() {
        return Vec::new();
    }
    retain_nonzero(geometry.union(geometry)).0
}

fn retain_nonzero(mp: MultiPolygon<f64>) -> MultiPolygon<f64> {
    MultiPolygon(
        mp.0.into_iter()
            .filter(|p| p.unsigned_area() > 0.0)
            .collect(),
    )
}
