//! Habitat-core extraction.
//!
//! Candidate polygons are decomposed with the shrink → split → regrow
//! cycle: a negative buffer severs connector strips narrower than twice
//! the break distance, connected components isolate the resulting parts,
//! and a positive buffer restores the approximate original extent while
//! the severed gaps stay open. Order of the steps matters and is fixed.

use geo::{Area, MultiPolygon, Polygon};
use greenway_geometry::{area_m2, buffer, clean, connected_components};
use greenway_structures::{ClassMatcher, CoreSet, HabitatCore, LandCoverLayer};
use tracing::{debug, info, warn};

use crate::error::ConnectivityResult;

/// Core-extraction parameters.
#[derive(Debug, Clone)]
pub struct CoreParams {
    /// Fragments below this area are dropped before decomposition (m²).
    pub min_patch_area_m2: f64,
    /// Shrink/regrow distance; severs links narrower than twice this (m).
    pub break_distance_m: f64,
    /// Final cores must be at least this large (m²).
    pub min_core_area_m2: f64,
    /// Tags that qualify a land-cover feature as a habitat candidate.
    pub candidates: ClassMatcher,
    /// Segments per quarter circle for the shrink/regrow buffers.
    pub quad_segs: usize,
}

/// Extracts disjoint habitat cores from a tagged land-cover layer.
///
/// Zero surviving cores is a valid (if useless) outcome, not an error;
/// whether enough cores remain for corridor work is the network stage's
/// concern. Dropped features are counted and logged, never fatal.
pub fn extract_cores(landcover: &LandCoverLayer, params: &CoreParams) -> ConnectivityResult<CoreSet> {
    let candidates: Vec<&MultiPolygon<f64>> = landcover
        .features
        .iter()
        .filter(|f| params.candidates.matches(f))
        .map(|f| &f.geometry)
        .collect();
    debug!(
        candidates = candidates.len(),
        features = landcover.len(),
        "selected habitat candidates"
    );

    // 1) Clean and drop noise fragments.
    let mut dropped_invalid = 0usize;
    let mut dropped_small = 0usize;
    let mut patches: Vec<MultiPolygon<f64>> = Vec::with_capacity(candidates.len());
    for geometry in candidates {
        match clean(geometry) {
            Ok(cleaned) => {
                if area_m2(&cleaned) >= params.min_patch_area_m2 {
                    patches.push(cleaned);
                } else {
                    dropped_small += 1;
                }
            }
            Err(_) => dropped_invalid += 1,
        }
    }
    if dropped_invalid > 0 || dropped_small > 0 {
        debug!(
            dropped_invalid,
            dropped_small, "dropped candidates during cleaning and patch filtering"
        );
    }

    // 2) Shrink; geometries that vanish are exactly the ones narrower than
    //    2 x break_distance everywhere.
    let mut vanished = 0usize;
    let mut shrunk_parts: Vec<Polygon<f64>> = Vec::new();
    for patch in &patches {
        let shrunk = buffer(patch, -params.break_distance_m, params.quad_segs)?;
        if shrunk.0.is_empty() {
            vanished += 1;
        } else {
            shrunk_parts.extend(shrunk.0);
        }
    }
    if vanished > 0 {
        debug!(vanished, "patches vanished during shrinking");
    }

    // 3) Split the shrunk set into maximal connected parts.
    let components = connected_components(&MultiPolygon(shrunk_parts));

    // 4) Regrow each part and 5) keep the ones large enough to be cores.
    let mut cores = Vec::new();
    for component in components {
        let regrown = buffer(&MultiPolygon(vec![component]), params.break_distance_m, params.quad_segs)?;
        let area = area_m2(&regrown);
        if area < params.min_core_area_m2 {
            continue;
        }
        let geometry = into_single_polygon(regrown);
        let core_id = cores.len() as u32 + 1;
        cores.push(HabitatCore {
            core_id,
            geometry,
            area_m2: area,
        });
    }

    info!(
        cores = cores.len(),
        input_patches = patches.len(),
        "extracted habitat cores"
    );
    Ok(CoreSet::new(cores, landcover.crs.clone()))
}

/// Regrowing a connected component yields a connected result, so a single
/// polygon is expected; anything else is floating-point fallout and the
/// largest part wins.
fn into_single_polygon(mp: MultiPolygon<f64>) -> Polygon<f64> {
    if mp.0.len() > 1 {
        warn!(parts = mp.0.len(), "regrown core split into multiple parts");
    }
    mp.0.into_iter()
        .max_by(|a, b| {
            a.unsigned_area()
                .partial_cmp(&b.unsigned_area())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or_else(|| Polygon::new(geo::LineString(vec![]), vec![]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;
    use greenway_structures::{Crs, LandCoverFeature};

    fn params() -> CoreParams {
        CoreParams {
            min_patch_area_m2: 1_000.0,
            break_distance_m: 30.0,
            min_core_area_m2: 50_000.0,
            candidates: ClassMatcher {
                landuse: vec!["forest".to_string()],
                natural: vec!["wood".to_string()],
                leisure: vec![],
            },
            quad_segs: 8,
        }
    }

    fn forest(geometry: Polygon<f64>) -> LandCoverFeature {
        LandCoverFeature::new(MultiPolygon(vec![geometry])).with_landuse("forest")
    }

    /// Two 300x300 m blobs joined by a 20 m wide strip. The strip is
    /// narrower than 2 x 30 m, so shrinking severs it.
    fn dumbbell() -> Polygon<f64> {
        polygon![
            (x: 0.0, y: 0.0),
            (x: 300.0, y: 0.0),
            (x: 300.0, y: 140.0),
            (x: 500.0, y: 140.0),
            (x: 500.0, y: 0.0),
            (x: 800.0, y: 0.0),
            (x: 800.0, y: 300.0),
            (x: 500.0, y: 300.0),
            (x: 500.0, y: 160.0),
            (x: 300.0, y: 160.0),
            (x: 300.0, y: 300.0),
            (x: 0.0, y: 300.0),
        ]
    }

    #[test]
    fn thin_link_is_severed_into_two_cores() {
        let layer = LandCoverLayer::new(vec![forest(dumbbell())], Crs::epsg(2154));
        let cores = extract_cores(&layer, &params()).unwrap();
        assert_eq!(cores.len(), 2);
        assert_eq!(cores.cores[0].core_id, 1);
        assert_eq!(cores.cores[1].core_id, 2);

        for core in &cores.cores {
            // Each blob is 300x300 = 90_000 m²; regrow rounds the corners
            // off and the strip stays gone.
            assert!(
                core.area_m2 > 84_000.0 && core.area_m2 < 91_000.0,
                "core {} area = {}",
                core.core_id,
                core.area_m2
            );
        }
    }

    #[test]
    fn small_candidate_produces_no_core() {
        // 100x100 m = 10_000 m², below min_core_area_m2 after regrow.
        let small = polygon![
            (x: 0.0, y: 0.0),
            (x: 100.0, y: 0.0),
            (x: 100.0, y: 100.0),
            (x: 0.0, y: 100.0),
        ];
        let layer = LandCoverLayer::new(vec![forest(small)], Crs::epsg(2154));
        let cores = extract_cores(&layer, &params()).unwrap();
        assert!(cores.is_empty());
    }

    #[test]
    fn entirely_thin_candidate_vanishes_without_error() {
        // A 40 m wide ribbon: shrinking by 30 m empties it.
        let ribbon = polygon![
            (x: 0.0, y: 0.0),
            (x: 2000.0, y: 0.0),
            (x: 2000.0, y: 40.0),
            (x: 0.0, y: 40.0),
        ];
        let layer = LandCoverLayer::new(vec![forest(ribbon)], Crs::epsg(2154));
        let cores = extract_cores(&layer, &params()).unwrap();
        assert!(cores.is_empty());
    }

    #[test]
    fn non_candidate_tags_are_ignored() {
        let big = polygon![
            (x: 0.0, y: 0.0),
            (x: 1000.0, y: 0.0),
            (x: 1000.0, y: 1000.0),
            (x: 0.0, y: 1000.0),
        ];
        let feature =
            LandCoverFeature::new(MultiPolygon(vec![big])).with_landuse("residential");
        let layer = LandCoverLayer::new(vec![feature], Crs::epsg(2154));
        let cores = extract_cores(&layer, &params()).unwrap();
        assert!(cores.is_empty());
    }

    #[test]
    fn core_ids_are_dense_and_one_based() {
        let far_square = |x0: f64| {
            polygon![
                (x: x0, y: 0.0),
                (x: x0 + 400.0, y: 0.0),
                (x: x0 + 400.0, y: 400.0),
                (x: x0, y: 400.0),
            ]
        };
        let layer = LandCoverLayer::new(
            vec![forest(far_square(0.0)), forest(far_square(5_000.0)), forest(far_square(10_000.0))],
            Crs::epsg(2154),
        );
        let cores = extract_cores(&layer, &params()).unwrap();
        let ids: Vec<u32> = cores.cores.iter().map(|c| c.core_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
