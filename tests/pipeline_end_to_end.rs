//! Full-pipeline integration tests over a synthetic city strip.
//!
//! The scene: three forest blocks in a row with unequal gaps, a park
//! strip bridging the first gap. Everything is hand-computable on the
//! 50 m grid, so the assertions below pin exact stage outputs.

use geo::{polygon, MultiPolygon, Point};
use greenway::prelude::*;

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> MultiPolygon<f64> {
    MultiPolygon(vec![polygon![
        (x: x0, y: y0),
        (x: x1, y: y0),
        (x: x1, y: y1),
        (x: x0, y: y1),
    ]])
}

/// Three 600x600 m forests at x = 0, 1600 and 3800 (gaps of 1000 m and
/// 1600 m), plus a park strip filling the first gap at mid height.
fn city_strip() -> LandCoverLayer {
    LandCoverLayer::new(
        vec![
            LandCoverFeature::new(rect(0.0, 0.0, 600.0, 600.0)).with_landuse("forest"),
            LandCoverFeature::new(rect(1600.0, 0.0, 2200.0, 600.0)).with_landuse("forest"),
            LandCoverFeature::new(rect(3800.0, 0.0, 4400.0, 600.0)).with_landuse("forest"),
            LandCoverFeature::new(rect(600.0, 200.0, 1600.0, 400.0)).with_leisure("park"),
        ],
        Crs::epsg(2154),
    )
}

fn strip_config() -> GreenwayConfig {
    let mut config = GreenwayConfig::default();
    config.network.neighbor_count = 1;
    config
}

#[test]
fn pipeline_produces_all_stage_outputs() {
    let output = run_pipeline(&city_strip(), &strip_config()).unwrap();

    // One core per forest block, ids dense from 1.
    assert_eq!(output.cores.len(), 3);
    let ids: Vec<u32> = output.cores.cores.iter().map(|c| c.core_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    for core in &output.cores.cores {
        // 36 ha minus a little corner rounding from the shrink/regrow.
        assert!(core.area_m2 > 355_000.0 && core.area_m2 <= 360_000.0);
    }

    // Extent derives from the land cover: 4400x600 m at 50 m cells.
    assert_eq!(output.grid.shape(), (12, 88));

    // Priority order on the surface: core 1, park 5, fill 20.
    let cost_at = |x: f64, y: f64| {
        let (row, col) = output.grid.cell_at(Point::new(x, y)).unwrap();
        output.grid.cost(row, col)
    };
    assert_eq!(cost_at(325.0, 275.0), 1.0);
    assert_eq!(cost_at(1125.0, 275.0), 5.0);
    assert_eq!(cost_at(3025.0, 275.0), 20.0);
}

#[test]
fn network_prefers_the_park_bridged_gap() {
    let output = run_pipeline(&city_strip(), &strip_config()).unwrap();

    // k = 1: cores 1 and 2 pick each other, core 3 picks core 2.
    let relations: Vec<(u32, u32)> = output
        .edges
        .iter()
        .map(|e| (e.from_core, e.to_core))
        .collect();
    assert_eq!(relations, vec![(1, 2), (2, 1), (3, 2)]);

    // Row-aligned centroids make the straight paths optimal and their
    // costs exactly computable from the column costs.
    assert_eq!(output.edges[0].cost, 112.0);
    assert_eq!(output.edges[1].cost, 112.0);
    assert_eq!(output.edges[2].cost, 652.0);
}

#[test]
fn zones_and_bottlenecks_track_edge_cost() {
    let output = run_pipeline(&city_strip(), &strip_config()).unwrap();

    // Cheapest edges take the full width, the costliest the minimum.
    let widths: Vec<f64> = output.zones.zones.iter().map(|z| z.width_m).collect();
    assert_eq!(widths, vec![350.0, 350.0, 80.0]);

    // 20th percentile of [80, 350, 350] interpolates to 188 m, which
    // flags exactly the long-gap corridor.
    assert!((output.bottlenecks.threshold_m - 188.0).abs() < 1e-9);
    assert_eq!(output.bottlenecks.segments.len(), 1);
    assert_eq!(output.bottlenecks.segments[0].from_core, 3);
    assert_eq!(output.bottlenecks.segments[0].to_core, 2);
}

#[test]
fn repeated_runs_are_identical() {
    let landcover = city_strip();
    let config = strip_config();
    let a = run_pipeline(&landcover, &config).unwrap();
    let b = run_pipeline(&landcover, &config).unwrap();

    assert_eq!(a.edges.len(), b.edges.len());
    for (ea, eb) in a.edges.iter().zip(&b.edges) {
        assert_eq!(ea.cost, eb.cost);
        assert_eq!(ea.path, eb.path);
    }
}

#[test]
fn corridor_output_serializes_for_export() {
    let output = run_pipeline(&city_strip(), &strip_config()).unwrap();

    let json = serde_json::to_string(&output.zones.zones).unwrap();
    let back: Vec<greenway::structures::CorridorZone> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), output.zones.zones.len());
    assert_eq!(back[2].width_m, 80.0);
}

#[test]
fn too_few_significant_cores_is_reported() {
    let mut config = strip_config();
    config.network.significance_threshold_m2 = 1e9;

    let err = run_pipeline(&city_strip(), &config).unwrap_err();
    match err {
        PipelineError::Connectivity(ConnectivityError::InsufficientCores { found, .. }) => {
            assert_eq!(found, 0)
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_configuration_is_rejected_before_any_work() {
    let mut config = strip_config();
    config.raster.cell_size_m = 0.0;

    let err = run_pipeline(&city_strip(), &config).unwrap_err();
    assert!(matches!(err, PipelineError::Config(_)));
}
