//! Signed polygon offsets and polyline buffering.
//!
//! Offsets are built from morphology identities rather than ring
//! displacement, which sidesteps the usual self-intersection headaches:
//!
//! - dilation(P, d)  = P ∪ (∂P ⊕ disk(d))
//! - erosion(P, d)   = P ∖ (∂P ⊕ disk(d))
//!
//! The boundary band ∂P ⊕ disk(d) is the union of one capsule per boundary
//! segment, and a capsule is the convex hull of the two endpoint circles.
//! Circles are approximated with `quad_segs` vertices per quarter circle;
//! keep `quad_segs` fixed across a run so area comparisons stay stable.

use geo::{BooleanOps, ConvexHull, Coord, LineString, MultiPoint, MultiPolygon, Point, Polygon};

use crate::ops::{clean, dissolve};
use crate::{GeometryError, GeometryResult};

/// Grows (`distance > 0`) or shrinks (`distance < 0`) a polygon.
///
/// The input is cleaned first. Shrinking may legitimately empty the
/// geometry (that is the thin-connection severing mechanism); an empty
/// result is returned as an empty multipolygon, not an error.
pub fn buffer(
    geometry: &MultiPolygon<f64>,
    distance: f64,
    quad_segs: usize,
) -> GeometryResult<MultiPolygon<f64>> {
    let cleaned = clean(geometry)?;
    if distance == 0.0 {
        return Ok(cleaned);
    }

    let radius = distance.abs();
    let mut capsules = Vec::new();
    for poly in &cleaned.0 {
        collect_ring_capsules(poly.exterior(), radius, quad_segs, &mut capsules);
        for ring in poly.interiors() {
            collect_ring_capsules(ring, radius, quad_segs, &mut capsules);
        }
    }
    let band = dissolve(&capsules);

    let result = if distance > 0.0 {
        cleaned.union(&band)
    } else {
        cleaned.difference(&band)
    };
    Ok(result)
}

/// Buffers a polyline into a corridor belt of half-width `distance`.
pub fn buffer_line(
    line: &LineString<f64>,
    distance: f64,
    quad_segs: usize,
) -> GeometryResult<MultiPolygon<f64>> {
    if distance <= 0.0 {
        return Err(GeometryError::NonPositiveWidth { distance });
    }
    if line.0.is_empty() {
        return Err(GeometryError::empty("buffer_line: empty polyline"));
    }
    if line.0.len() == 1 {
        let circle = hull_of(circle_coords(line.0[0], distance, quad_segs));
        return Ok(MultiPolygon(vec![circle]));
    }

    let capsules: Vec<MultiPolygon<f64>> = line
        .lines()
        .map(|seg| MultiPolygon(vec![capsule(seg.start, seg.end, distance, quad_segs)]))
        .collect();
    Ok(dissolve(&capsules))
}

fn collect_ring_capsules(
    ring: &LineString<f64>,
    radius: f64,
    quad_segs: usize,
    out: &mut Vec<MultiPolygon<f64>>,
) {
    for seg in ring.lines() {
        out.push(MultiPolygon(vec![capsule(
            seg.start, seg.end, radius, quad_segs,
        )]));
    }
}

/// Stadium shape around a segment: convex hull of the endpoint circles.
fn capsule(a: Coord<f64>, b: Coord<f64>, radius: f64, quad_segs: usize) -> Polygon<f64> {
    let mut points = circle_coords(a, radius, quad_segs);
    points.extend(circle_coords(b, radius, quad_segs));
    hull_of(points)
}

fn circle_coords(center: Coord<f64>, radius: f64, quad_segs: usize) -> Vec<Coord<f64>> {
    let n = quad_segs.max(1) * 4;
    (0..n)
        .map(|k| {
            let theta = std::f64::consts::TAU * k as f64 / n as f64;
            Coord {
                x: center.x + radius * theta.cos(),
                y: center.y + radius * theta.sin(),
            }
        })
        .collect()
}

fn hull_of(coords: Vec<Coord<f64>>) -> Polygon<f64> {
    MultiPoint::from(coords.into_iter().map(Point::from).collect::<Vec<_>>()).convex_hull()
}
