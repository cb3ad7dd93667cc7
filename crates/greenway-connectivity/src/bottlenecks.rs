//! Bottleneck detection over the variable-width corridor zones.
//!
//! Operates on the non-dissolved zones (each still carries its own
//! width). The width distribution's p-th percentile - linear
//! interpolation between order statistics - is the narrowness threshold.

use greenway_geometry::{clean, dissolve};
use greenway_structures::{Bottlenecks, CorridorZone, CorridorZones};
use tracing::info;

use crate::error::{ConnectivityError, ConnectivityResult};

/// Bottleneck-detection parameters.
#[derive(Debug, Clone)]
pub struct BottleneckParams {
    /// Zones at or below this width percentile are bottlenecks.
    pub percentile: f64,
}

/// Flags corridor zones whose width falls at or below the percentile
/// threshold, cleans their geometry and dissolves the selection.
pub fn detect_bottlenecks(
    zones: &CorridorZones,
    params: &BottleneckParams,
) -> ConnectivityResult<Bottlenecks> {
    if zones.zones.is_empty() {
        return Err(ConnectivityError::EmptyNetwork);
    }

    let widths: Vec<f64> = zones.zones.iter().map(|z| z.width_m).collect();
    let threshold = percentile(&widths, params.percentile);

    let mut segments: Vec<CorridorZone> = Vec::new();
    for zone in zones.zones.iter().filter(|z| z.width_m <= threshold) {
        let mut cleaned = zone.clone();
        cleaned.geometry = clean(&zone.geometry)?;
        segments.push(cleaned);
    }
    if segments.is_empty() {
        return Err(ConnectivityError::NoBottlenecks {
            percentile: params.percentile,
        });
    }

    let dissolved = dissolve(
        &segments
            .iter()
            .map(|z| z.geometry.clone())
            .collect::<Vec<_>>(),
    );

    info!(
        bottlenecks = segments.len(),
        threshold_m = threshold,
        "detected corridor bottlenecks"
    );
    Ok(Bottlenecks {
        segments,
        dissolved,
        threshold_m: threshold,
    })
}

/// Linear-interpolated percentile over an unsorted sample (the numpy
/// default semantics).
fn percentile(values: &[f64], p: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
