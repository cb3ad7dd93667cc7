//! Habitat cores produced by the core extractor.

use geo::Polygon;
use serde::{Deserialize, Serialize};

use crate::{Crs, M2_PER_HA};

/// A contiguous habitat patch that survived the shrink/split/regrow
/// decomposition and the final area filter.
///
/// `core_id` is dense and 1-based, assigned in the (stable) order the
/// surviving polygons appear after filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitatCore {
    pub core_id: u32,
    pub geometry: Polygon<f64>,
    pub area_m2: f64,
}

impl HabitatCore {
    pub fn area_ha(&self) -> f64 {
        self.area_m2 / M2_PER_HA
    }
}

/// The disjoint set of habitat cores for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreSet {
    pub cores: Vec<HabitatCore>,
    pub crs: Crs,
}

impl CoreSet {
    pub fn new(cores: Vec<HabitatCore>, crs: Crs) -> Self {
        Self { cores, crs }
    }

    pub fn len(&self) -> usize {
        self.cores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }

    pub fn get(&self, core_id: u32) -> Option<&HabitatCore> {
        self.cores.iter().find(|c| c.core_id == core_id)
    }
}
