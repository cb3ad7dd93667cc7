//! Land-cover features as supplied by the vector-data provider.
//!
//! Features carry the three OSM categorical keys the provider queries
//! (`landuse`, `natural`, `leisure`). Which combinations count as habitat
//! candidates or as semi-natural green space is decided by [`ClassMatcher`]
//! values passed in from configuration, not hardcoded here.

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};

use crate::Crs;

/// One tagged polygon from the land-cover provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandCoverFeature {
    pub geometry: MultiPolygon<f64>,
    pub landuse: Option<String>,
    pub natural: Option<String>,
    pub leisure: Option<String>,
}

impl LandCoverFeature {
    pub fn new(geometry: MultiPolygon<f64>) -> Self {
        Self {
            geometry,
            landuse: None,
            natural: None,
            leisure: None,
        }
    }

    pub fn with_landuse(mut self, value: impl Into<String>) -> Self {
        self.landuse = Some(value.into());
        self
    }

    pub fn with_natural(mut self, value: impl Into<String>) -> Self {
        self.natural = Some(value.into());
        self
    }

    pub fn with_leisure(mut self, value: impl Into<String>) -> Self {
        self.leisure = Some(value.into());
        self
    }
}

/// A collection of land-cover features sharing one CRS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandCoverLayer {
    pub features: Vec<LandCoverFeature>,
    pub crs: Crs,
}

impl LandCoverLayer {
    pub fn new(features: Vec<LandCoverFeature>, crs: Crs) -> Self {
        Self { features, crs }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Matches features by their categorical tag values.
///
/// A feature matches when any of its present tags appears in the
/// corresponding value list. Empty lists match nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassMatcher {
    pub landuse: Vec<String>,
    pub natural: Vec<String>,
    pub leisure: Vec<String>,
}

impl ClassMatcher {
    pub fn matches(&self, feature: &LandCoverFeature) -> bool {
        let tag_in = |tag: &Option<String>, values: &[String]| {
            tag.as_deref()
                .is_some_and(|t| values.iter().any(|v| v == t))
        };
        tag_in(&feature.landuse, &self.landuse)
            || tag_in(&feature.natural, &self.natural)
            || tag_in(&feature.leisure, &self.leisure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn square() -> MultiPolygon<f64> {
        MultiPolygon(vec![polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 1.0),
        ]])
    }

    #[test]
    fn matcher_checks_each_tag_key() {
        let matcher = ClassMatcher {
            landuse: vec!["forest".into()],
            natural: vec!["wood".into(), "wetland".into()],
            leisure: vec![],
        };

        assert!(matcher.matches(&LandCoverFeature::new(square()).with_landuse("forest")));
        assert!(matcher.matches(&LandCoverFeature::new(square()).with_natural("wetland")));
        assert!(!matcher.matches(&LandCoverFeature::new(square()).with_leisure("park")));
        assert!(!matcher.matches(&LandCoverFeature::new(square())));
    }

    #[test]
    fn empty_matcher_matches_nothing() {
        let matcher = ClassMatcher::default();
        assert!(!matcher.matches(&LandCoverFeature::new(square()).with_landuse("forest")));
    }
}
