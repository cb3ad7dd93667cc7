//! Coordinate reference system tagging.
//!
//! The pipeline assumes one metric, planar projected CRS throughout.
//! There is no reprojection anywhere: a mismatch between two layers is a
//! configuration error and aborts the stage that detects it.

use serde::{Deserialize, Serialize};

/// Opaque CRS identifier, compared for exact equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crs(String);

impl Crs {
    /// CRS from an EPSG code, e.g. `Crs::epsg(2154)` for Lambert-93.
    pub fn epsg(code: u32) -> Self {
        Crs(format!("EPSG:{code}"))
    }

    pub fn new(ident: impl Into<String>) -> Self {
        Crs(ident.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fails with [`CrsMismatch`] unless `other` is the exact same CRS.
    ///
    /// `stage` names the pipeline stage performing the check so the error
    /// points at where the inconsistent layer entered.
    pub fn ensure_matches(&self, other: &Crs, stage: &str) -> Result<(), CrsMismatch> {
        if self == other {
            Ok(())
        } else {
            Err(CrsMismatch {
                expected: self.clone(),
                found: other.clone(),
                stage: stage.to_string(),
            })
        }
    }
}

impl std::fmt::Display for Crs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two layers entering one stage carry different coordinate systems.
///
/// Always fatal: the pipeline never reprojects implicitly.
#[derive(Debug, Clone, thiserror::Error)]
#[error("CRS mismatch in {stage}: expected {expected}, got {found}; reproject inputs to one CRS before running")]
pub struct CrsMismatch {
    pub expected: Crs,
    pub found: Crs,
    pub stage: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsg_formatting() {
        assert_eq!(Crs::epsg(2154).as_str(), "EPSG:2154");
    }

    #[test]
    fn matching_crs_passes() {
        assert!(Crs::epsg(2154).ensure_matches(&Crs::epsg(2154), "test").is_ok());
    }

    #[test]
    fn mismatch_names_stage_and_systems() {
        let err = Crs::epsg(2154)
            .ensure_matches(&Crs::epsg(4326), "rasterizer")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("rasterizer"));
        assert!(msg.contains("EPSG:2154"));
        assert!(msg.contains("EPSG:4326"));
    }
}
