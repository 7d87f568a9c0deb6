//! Loaders for the JSON model assets.
//!
//! Each loader decodes straight into the typed records of `models`, so a
//! malformed file fails here (with the file name in the message) instead of
//! at lookup time. File handles are scoped to the loader call.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::SubductionZone;
use crate::error::{AppError, ErrorKind};
use crate::math::{Polygon, Surface};
use crate::models::{CrustTable, NeotectonicDomain, SlabTable, SubductionZoneModel};

/// Read and decode one JSON asset.
pub fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to open {what} '{}': {e}", path.display()),
        )
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        AppError::new(
            ErrorKind::Asset,
            format!("Invalid {what} '{}': {e}", path.display()),
        )
    })
}

#[derive(Debug, Deserialize)]
struct DomainOutline {
    lon: Vec<f64>,
    lat: Vec<f64>,
}

/// Load neotectonic domain polygons in file order.
pub fn load_domains(path: &Path) -> Result<Vec<NeotectonicDomain>, AppError> {
    let raw: serde_json::Map<String, serde_json::Value> = read_json(path, "neotectonic domains")?;

    let mut domains = Vec::with_capacity(raw.len());
    for (name, value) in raw {
        let invalid = |msg: String| {
            AppError::new(
                ErrorKind::Asset,
                format!("Invalid neotectonic domain '{name}' in '{}': {msg}", path.display()),
            )
        };
        let outline: DomainOutline =
            serde_json::from_value(value).map_err(|e| invalid(e.to_string()))?;
        let polygon = Polygon::from_lon_lat(&outline.lon, &outline.lat).map_err(invalid)?;
        domains.push(NeotectonicDomain { name, polygon });
    }

    tracing::debug!(file = %path.display(), n = domains.len(), "loaded neotectonic domains");
    Ok(domains)
}

pub fn load_crust_table(path: &Path) -> Result<CrustTable, AppError> {
    read_json(path, "crustal mechanism table")
}

pub fn load_slab_table(path: &Path) -> Result<SlabTable, AppError> {
    read_json(path, "slab mechanism table")
}

/// On-disk zone model layout: `[strike, dip, boundary]`.
#[derive(Debug, Deserialize)]
struct ZoneModelFile(Surface, Surface, Polygon);

pub fn load_zone_model(path: &Path, zone: SubductionZone) -> Result<SubductionZoneModel, AppError> {
    let ZoneModelFile(strike, dip, boundary) = read_json(path, "subduction zone model")?;
    tracing::debug!(zone = %zone, file = %path.display(), "loaded subduction zone model");
    Ok(SubductionZoneModel {
        zone,
        strike,
        dip,
        boundary,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::GeoPoint;

    fn write_tmp(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn domains_keep_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_tmp(
            &dir,
            "d.json",
            r#"{"Z": {"lon":[0,1,1],"lat":[0,0,1]}, "A": {"lon":[0,1,1],"lat":[0,0,1]}}"#,
        );
        let domains = load_domains(&path).unwrap();
        let names: Vec<&str> = domains.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Z", "A"]);
    }

    #[test]
    fn bad_domain_names_offender() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_tmp(&dir, "d.json", r#"{"D9": {"lon":[0,1],"lat":[0,0]}}"#);
        let err = load_domains(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Asset);
        assert!(err.to_string().contains("D9"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_slab_table(Path::new("/nonexistent/slab.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn zone_model_reads_indexed_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_tmp(
            &dir,
            "hik.json",
            r#"[
                {"kind":"polynomial","coefficients":[[250.0]]},
                {"kind":"polynomial","coefficients":[[12.0]]},
                [[175.0,-42.0],[179.0,-42.0],[179.0,-37.0],[175.0,-37.0]]
            ]"#,
        );
        let model = load_zone_model(&path, SubductionZone::Hik).unwrap();
        let p = GeoPoint::new(177.0, -40.0);
        assert!(model.boundary.contains(p));
        assert!((model.strike.evaluate(p) - 250.0).abs() < 1e-12);
        assert!((model.dip.evaluate(p) - 12.0).abs() < 1e-12);
    }
}
