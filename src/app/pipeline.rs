//! Point location shared by the `locate` command.
//!
//! Unlike `resolver`, a miss here is an answer rather than a failure: the
//! point may sit in a domain, a zone, both, or neither.

use crate::domain::{GeoPoint, SubductionZone};
use crate::error::{AppError, ErrorKind};
use crate::io::{ModelAssets, load_domains};
use crate::models::classify_domain;
use crate::resolver::locate_subduction;

#[derive(Debug, Clone, PartialEq)]
pub struct Located {
    pub point: GeoPoint,
    pub domain: Option<String>,
    pub zone: Option<SubductionZone>,
}

/// Classify `p` against the domain polygons and subduction boundaries.
///
/// Assets missing from the config are skipped; read or decode failures
/// still propagate.
pub fn locate(p: GeoPoint, assets: &ModelAssets) -> Result<Located, AppError> {
    let domain = match assets.ntdomains.as_deref() {
        Some(path) => {
            let domains = load_domains(path)?;
            classify_domain(&domains, p).map(|d| d.name.clone())
        }
        None => None,
    };

    let zone = if assets.hikurangi.is_some() && assets.puysegur.is_some() {
        match locate_subduction(p, assets) {
            Ok(model) => Some(model.zone),
            Err(e) if e.kind() == ErrorKind::SubductionZoneNotFound => None,
            Err(e) => return Err(e),
        }
    } else {
        None
    };

    Ok(Located { point: p, domain, zone })
}
