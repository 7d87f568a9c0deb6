//! Regime dispatch: from an event description to focal mechanisms.
//!
//! Raw, partially-filled arguments (`FocmecRequest`) are first turned into a
//! `Query`, which carries exactly what its regime needs. `resolve` then
//! loads only the assets that regime touches:
//!
//! - crust: domain polygons → crustal table → [`select_sdrp`]
//! - slab: zone (given or located) → depth bin → slab table
//! - interface: zone (given or located) → zone predictors → clamped thrust

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{FocalMechanism, GeoPoint, ModelSelector, Regime, SubductionZone};
use crate::error::{AppError, ErrorKind};
use crate::io::{
    DEFAULT_CONFIG_FILE, DEFAULT_MODEL_FOLDER, ModelAssets, load_crust_table, load_domains,
    load_slab_table, load_zone_model,
};
use crate::models::{classify_domain, interface_mechanism, locate_zone, SubductionZoneModel};
use crate::select::{depth_bin, most_probable, select_sdrp};

/// Arguments of a single lookup, as a caller would pass them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocmecRequest {
    /// Longitude (decimal degrees).
    pub lon: Option<f64>,
    /// Latitude (decimal degrees).
    pub lat: Option<f64>,
    /// Depth (km).
    pub dep: Option<f64>,
    /// Moment magnitude.
    pub mw: Option<f64>,
    pub regime: String,
    pub preferred_model: String,
    pub model_folder: PathBuf,
    /// Config file name, relative to `model_folder` unless absolute.
    pub config_file: PathBuf,
    pub subduction_zone: Option<String>,
}

impl Default for FocmecRequest {
    fn default() -> Self {
        Self {
            lon: None,
            lat: None,
            dep: None,
            mw: None,
            regime: Regime::Crust.as_str().to_string(),
            preferred_model: ModelSelector::All.as_str().to_string(),
            model_folder: PathBuf::from(DEFAULT_MODEL_FOLDER),
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            subduction_zone: None,
        }
    }
}

/// How a slab or interface lookup finds its subduction zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoneHint {
    Known(SubductionZone),
    Locate(GeoPoint),
}

/// A validated lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Query {
    Crust {
        location: GeoPoint,
        magnitude: f64,
        selector: ModelSelector,
    },
    Slab {
        depth: f64,
        zone: ZoneHint,
        selector: ModelSelector,
    },
    Interface {
        location: GeoPoint,
        zone: Option<SubductionZone>,
    },
}

impl Query {
    pub fn regime(&self) -> Regime {
        match self {
            Query::Crust { .. } => Regime::Crust,
            Query::Slab { .. } => Regime::Slab,
            Query::Interface { .. } => Regime::Interface,
        }
    }

    pub fn from_request(req: &FocmecRequest) -> Result<Self, AppError> {
        let regime: Regime = req.regime.parse()?;
        let selector: ModelSelector = req.preferred_model.parse()?;
        let location = match (req.lon, req.lat) {
            (Some(lon), Some(lat)) => Some(GeoPoint::new(lon, lat)),
            _ => None,
        };

        match regime {
            Regime::Crust => {
                let location = location
                    .ok_or_else(|| missing("Lon and Lat are required for crustal events."))?;
                let magnitude = req
                    .mw
                    .ok_or_else(|| missing("Mw is required for crustal events."))?;
                Ok(Query::Crust {
                    location,
                    magnitude,
                    selector,
                })
            }
            Regime::Slab => {
                let depth = req
                    .dep
                    .ok_or_else(|| missing("Intraslab events require depth (km)."))?;
                let zone = match (parse_zone(req)?, location) {
                    (Some(z), _) => ZoneHint::Known(z),
                    (None, Some(p)) => ZoneHint::Locate(p),
                    (None, None) => {
                        return Err(missing(
                            "Lon and Lat are required when no subduction zone is given.",
                        ));
                    }
                };
                Ok(Query::Slab { depth, zone, selector })
            }
            Regime::Interface => {
                let location = location
                    .ok_or_else(|| missing("Lon and Lat are required for interface events."))?;
                Ok(Query::Interface {
                    location,
                    zone: parse_zone(req)?,
                })
            }
        }
    }
}

/// Only slab and interface requests read the zone token.
fn parse_zone(req: &FocmecRequest) -> Result<Option<SubductionZone>, AppError> {
    req.subduction_zone
        .as_deref()
        .map(str::parse::<SubductionZone>)
        .transpose()
}

fn missing(message: &str) -> AppError {
    AppError::new(ErrorKind::MissingInput, message)
}

/// Load config and assets from `req` and resolve the mechanisms.
pub fn get_focmec(req: &FocmecRequest) -> Result<Vec<FocalMechanism>, AppError> {
    let query = Query::from_request(req)?;
    let assets = ModelAssets::load(&req.model_folder, &req.config_file)?;
    resolve(&query, &assets)
}

pub fn resolve(query: &Query, assets: &ModelAssets) -> Result<Vec<FocalMechanism>, AppError> {
    tracing::debug!(regime = query.regime().as_str(), "resolving focal mechanisms");
    let out = match *query {
        Query::Crust {
            location,
            magnitude,
            selector,
        } => resolve_crust(location, magnitude, selector, assets)?,
        Query::Slab { depth, zone, selector } => resolve_slab(depth, zone, selector, assets)?,
        Query::Interface { location, zone } => {
            let model = match zone {
                Some(z) => load_zone_model(assets.zone_model_path(z)?, z)?,
                None => locate_subduction(location, assets)?,
            };
            vec![interface_mechanism(&model, location)?]
        }
    };
    tracing::info!(regime = query.regime().as_str(), n = out.len(), "resolved focal mechanisms");
    Ok(out)
}

fn resolve_crust(
    location: GeoPoint,
    magnitude: f64,
    selector: ModelSelector,
    assets: &ModelAssets,
) -> Result<Vec<FocalMechanism>, AppError> {
    let domains = load_domains(assets.ntdomains_path()?)?;
    let domain = classify_domain(&domains, location).ok_or_else(|| {
        AppError::new(
            ErrorKind::DomainNotFound,
            format!(
                "Lon, Lat ({}, {}) is outside the neotectonic domains.",
                location.lon, location.lat
            ),
        )
    })?;
    tracing::debug!(domain = %domain.name, "classified neotectonic domain");

    let table = load_crust_table(assets.crust_path()?)?;
    let domain_table = table.domain(&domain.name).ok_or_else(|| {
        AppError::new(
            ErrorKind::DomainNotFound,
            format!("Crustal table has no entry for domain '{}'.", domain.name),
        )
    })?;
    Ok(select_sdrp(domain_table, magnitude, selector))
}

fn resolve_slab(
    depth: f64,
    zone: ZoneHint,
    selector: ModelSelector,
    assets: &ModelAssets,
) -> Result<Vec<FocalMechanism>, AppError> {
    let zone = match zone {
        ZoneHint::Known(z) => z,
        ZoneHint::Locate(p) => locate_subduction(p, assets)?.zone,
    };

    let bin = depth_bin(depth).ok_or_else(|| {
        AppError::new(
            ErrorKind::DepthOutOfRange,
            format!("Depth {depth} km does not fall in any slab depth bin."),
        )
    })?;
    tracing::debug!(zone = %zone, bin = %bin, "classified slab depth bin");

    let path = assets.slab_path()?;
    let table = load_slab_table(path)?;
    if !table.has_zone(zone) {
        return Err(AppError::new(
            ErrorKind::Asset,
            format!("Slab table '{}' has no entry for zone '{zone}'.", path.display()),
        ));
    }
    let set = table.mechanisms(zone, &bin.label()).ok_or_else(|| {
        AppError::new(
            ErrorKind::DepthOutOfRange,
            format!("No slab mechanisms tabulated for zone '{zone}' at depth bin {bin} km."),
        )
    })?;

    Ok(match selector {
        ModelSelector::MeanAll => most_probable(set.as_slice()),
        _ => set.as_slice().to_vec(),
    })
}

/// Locate the subduction zone containing `p`, loading each zone model from
/// its own config entry.
pub fn locate_subduction(
    p: GeoPoint,
    assets: &ModelAssets,
) -> Result<SubductionZoneModel, AppError> {
    locate_zone(p, |zone| load_zone_model(assets.zone_model_path(zone)?, zone))
}
