//! Subduction zone models: boundary containment and interface geometry.
//!
//! A zone model carries a boundary polygon plus two fitted surfaces giving
//! the interface strike and dip at a location. Interface mechanisms are
//! thrusts (rake 90) with the predicted geometry clamped to a plausible
//! window per zone.

use crate::domain::{FocalMechanism, GeoPoint, SubductionZone};
use crate::error::{AppError, ErrorKind};
use crate::math::{Polygon, Surface};

/// Interface dip window (degrees, inclusive).
pub const INTERFACE_DIP_RANGE: (f64, f64) = (10.0, 45.0);
pub const INTERFACE_RAKE: f64 = 90.0;

/// Order in which zones are tested when locating a point.
pub const ZONE_SEARCH_ORDER: [SubductionZone; 2] = [SubductionZone::Hik, SubductionZone::Puy];

/// Spatial capability of a zone model.
pub trait SpatialModel {
    fn zone(&self) -> SubductionZone;

    fn boundary(&self) -> &Polygon;

    /// Raw `(strike, dip)` prediction at `p`.
    fn predict(&self, p: GeoPoint) -> (f64, f64);
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubductionZoneModel {
    pub zone: SubductionZone,
    pub strike: Surface,
    pub dip: Surface,
    pub boundary: Polygon,
}

impl SpatialModel for SubductionZoneModel {
    fn zone(&self) -> SubductionZone {
        self.zone
    }

    fn boundary(&self) -> &Polygon {
        &self.boundary
    }

    fn predict(&self, p: GeoPoint) -> (f64, f64) {
        (self.strike.evaluate(p), self.dip.evaluate(p))
    }
}

/// Find the zone whose boundary contains `p`.
///
/// Models are loaded lazily in `ZONE_SEARCH_ORDER`; the first containing
/// boundary wins.
pub fn locate_zone<M, F>(p: GeoPoint, mut load: F) -> Result<M, AppError>
where
    M: SpatialModel,
    F: FnMut(SubductionZone) -> Result<M, AppError>,
{
    for zone in ZONE_SEARCH_ORDER {
        let model = load(zone)?;
        if model.boundary().contains(p) {
            tracing::debug!(zone = %zone, lon = p.lon, lat = p.lat, "point inside subduction zone");
            return Ok(model);
        }
    }
    Err(AppError::new(
        ErrorKind::SubductionZoneNotFound,
        format!("Lon, Lat ({}, {}) is not in a subduction zone.", p.lon, p.lat),
    ))
}

/// Round and clamp a raw interface prediction.
///
/// Rounding is half-to-even on the raw values before clamping.
pub fn clamp_interface(zone: SubductionZone, strike: f64, dip: f64) -> (f64, f64) {
    let (dip_lo, dip_hi) = INTERFACE_DIP_RANGE;
    let (strike_lo, strike_hi) = zone.strike_window();
    let s = strike.round_ties_even().clamp(strike_lo, strike_hi);
    let d = dip.round_ties_even().clamp(dip_lo, dip_hi);
    (s, d)
}

/// Single interface mechanism for `p` from the zone's predictors.
pub fn interface_mechanism<M: SpatialModel>(
    model: &M,
    p: GeoPoint,
) -> Result<FocalMechanism, AppError> {
    let (raw_strike, raw_dip) = model.predict(p);
    if !(raw_strike.is_finite() && raw_dip.is_finite()) {
        return Err(AppError::new(
            ErrorKind::Asset,
            format!(
                "{} interface model gave a non-finite prediction at ({}, {}).",
                model.zone().display_name(),
                p.lon,
                p.lat
            ),
        ));
    }
    let (strike, dip) = clamp_interface(model.zone(), raw_strike, raw_dip);
    tracing::debug!(raw_strike, raw_dip, strike, dip, "interface geometry");
    Ok(FocalMechanism::new(strike, dip, INTERFACE_RAKE, 1.0))
}
