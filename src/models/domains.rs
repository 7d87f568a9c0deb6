//! Neotectonic domain classification for crustal events.

use crate::domain::GeoPoint;
use crate::math::Polygon;

/// A named crustal domain; the name keys the crustal mechanism table.
#[derive(Debug, Clone, PartialEq)]
pub struct NeotectonicDomain {
    pub name: String,
    pub polygon: Polygon,
}

/// Return the first domain (in file order) whose polygon contains `p`.
pub fn classify_domain(domains: &[NeotectonicDomain], p: GeoPoint) -> Option<&NeotectonicDomain> {
    domains.iter().find(|d| d.polygon.contains(p))
}
