//! Planar point-in-polygon test in (lon, lat) degrees.
//!
//! Polygons are treated as simple rings; the closing vertex may be repeated
//! or omitted. Containment is inclusive: points on an edge or a vertex count
//! as inside.

use serde::Deserialize;

use crate::domain::GeoPoint;

/// Tolerance (degrees²) for the collinearity test on edges.
const EDGE_EPS: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<[f64; 2]>")]
pub struct Polygon {
    vertices: Vec<GeoPoint>,
}

impl Polygon {
    /// Build a polygon from parallel longitude/latitude arrays.
    pub fn from_lon_lat(lons: &[f64], lats: &[f64]) -> Result<Self, String> {
        if lons.len() != lats.len() {
            return Err(format!(
                "lon/lat length mismatch ({} vs {})",
                lons.len(),
                lats.len()
            ));
        }
        let vertices = lons
            .iter()
            .zip(lats)
            .map(|(&lon, &lat)| GeoPoint::new(lon, lat))
            .collect();
        Self::new(vertices)
    }

    pub fn new(vertices: Vec<GeoPoint>) -> Result<Self, String> {
        if vertices.len() < 3 {
            return Err(format!("polygon needs at least 3 vertices, got {}", vertices.len()));
        }
        if let Some(v) = vertices.iter().find(|v| !(v.lon.is_finite() && v.lat.is_finite())) {
            return Err(format!("non-finite vertex ({}, {})", v.lon, v.lat));
        }
        Ok(Self { vertices })
    }

    pub fn contains(&self, p: GeoPoint) -> bool {
        if !(p.lon.is_finite() && p.lat.is_finite()) {
            return false;
        }

        let n = self.vertices.len();
        let mut inside = false;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];

            if on_segment(a, b, p) {
                return true;
            }

            // Even-odd ray cast towards +lon.
            if (a.lat > p.lat) != (b.lat > p.lat) {
                let x = a.lon + (p.lat - a.lat) * (b.lon - a.lon) / (b.lat - a.lat);
                if p.lon < x {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

fn on_segment(a: GeoPoint, b: GeoPoint, p: GeoPoint) -> bool {
    let cross = (b.lon - a.lon) * (p.lat - a.lat) - (b.lat - a.lat) * (p.lon - a.lon);
    if cross.abs() > EDGE_EPS {
        return false;
    }
    p.lon >= a.lon.min(b.lon) - EDGE_EPS
        && p.lon <= a.lon.max(b.lon) + EDGE_EPS
        && p.lat >= a.lat.min(b.lat) - EDGE_EPS
        && p.lat <= a.lat.max(b.lat) + EDGE_EPS
}

impl TryFrom<Vec<[f64; 2]>> for Polygon {
    type Error = String;

    fn try_from(v: Vec<[f64; 2]>) -> Result<Self, Self::Error> {
        Polygon::new(v.into_iter().map(|[lon, lat]| GeoPoint::new(lon, lat)).collect())
    }
}
