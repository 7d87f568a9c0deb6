//! Scalar surfaces over (lon, lat) used as strike/dip predictors.
//!
//! Two encodings are supported in the zone model files:
//!
//! ```text
//! {"kind": "grid", "lon_min": .., "lat_min": .., "dlon": .., "dlat": ..,
//!  "nlon": .., "nlat": .., "values": [row-major by latitude]}
//! {"kind": "polynomial", "coefficients": [[c00, c01, ..], [c10, ..], ..]}
//! ```
//!
//! Grids are interpolated bilinearly and clamped to their extent, so a query
//! outside the grid takes the nearest edge value. Polynomials evaluate
//! `Σ c[i][j] · lon^i · lat^j`.

use nalgebra::DMatrix;
use serde::Deserialize;

use crate::domain::GeoPoint;

/// Wire form of a [`Surface`], validated on conversion.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SurfaceSpec {
    Grid {
        lon_min: f64,
        lat_min: f64,
        dlon: f64,
        dlat: f64,
        nlon: usize,
        nlat: usize,
        values: Vec<f64>,
    },
    Polynomial {
        coefficients: Vec<Vec<f64>>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "SurfaceSpec")]
pub enum Surface {
    Grid {
        lon_min: f64,
        lat_min: f64,
        dlon: f64,
        dlat: f64,
        /// `nlat × nlon`.
        values: DMatrix<f64>,
    },
    Polynomial {
        coefficients: Vec<Vec<f64>>,
    },
}

impl Surface {
    pub fn evaluate(&self, p: GeoPoint) -> f64 {
        match self {
            Surface::Grid {
                lon_min,
                lat_min,
                dlon,
                dlat,
                values,
            } => {
                let (i0, i1, ti) = cell(p.lat, *lat_min, *dlat, values.nrows());
                let (j0, j1, tj) = cell(p.lon, *lon_min, *dlon, values.ncols());
                let bottom = values[(i0, j0)] * (1.0 - tj) + values[(i0, j1)] * tj;
                let top = values[(i1, j0)] * (1.0 - tj) + values[(i1, j1)] * tj;
                bottom * (1.0 - ti) + top * ti
            }
            Surface::Polynomial { coefficients } => {
                let mut acc = 0.0;
                let mut lon_pow = 1.0;
                for row in coefficients {
                    let mut lat_pow = 1.0;
                    for c in row {
                        acc += c * lon_pow * lat_pow;
                        lat_pow *= p.lat;
                    }
                    lon_pow *= p.lon;
                }
                acc
            }
        }
    }
}

/// Bracketing indices and interpolation weight along one grid axis.
fn cell(x: f64, origin: f64, step: f64, n: usize) -> (usize, usize, f64) {
    let last = (n - 1) as f64;
    let f = ((x - origin) / step).clamp(0.0, last);
    let lo = f.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    (lo, hi, f - lo as f64)
}

impl TryFrom<SurfaceSpec> for Surface {
    type Error = String;

    fn try_from(spec: SurfaceSpec) -> Result<Self, Self::Error> {
        match spec {
            SurfaceSpec::Grid {
                lon_min,
                lat_min,
                dlon,
                dlat,
                nlon,
                nlat,
                values,
            } => {
                if nlon == 0 || nlat == 0 {
                    return Err("grid surface must have nlon > 0 and nlat > 0".to_string());
                }
                let cells = nlon
                    .checked_mul(nlat)
                    .ok_or("grid surface dimensions overflow")?;
                if values.len() != cells {
                    return Err(format!(
                        "grid surface has {} values, expected nlon*nlat = {cells}",
                        values.len()
                    ));
                }
                if !(dlon.is_finite() && dlon > 0.0 && dlat.is_finite() && dlat > 0.0) {
                    return Err("grid surface spacing must be positive".to_string());
                }
                if !(lon_min.is_finite() && lat_min.is_finite()) {
                    return Err("grid surface origin must be finite".to_string());
                }
                Ok(Surface::Grid {
                    lon_min,
                    lat_min,
                    dlon,
                    dlat,
                    values: DMatrix::from_row_slice(nlat, nlon, &values),
                })
            }
            SurfaceSpec::Polynomial { coefficients } => {
                if coefficients.iter().all(|row| row.is_empty()) {
                    return Err("polynomial surface has no coefficients".to_string());
                }
                Ok(Surface::Polynomial { coefficients })
            }
        }
    }
}
