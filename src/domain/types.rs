//! Shared domain types.
//!
//! Regime, selector and zone tokens parse from CLI flags or library string
//! arguments. Mechanisms decode straight out of the JSON model assets and
//! export back to JSON alongside the request.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Tectonic regime of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Regime {
    /// Shallow crustal event inside a neotectonic domain.
    Crust,
    /// Intraslab event inside the subducting plate.
    Slab,
    /// Event on the subduction interface.
    Interface,
}

impl Regime {
    pub fn as_str(self) -> &'static str {
        match self {
            Regime::Crust => "crust",
            Regime::Slab => "slab",
            Regime::Interface => "interface",
        }
    }
}

impl FromStr for Regime {
    type Err = AppError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "crust" => Ok(Regime::Crust),
            "slab" => Ok(Regime::Slab),
            "interface" => Ok(Regime::Interface),
            _ => Err(AppError::new(
                ErrorKind::InvalidRegime,
                format!("Regime '{s}' is invalid. Expected one of: crust, slab, interface."),
            )),
        }
    }
}

/// Which statistical case(s) of the crustal model to draw mechanisms from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelSelector {
    /// Every mechanism of case 1.
    #[value(name = "case1")]
    Case1,
    /// Every mechanism of case 2.
    #[value(name = "case2")]
    Case2,
    /// The most probable mechanism of case 1.
    #[value(name = "mean_case1")]
    MeanCase1,
    /// The most probable mechanism of case 2.
    #[value(name = "mean_case2")]
    MeanCase2,
    /// Case 1 and case 2 blended.
    #[value(name = "all")]
    All,
    /// The most probable mechanisms of case 1 and case 2 blended.
    #[value(name = "mean_all")]
    MeanAll,
}

impl ModelSelector {
    pub const ALL: [ModelSelector; 6] = [
        ModelSelector::Case1,
        ModelSelector::Case2,
        ModelSelector::MeanCase1,
        ModelSelector::MeanCase2,
        ModelSelector::All,
        ModelSelector::MeanAll,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelSelector::Case1 => "case1",
            ModelSelector::Case2 => "case2",
            ModelSelector::MeanCase1 => "mean_case1",
            ModelSelector::MeanCase2 => "mean_case2",
            ModelSelector::All => "all",
            ModelSelector::MeanAll => "mean_all",
        }
    }
}

impl FromStr for ModelSelector {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelSelector::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                AppError::new(
                    ErrorKind::InvalidModelSelector,
                    format!(
                        "Preferred model '{s}' is invalid. Expected one of: \
                         case1, case2, mean_case1, mean_case2, all, mean_all."
                    ),
                )
            })
    }
}

/// Subduction zones covered by the interface and slab models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SubductionZone {
    /// Hikurangi margin.
    Hik,
    /// Puysegur margin.
    Puy,
}

impl SubductionZone {
    /// Key used in the slab table and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SubductionZone::Hik => "hik",
            SubductionZone::Puy => "puy",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SubductionZone::Hik => "Hikurangi",
            SubductionZone::Puy => "Puysegur",
        }
    }

    /// Allowed interface strike window (degrees, inclusive).
    pub fn strike_window(self) -> (f64, f64) {
        match self {
            SubductionZone::Hik => (240.0, 260.0),
            SubductionZone::Puy => (0.0, 40.0),
        }
    }
}

impl FromStr for SubductionZone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hik" => Ok(SubductionZone::Hik),
            "puy" => Ok(SubductionZone::Puy),
            _ => Err(AppError::new(
                ErrorKind::InvalidSubductionZone,
                format!("Subduction zone '{s}' is invalid. Expected either hik or puy."),
            )),
        }
    }
}

impl fmt::Display for SubductionZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// One focal mechanism with its model probability.
///
/// Serialized as `[strike, dip, rake, probability]`, the layout used by the
/// slab tables and by exported results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct FocalMechanism {
    /// Degrees clockwise from north, `[0, 360]`.
    pub strike: f64,
    /// Degrees from horizontal, `[0, 90]`.
    pub dip: f64,
    /// Degrees, `[-180, 180]`.
    pub rake: f64,
    pub probability: f64,
}

impl FocalMechanism {
    pub fn new(strike: f64, dip: f64, rake: f64, probability: f64) -> Self {
        Self {
            strike,
            dip,
            rake,
            probability,
        }
    }

    pub fn with_probability(self, probability: f64) -> Self {
        Self { probability, ..self }
    }

    /// Check the value ranges of a decoded mechanism.
    pub fn validate(&self) -> Result<(), String> {
        let checks = [
            ("strike", self.strike, 0.0, 360.0),
            ("dip", self.dip, 0.0, 90.0),
            ("rake", self.rake, -180.0, 180.0),
            ("probability", self.probability, 0.0, 1.0),
        ];
        for (name, value, lo, hi) in checks {
            if !value.is_finite() || value < lo || value > hi {
                return Err(format!("{name}={value} outside [{lo}, {hi}]"));
            }
        }
        Ok(())
    }
}

impl From<[f64; 4]> for FocalMechanism {
    fn from(v: [f64; 4]) -> Self {
        FocalMechanism::new(v[0], v[1], v[2], v[3])
    }
}

impl From<FocalMechanism> for [f64; 4] {
    fn from(m: FocalMechanism) -> Self {
        [m.strike, m.dip, m.rake, m.probability]
    }
}
