//! Typed mechanism tables.
//!
//! Crustal table layout (per domain):
//!
//! ```text
//! {"D1": {"case1": {">15": {"strikeAn": [..], "dipAn": [..], "rakeAn": [..], "prob": [..]},
//!                   ">45": {...}},
//!         "case2": {...}}}
//! ```
//!
//! Slab table layout: `{"hik": {"40": [[s, d, r, p], ...], ...}, "puy": {...}}`.
//!
//! Parallel columns are zipped into `FocalMechanism`s during decoding, so a
//! length mismatch or out-of-range value rejects the whole file.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::{FocalMechanism, SubductionZone};

/// Raw parallel columns as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct MechanismColumns {
    #[serde(rename = "strikeAn")]
    pub strike: Vec<f64>,
    #[serde(rename = "dipAn")]
    pub dip: Vec<f64>,
    #[serde(rename = "rakeAn")]
    pub rake: Vec<f64>,
    #[serde(rename = "prob")]
    pub probability: Vec<f64>,
}

/// Non-empty, validated, ordered list of mechanisms.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "MechanismColumns")]
pub struct MechanismSet(Vec<FocalMechanism>);

impl MechanismSet {
    pub fn new(mechanisms: Vec<FocalMechanism>) -> Result<Self, String> {
        if mechanisms.is_empty() {
            return Err("mechanism list is empty".to_string());
        }
        for (i, m) in mechanisms.iter().enumerate() {
            m.validate().map_err(|e| format!("mechanism #{i}: {e}"))?;
        }
        Ok(Self(mechanisms))
    }

    pub fn as_slice(&self) -> &[FocalMechanism] {
        &self.0
    }
}

impl TryFrom<MechanismColumns> for MechanismSet {
    type Error = String;

    fn try_from(c: MechanismColumns) -> Result<Self, Self::Error> {
        let n = c.probability.len();
        if c.strike.len() != n || c.dip.len() != n || c.rake.len() != n {
            return Err(format!(
                "column lengths differ (strikeAn={}, dipAn={}, rakeAn={}, prob={n})",
                c.strike.len(),
                c.dip.len(),
                c.rake.len()
            ));
        }
        let mechanisms = (0..n)
            .map(|i| FocalMechanism::new(c.strike[i], c.dip[i], c.rake[i], c.probability[i]))
            .collect();
        MechanismSet::new(mechanisms)
    }
}

/// Magnitude-length tagged mechanisms for one statistical case.
///
/// `>15` is mandatory since it is the fallback for every magnitude.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CaseTable {
    #[serde(rename = ">15")]
    pub over_15: MechanismSet,
    #[serde(rename = ">45", default)]
    pub over_45: Option<MechanismSet>,
}

/// Both statistical cases for one neotectonic domain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DomainTable {
    pub case1: CaseTable,
    pub case2: CaseTable,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CrustTable {
    domains: HashMap<String, DomainTable>,
}

impl CrustTable {
    pub fn domain(&self, name: &str) -> Option<&DomainTable> {
        self.domains.get(name)
    }
}

/// Pre-tabulated slab mechanisms, keyed by zone then depth-bin label.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "HashMap<SubductionZone, HashMap<String, Vec<FocalMechanism>>>")]
pub struct SlabTable {
    zones: HashMap<SubductionZone, HashMap<String, MechanismSet>>,
}

impl TryFrom<HashMap<SubductionZone, HashMap<String, Vec<FocalMechanism>>>> for SlabTable {
    type Error = String;

    fn try_from(
        raw: HashMap<SubductionZone, HashMap<String, Vec<FocalMechanism>>>,
    ) -> Result<Self, Self::Error> {
        let mut zones = HashMap::with_capacity(raw.len());
        for (zone, bins) in raw {
            let mut sets = HashMap::with_capacity(bins.len());
            for (label, list) in bins {
                let set = MechanismSet::new(list).map_err(|e| format!("{zone}/{label}: {e}"))?;
                sets.insert(label, set);
            }
            zones.insert(zone, sets);
        }
        Ok(Self { zones })
    }
}

impl SlabTable {
    pub fn has_zone(&self, zone: SubductionZone) -> bool {
        self.zones.contains_key(&zone)
    }

    pub fn mechanisms(&self, zone: SubductionZone, bin_label: &str) -> Option<&MechanismSet> {
        self.zones.get(&zone)?.get(bin_label)
    }
}
