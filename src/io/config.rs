//! Model configuration: which asset file serves which regime.
//!
//! The config is a small TOML document living inside the model folder:
//!
//! ```toml
//! [ntdomains]
//! file = "ntdomains.json"
//! [crust]
//! file = "crust_focmec.json"
//! [slab]
//! file = "slab_focmec.json"
//! [interface.hikurangi]
//! file = "hikurangi_interface.json"
//! [interface.puysegur]
//! file = "puysegur_interface.json"
//! ```
//!
//! Every section is optional at parse time; a missing entry only fails when
//! a regime actually needs it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::SubductionZone;
use crate::error::{AppError, ErrorKind};

pub const DEFAULT_MODEL_FOLDER: &str = "../models/";
pub const DEFAULT_CONFIG_FILE: &str = "nzfocmec_v1.ini";

#[derive(Debug, Clone, Deserialize)]
struct AssetRef {
    file: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct InterfaceSection {
    hikurangi: Option<AssetRef>,
    puysegur: Option<AssetRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    ntdomains: Option<AssetRef>,
    crust: Option<AssetRef>,
    slab: Option<AssetRef>,
    #[serde(default)]
    interface: InterfaceSection,
}

/// Resolved asset paths, each already joined onto the model folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAssets {
    pub model_folder: PathBuf,
    pub ntdomains: Option<PathBuf>,
    pub crust: Option<PathBuf>,
    pub slab: Option<PathBuf>,
    pub hikurangi: Option<PathBuf>,
    pub puysegur: Option<PathBuf>,
}

impl ModelAssets {
    /// Read `config_file` (relative to `model_folder` unless absolute).
    pub fn load(model_folder: &Path, config_file: &Path) -> Result<Self, AppError> {
        let path = model_folder.join(config_file);
        let text = fs::read_to_string(&path).map_err(|e| {
            AppError::new(
                ErrorKind::Io,
                format!("Failed to read model config '{}': {e}", path.display()),
            )
        })?;
        let assets = Self::from_toml(model_folder, &text).map_err(|e| {
            AppError::new(
                ErrorKind::Asset,
                format!("Invalid model config '{}': {e}", path.display()),
            )
        })?;
        tracing::debug!(config = %path.display(), "loaded model config");
        Ok(assets)
    }

    /// Parse config text; paths are joined onto `model_folder`.
    pub fn from_toml(model_folder: &Path, text: &str) -> Result<Self, String> {
        let raw: ConfigFile = toml::from_str(text).map_err(|e| e.to_string())?;
        let join = |a: Option<AssetRef>| a.map(|a| model_folder.join(a.file));
        Ok(Self {
            model_folder: model_folder.to_path_buf(),
            ntdomains: join(raw.ntdomains),
            crust: join(raw.crust),
            slab: join(raw.slab),
            hikurangi: join(raw.interface.hikurangi),
            puysegur: join(raw.interface.puysegur),
        })
    }

    pub fn ntdomains_path(&self) -> Result<&Path, AppError> {
        require(self.ntdomains.as_deref(), "ntdomains")
    }

    pub fn crust_path(&self) -> Result<&Path, AppError> {
        require(self.crust.as_deref(), "crust")
    }

    pub fn slab_path(&self) -> Result<&Path, AppError> {
        require(self.slab.as_deref(), "slab")
    }

    pub fn zone_model_path(&self, zone: SubductionZone) -> Result<&Path, AppError> {
        match zone {
            SubductionZone::Hik => require(self.hikurangi.as_deref(), "interface.hikurangi"),
            SubductionZone::Puy => require(self.puysegur.as_deref(), "interface.puysegur"),
        }
    }
}

fn require<'a>(path: Option<&'a Path>, section: &str) -> Result<&'a Path, AppError> {
    path.ok_or_else(|| {
        AppError::new(
            ErrorKind::Asset,
            format!("Model config has no [{section}] file entry."),
        )
    })
}
