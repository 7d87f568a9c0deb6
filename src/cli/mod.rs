//! Command-line parsing for the focal mechanism resolver.
//!
//! Argument parsing stays here; dispatch lives in `app`.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::{ModelSelector, Regime, SubductionZone};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "focmec",
    version,
    about = "Probabilistic focal mechanisms for New Zealand earthquakes"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve focal mechanisms for an event.
    Resolve(ResolveArgs),
    /// Report the neotectonic domain and subduction zone containing a point.
    Locate(LocateArgs),
    /// Print the slab depth bin for a depth.
    DepthBin(DepthBinArgs),
}

/// Where the model config and assets live.
///
/// Unset values fall back to `FOCMEC_MODEL_FOLDER` / `FOCMEC_CONFIG`
/// (a `.env` file is honoured), then to the built-in defaults.
#[derive(Debug, Args, Clone)]
pub struct AssetArgs {
    /// Folder holding the config file and model assets.
    #[arg(long, value_name = "DIR")]
    pub model_folder: Option<PathBuf>,

    /// Config file name, relative to the model folder.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ResolveArgs {
    /// Tectonic regime of the event.
    #[arg(short = 'r', long, value_enum, ignore_case = true, default_value_t = Regime::Crust)]
    pub regime: Regime,

    /// Longitude (decimal degrees).
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Latitude (decimal degrees).
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Depth (km).
    #[arg(long, allow_negative_numbers = true)]
    pub depth: Option<f64>,

    /// Moment magnitude.
    #[arg(long)]
    pub mw: Option<f64>,

    /// Which statistical case(s) to return.
    #[arg(short = 'm', long, value_enum, default_value_t = ModelSelector::All)]
    pub model: ModelSelector,

    /// Skip zone location and use this subduction zone.
    #[arg(long, value_enum, ignore_case = true)]
    pub subduction_zone: Option<SubductionZone>,

    #[command(flatten)]
    pub assets: AssetArgs,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Also write the request and mechanisms to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct LocateArgs {
    /// Longitude (decimal degrees).
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Latitude (decimal degrees).
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    #[command(flatten)]
    pub assets: AssetArgs,
}

#[derive(Debug, Args, Clone)]
pub struct DepthBinArgs {
    /// Depth (km).
    #[arg(allow_negative_numbers = true)]
    pub depth: f64,
}
