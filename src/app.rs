//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - resolves asset locations (flags, then environment, then defaults)
//! - runs the requested lookup and prints the result

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{AssetArgs, Command, DepthBinArgs, LocateArgs, ResolveArgs};
use crate::domain::GeoPoint;
use crate::error::{AppError, ErrorKind};
use crate::io::{DEFAULT_CONFIG_FILE, DEFAULT_MODEL_FOLDER, ModelAssets};
use crate::resolver::FocmecRequest;

pub mod pipeline;

const ENV_MODEL_FOLDER: &str = "FOCMEC_MODEL_FOLDER";
const ENV_CONFIG: &str = "FOCMEC_CONFIG";

/// Entry point for the `focmec` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    dotenvy::dotenv().ok();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Resolve(args) => handle_resolve(args),
        Command::Locate(args) => handle_locate(args),
        Command::DepthBin(args) => handle_depth_bin(args),
    }
}

fn init_tracing(verbose: u8) {
    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_resolve(args: ResolveArgs) -> Result<(), AppError> {
    let request = request_from_args(&args);
    let mechanisms = crate::resolver::get_focmec(&request)?;

    if args.json {
        let json = serde_json::to_string_pretty(&mechanisms)
            .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to encode JSON: {e}")))?;
        println!("{json}");
    } else {
        println!("{}", crate::report::format_mechanisms(&request, &mechanisms));
    }

    if let Some(path) = &args.export {
        crate::io::export::write_mechanisms_json(path, &request, &mechanisms)?;
    }

    Ok(())
}

fn handle_locate(args: LocateArgs) -> Result<(), AppError> {
    let (model_folder, config_file) = asset_location(&args.assets);
    let assets = ModelAssets::load(&model_folder, &config_file)?;
    let located = pipeline::locate(GeoPoint::new(args.lon, args.lat), &assets)?;
    println!("{}", crate::report::format_location(&located));
    Ok(())
}

fn handle_depth_bin(args: DepthBinArgs) -> Result<(), AppError> {
    let bin = crate::select::depth_bin(args.depth).ok_or_else(|| {
        AppError::new(
            ErrorKind::DepthOutOfRange,
            format!("Depth {} km does not fall in any slab depth bin.", args.depth),
        )
    })?;
    println!("{}", bin.label());
    Ok(())
}

pub fn request_from_args(args: &ResolveArgs) -> FocmecRequest {
    let (model_folder, config_file) = asset_location(&args.assets);
    FocmecRequest {
        lon: args.lon,
        lat: args.lat,
        dep: args.depth,
        mw: args.mw,
        regime: args.regime.as_str().to_string(),
        preferred_model: args.model.as_str().to_string(),
        model_folder,
        config_file,
        subduction_zone: args.subduction_zone.map(|z| z.as_str().to_string()),
    }
}

fn asset_location(args: &AssetArgs) -> (PathBuf, PathBuf) {
    let model_folder = args
        .model_folder
        .clone()
        .or_else(|| std::env::var_os(ENV_MODEL_FOLDER).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_FOLDER));
    let config_file = args
        .config
        .clone()
        .or_else(|| std::env::var_os(ENV_CONFIG).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    (model_folder, config_file)
}
