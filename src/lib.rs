//! `nzfocmec` library crate.
//!
//! The binary (`focmec`) is a thin wrapper around this library so that:
//!
//! - lookups are testable without spawning processes
//! - other tools can call [`resolver::get_focmec`] directly

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
pub mod resolver;
pub mod select;

pub use domain::{FocalMechanism, GeoPoint, ModelSelector, Regime, SubductionZone};
pub use error::{AppError, ErrorKind};
pub use resolver::{FocmecRequest, Query, get_focmec, resolve};
