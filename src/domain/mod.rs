//! Domain types used throughout the resolver.
//!
//! This module defines:
//!
//! - input enums (`Regime`, `ModelSelector`, `SubductionZone`)
//! - locations (`GeoPoint`)
//! - results (`FocalMechanism`)

pub mod types;

pub use types::*;
