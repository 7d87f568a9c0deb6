//! Read-only model data and the lookups over it.
//!
//! - neotectonic domains (crust)
//! - subduction zone models (slab zone location, interface geometry)
//! - typed mechanism tables

pub mod domains;
pub mod subduction;
pub mod tables;

pub use domains::*;
pub use subduction::*;
pub use tables::*;
