//! Discrete lookups: depth bins and probability-table selection.

pub mod depth_bin;
pub mod sdrp;

pub use depth_bin::*;
pub use sdrp::*;
