//! Geometry and numeric helpers: polygon containment and predictor surfaces.

pub mod polygon;
pub mod surface;

pub use polygon::*;
pub use surface::*;
