//! Input/output helpers.
//!
//! - model config (TOML) → asset paths (`config`)
//! - JSON asset loaders (`assets`)
//! - result export (`export`)

pub mod assets;
pub mod config;
pub mod export;

pub use assets::*;
pub use config::*;
pub use export::*;
