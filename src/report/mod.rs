//! Reporting utilities: terminal formatting of mechanisms and locations.

pub mod format;

pub use format::*;
