//! Depth binning for slab lookups.
//!
//! Bin centers run `20, 40, ..., 280` km and each bin covers
//! `[center - 5, center + 5)`. Windows are narrower than the spacing, so
//! depths such as 30 or 50 km fall between bins and match nothing.

use std::fmt;

/// First bin center (km).
pub const DEPTH_BIN_START: u32 = 20;
/// Centers stop strictly below this depth (km).
pub const DEPTH_BIN_END: u32 = 300;
pub const DEPTH_BIN_STEP: u32 = 20;
pub const DEPTH_BIN_HALF_WIDTH: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthBin {
    center: u32,
}

impl DepthBin {
    pub fn center(self) -> u32 {
        self.center
    }

    /// Key used by the slab table (`"40"`).
    pub fn label(self) -> String {
        self.center.to_string()
    }

    pub fn contains(self, depth: f64) -> bool {
        let c = f64::from(self.center);
        depth >= c - DEPTH_BIN_HALF_WIDTH && depth < c + DEPTH_BIN_HALF_WIDTH
    }
}

impl fmt::Display for DepthBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.center)
    }
}

/// All bins in ascending order.
pub fn depth_bins() -> impl Iterator<Item = DepthBin> {
    (DEPTH_BIN_START..DEPTH_BIN_END)
        .step_by(DEPTH_BIN_STEP as usize)
        .map(|center| DepthBin { center })
}

/// First bin whose window contains `depth` (km), if any.
pub fn depth_bin(depth: f64) -> Option<DepthBin> {
    depth_bins().find(|b| b.contains(depth))
}
