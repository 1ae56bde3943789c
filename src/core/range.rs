//! Per-gear speed ranges.

use serde::{Deserialize, Serialize};

/// Inclusive speed interval `[low, high]` in which a gear may operate.
///
/// Ranges are plain values. Whether a sequence of ranges forms a usable
/// gearbox is decided by [`crate::validation::validate_ranges`].
///
/// # Example
///
/// ```rust
/// use gearshift::core::GearRange;
///
/// let second = GearRange::new(5, 20);
///
/// assert!(second.contains(5));
/// assert!(second.contains(20));
/// assert!(!second.contains(21));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GearRange {
    /// Lowest speed the gear accepts
    pub low: u32,
    /// Highest speed the gear accepts
    pub high: u32,
}

impl GearRange {
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Check whether `speed` lies inside the range, bounds included.
    pub fn contains(&self, speed: u32) -> bool {
        self.low <= speed && speed <= self.high
    }

    /// Check whether the range is well formed (`low <= high`).
    pub fn is_ordered(&self) -> bool {
        self.low <= self.high
    }
}

impl From<(u32, u32)> for GearRange {
    fn from((low, high): (u32, u32)) -> Self {
        Self::new(low, high)
    }
}

/// Split ten flat bounds `(l1, h1, ..., l5, h5)` into five ranges in gear order.
pub fn ranges_from_bounds(bounds: [u32; 10]) -> Vec<GearRange> {
    bounds
        .chunks_exact(2)
        .map(|pair| GearRange::new(pair[0], pair[1]))
        .collect()
}
