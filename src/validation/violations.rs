//! Structural violations a gear table can exhibit.

use thiserror::Error;

/// A single broken rule in a gear table.
///
/// Gears are numbered from 1 in every variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RangeViolation {
    #[error("No gears supplied. At least one gear range is required")]
    NoGears,

    #[error("Gear 1 must start at speed 0 (low bound is {low})")]
    FirstGearNotAtZero { low: u32 },

    #[error("Gear {next} starts at {next_low}, above gear {gear}'s ceiling {high}")]
    GapBetweenGears {
        gear: usize,
        high: u32,
        next: usize,
        next_low: u32,
    },

    #[error("Gear {gear} ceiling {high} exceeds the top speed {top_speed}")]
    ExceedsTopSpeed {
        gear: usize,
        high: u32,
        top_speed: u32,
    },

    #[error("Gear {gear} range is inverted (low {low} > high {high})")]
    InvertedRange { gear: usize, low: u32, high: u32 },
}
