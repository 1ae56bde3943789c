//! Point-in-time readings of a transmission.

use super::status::Status;
use serde::{Deserialize, Serialize};

/// Immutable `(status, speed, gear)` reading.
///
/// Snapshots are what [`crate::transmission::ManualTransmission::query`]
/// returns and what the shift history stores on both sides of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: Status,
    pub speed: u32,
    pub gear: usize,
}

impl Snapshot {
    pub const fn new(status: Status, speed: u32, gear: usize) -> Self {
        Self {
            status,
            speed,
            gear,
        }
    }

    /// Check if two snapshots sit at the same speed and gear, ignoring status.
    pub fn same_position(&self, other: &Snapshot) -> bool {
        self.speed == other.speed && self.gear == other.gear
    }
}
