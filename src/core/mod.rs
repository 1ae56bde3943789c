//! Core transmission types.
//!
//! This module contains the plain-value vocabulary of the state machine:
//! - Per-gear speed ranges
//! - The status reported after every attempted operation
//! - Snapshots and the immutable shift history
//!
//! Nothing in this module mutates shared state; the transmission in
//! [`crate::transmission`] is the only place where speed and gear change.

mod history;
mod range;
mod snapshot;
mod status;

pub use history::{Operation, ShiftHistory, ShiftRecord, DEFAULT_HISTORY_CAPACITY};
pub use range::{ranges_from_bounds, GearRange};
pub use snapshot::Snapshot;
pub use status::Status;
