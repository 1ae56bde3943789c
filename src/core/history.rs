//! Shift history tracking.
//!
//! Provides a bounded, immutable log of the operations attempted on a
//! transmission, following functional programming principles: recording
//! returns a new history and leaves the original untouched.

use super::snapshot::Snapshot;
use super::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of records kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// The four operations a driver can attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    IncreaseSpeed,
    DecreaseSpeed,
    IncreaseGear,
    DecreaseGear,
}

impl Operation {
    /// Get the operation's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::IncreaseSpeed => "increase_speed",
            Self::DecreaseSpeed => "decrease_speed",
            Self::IncreaseGear => "increase_gear",
            Self::DecreaseGear => "decrease_gear",
        }
    }
}

/// Record of a single attempted operation.
///
/// `from` and `to` hold the same speed and gear when the operation was
/// rejected; only the status differs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The operation that was attempted
    pub operation: Operation,
    /// Reading before the attempt
    pub from: Snapshot,
    /// Reading after the attempt
    pub to: Snapshot,
    /// When the attempt was decided
    pub timestamp: DateTime<Utc>,
}

impl ShiftRecord {
    pub fn new(operation: Operation, from: Snapshot, to: Snapshot) -> Self {
        Self {
            operation,
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    /// Outcome of the attempt.
    pub fn status(&self) -> Status {
        self.to.status
    }

    pub fn was_rejected(&self) -> bool {
        self.to.status.is_rejection()
    }
}

/// Ordered, bounded history of shift records.
///
/// History is immutable - the `record` method returns a new history with
/// the record appended, dropping the oldest records once `capacity` is
/// exceeded.
///
/// # Example
///
/// ```rust
/// use gearshift::core::{Operation, ShiftHistory, ShiftRecord, Snapshot, Status};
///
/// let history = ShiftHistory::with_capacity(2);
///
/// let start = Snapshot::new(Status::Ok, 0, 1);
/// let moving = Snapshot::new(Status::Ok, 1, 1);
/// let faster = Snapshot::new(Status::Ok, 2, 1);
///
/// let history = history.record(ShiftRecord::new(Operation::IncreaseSpeed, start, moving));
/// let history = history.record(ShiftRecord::new(Operation::IncreaseSpeed, moving, faster));
/// let history = history.record(ShiftRecord::new(Operation::DecreaseSpeed, faster, moving));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.path(), vec![(1, 1), (2, 1), (1, 1)]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShiftHistory {
    records: Vec<ShiftRecord>,
    capacity: usize,
}

impl Default for ShiftHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftHistory {
    /// Create an empty history holding up to [`DEFAULT_HISTORY_CAPACITY`] records.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history holding up to `capacity` records.
    ///
    /// A capacity of zero keeps nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    /// Record an attempt, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history.
    pub fn record(&self, record: ShiftRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        if records.len() > self.capacity {
            let excess = records.len() - self.capacity;
            records.drain(..excess);
        }
        Self {
            records,
            capacity: self.capacity,
        }
    }

    /// Get the `(speed, gear)` positions traversed.
    ///
    /// Starts at the `from` position of the oldest retained record and
    /// appends each `to` position that differs from the previous one, so
    /// rejected attempts do not add entries.
    pub fn path(&self) -> Vec<(u32, usize)> {
        let mut path: Vec<(u32, usize)> = Vec::new();
        if let Some(first) = self.records.first() {
            path.push((first.from.speed, first.from.gear));
        }
        for record in &self.records {
            let position = (record.to.speed, record.to.gear);
            if path.last() != Some(&position) {
                path.push(position);
            }
        }
        path
    }

    /// Time between the oldest and newest retained records.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Iterate over the attempts that were refused.
    pub fn rejections(&self) -> impl Iterator<Item = &ShiftRecord> + '_ {
        self.records.iter().filter(|record| record.was_rejected())
    }

    pub fn last(&self) -> Option<&ShiftRecord> {
        self.records.last()
    }

    /// Get all retained records, oldest first.
    pub fn records(&self) -> &[ShiftRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
