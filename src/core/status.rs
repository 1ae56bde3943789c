//! Outcome vocabulary for transmission operations.
//!
//! Every attempted operation leaves exactly one `Status` behind. Accepted
//! changes report `Ok` or an advisory `May*` status; rejected changes report
//! one of the `Must*`, `Max*` or `Min*` statuses and leave speed and gear
//! untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of the last attempted operation.
///
/// Statuses serialize as their verbatim code (`"OK"`, `"MUST_INCREASE_GEAR"`,
/// ...) and display as the sentence a driver would read.
///
/// # Example
///
/// ```rust
/// use gearshift::core::Status;
///
/// let status = Status::MustIncreaseGear;
///
/// assert_eq!(status.code(), "MUST_INCREASE_GEAR");
/// assert_eq!(status.to_string(), "Cannot increase speed, increase gear first.");
/// assert!(status.is_rejection());
/// assert!(!Status::MayIncreaseGear.is_rejection());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The change was applied and nothing else needs attention
    #[default]
    Ok,
    /// Speed was raised into the overlap with the next gear
    MayIncreaseGear,
    /// Speed was lowered into the overlap with the previous gear
    MayDecreaseGear,
    /// Speed cannot rise further in the current gear
    MustIncreaseGear,
    /// Speed cannot fall further in the current gear
    MustDecreaseGear,
    /// Speed is too low for the next gear
    MustIncreaseSpeed,
    /// Speed is too high for the previous gear
    MustDecreaseSpeed,
    /// Top gear is at its ceiling
    MaxSpeedReached,
    /// Already stopped
    MinSpeedReached,
    /// Already in the top gear
    MaxGearReached,
    /// Already in first gear
    MinGearReached,
}

impl Status {
    /// All statuses in declaration order.
    pub const ALL: [Status; 11] = [
        Status::Ok,
        Status::MayIncreaseGear,
        Status::MayDecreaseGear,
        Status::MustIncreaseGear,
        Status::MustDecreaseGear,
        Status::MustIncreaseSpeed,
        Status::MustDecreaseSpeed,
        Status::MaxSpeedReached,
        Status::MinSpeedReached,
        Status::MaxGearReached,
        Status::MinGearReached,
    ];

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::MayIncreaseGear => "MAY_INCREASE_GEAR",
            Self::MayDecreaseGear => "MAY_DECREASE_GEAR",
            Self::MustIncreaseGear => "MUST_INCREASE_GEAR",
            Self::MustDecreaseGear => "MUST_DECREASE_GEAR",
            Self::MustIncreaseSpeed => "MUST_INCREASE_SPEED",
            Self::MustDecreaseSpeed => "MUST_DECREASE_SPEED",
            Self::MaxSpeedReached => "MAX_SPEED_REACHED",
            Self::MinSpeedReached => "MIN_SPEED_REACHED",
            Self::MaxGearReached => "MAX_GEAR_REACHED",
            Self::MinGearReached => "MIN_GEAR_REACHED",
        }
    }

    /// Human-readable description of the outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Ok => "OK: everything is OK.",
            Self::MayIncreaseGear => "OK: you may increase the gear.",
            Self::MayDecreaseGear => "OK: you may decrease the gear.",
            Self::MustIncreaseGear => "Cannot increase speed, increase gear first.",
            Self::MustDecreaseGear => "Cannot decrease speed, decrease gear first.",
            Self::MustIncreaseSpeed => "Cannot increase gear, increase speed first.",
            Self::MustDecreaseSpeed => "Cannot decrease gear, decrease speed first.",
            Self::MaxSpeedReached => "Cannot increase speed. Reached maximum speed.",
            Self::MinSpeedReached => "Cannot decrease speed. Reached minimum speed.",
            Self::MaxGearReached => "Cannot increase gear. Reached maximum gear.",
            Self::MinGearReached => "Cannot decrease gear. Reached minimum gear.",
        }
    }

    /// Check if the status reports a refused operation.
    ///
    /// A rejected operation never changes speed or gear.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            Self::Ok | Self::MayIncreaseGear | Self::MayDecreaseGear
        )
    }

    /// Check if the status is an accepted change that suggests a shift.
    pub fn is_advisory(&self) -> bool {
        matches!(self, Self::MayIncreaseGear | Self::MayDecreaseGear)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
