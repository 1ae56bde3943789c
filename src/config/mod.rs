//! Construction parameters for transmissions.
//!
//! A [`TransmissionConfig`] carries the gear table and the size of the shift
//! history. It can be assembled in code or read from JSON:
//!
//! ```json
//! {
//!   "gears": [
//!     { "low": 0, "high": 10 },
//!     { "low": 5, "high": 20 }
//!   ],
//!   "history_capacity": 16
//! }
//! ```
//!
//! `history_capacity` is optional and defaults to
//! [`DEFAULT_HISTORY_CAPACITY`].

use crate::core::{ranges_from_bounds, GearRange, DEFAULT_HISTORY_CAPACITY};
use crate::validation::check_ranges;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigurationError;

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

/// Gear table plus history sizing for one transmission.
///
/// # Example
///
/// ```rust
/// use gearshift::config::TransmissionConfig;
///
/// let config = TransmissionConfig::from_json(
///     r#"{ "gears": [ { "low": 0, "high": 10 }, { "low": 5, "high": 20 } ] }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.gear_count(), 2);
/// assert_eq!(config.history_capacity, 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransmissionConfig {
    /// Speed range of each gear, gear 1 first
    pub gears: Vec<GearRange>,

    /// Number of shift records kept
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

impl TransmissionConfig {
    pub fn from_ranges(gears: Vec<GearRange>) -> Self {
        Self {
            gears,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Five-gear table from flat bounds `(l1, h1, ..., l5, h5)`.
    pub fn five_speed(bounds: [u32; 10]) -> Self {
        Self::from_ranges(ranges_from_bounds(bounds))
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Parse a JSON document and validate its gear table.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigurationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the gear table, reporting every broken rule.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_ranges(&self.gears).map_err(ConfigurationError::from)
    }

    pub fn gear_count(&self) -> usize {
        self.gears.len()
    }
}
