//! Configuration error types.

use crate::validation::RangeViolation;
use thiserror::Error;

/// Errors that can occur while building a transmission.
///
/// These are construction-time failures only. Once a transmission exists,
/// refused operations are reported through its status instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// The gear table broke one or more structural rules
    #[error("Invalid gear ranges: {}", summarize(.violations))]
    InvalidRanges { violations: Vec<RangeViolation> },

    /// A configuration document could not be read
    #[error("Failed to parse transmission config: {0}")]
    Parse(String),
}

impl ConfigurationError {
    /// Rules broken by the gear table, in rule order.
    ///
    /// Empty for parse failures.
    pub fn violations(&self) -> &[RangeViolation] {
        match self {
            Self::InvalidRanges { violations } => violations,
            Self::Parse(_) => &[],
        }
    }
}

impl From<Vec<RangeViolation>> for ConfigurationError {
    fn from(violations: Vec<RangeViolation>) -> Self {
        Self::InvalidRanges { violations }
    }
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

fn summarize(violations: &[RangeViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
