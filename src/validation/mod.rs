//! Validation of gear tables.
//!
//! Gear tables are checked once, when a transmission is built. The rules use
//! Stillwater's `Validation` type so that a bad table reports every broken
//! rule in one pass instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use gearshift::core::ranges_from_bounds;
//! use gearshift::validation::{check_ranges, RangeViolation};
//!
//! let ranges = ranges_from_bounds([0, 10, 5, 20, 15, 30, 25, 40, 35, 50]);
//! assert!(check_ranges(&ranges).is_ok());
//!
//! let ranges = ranges_from_bounds([0, 5, 15, 20, 15, 30, 25, 40, 35, 50]);
//! let violations = check_ranges(&ranges).unwrap_err();
//! assert!(matches!(violations[0], RangeViolation::GapBetweenGears { gear: 1, .. }));
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check_ranges, validate_ranges, RangeValidation};
pub use violations::RangeViolation;
