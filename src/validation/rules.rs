//! Gear table rules evaluated with Validation.

use crate::core::GearRange;
use crate::validation::violations::RangeViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking a gear table.
pub type RangeValidation = Validation<(), NonEmptyVec<RangeViolation>>;

fn check<F>(holds: bool, violation: F) -> RangeValidation
where
    F: FnOnce() -> RangeViolation,
{
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Check every structural rule of a gear table, accumulating ALL violations.
///
/// Rules are evaluated in this order, and violations are reported in it:
/// 1. gear 1 starts at speed 0
/// 2. each gear's ceiling reaches the next gear's floor
/// 3. no gear's ceiling exceeds the top gear's ceiling
/// 4. no range is inverted
///
/// An empty table reports only [`RangeViolation::NoGears`].
///
/// # Example
///
/// ```rust
/// use gearshift::core::GearRange;
/// use gearshift::validation::{validate_ranges, RangeViolation};
/// use stillwater::validation::Validation;
///
/// let ranges = vec![GearRange::new(5, 10), GearRange::new(15, 20)];
///
/// match validate_ranges(&ranges) {
///     Validation::Failure(violations) => {
///         assert_eq!(violations.len(), 2);
///         assert!(violations
///             .iter()
///             .any(|v| matches!(v, RangeViolation::FirstGearNotAtZero { low: 5 })));
///     }
///     Validation::Success(_) => panic!("expected violations"),
/// }
/// ```
pub fn validate_ranges(ranges: &[GearRange]) -> RangeValidation {
    let (Some(first), Some(top)) = (ranges.first(), ranges.last()) else {
        return Validation::fail(RangeViolation::NoGears);
    };

    let mut checks: Vec<RangeValidation> = Vec::new();

    checks.push(check(first.low == 0, || RangeViolation::FirstGearNotAtZero {
        low: first.low,
    }));

    for (index, pair) in ranges.windows(2).enumerate() {
        let (lower, upper) = (pair[0], pair[1]);
        checks.push(check(upper.low <= lower.high, || {
            RangeViolation::GapBetweenGears {
                gear: index + 1,
                high: lower.high,
                next: index + 2,
                next_low: upper.low,
            }
        }));
    }

    for (index, range) in ranges.iter().enumerate() {
        checks.push(check(range.high <= top.high, || {
            RangeViolation::ExceedsTopSpeed {
                gear: index + 1,
                high: range.high,
                top_speed: top.high,
            }
        }));
    }

    for (index, range) in ranges.iter().enumerate() {
        checks.push(check(range.is_ordered(), || RangeViolation::InvertedRange {
            gear: index + 1,
            low: range.low,
            high: range.high,
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Check a gear table and collect the violations in rule order.
pub fn check_ranges(ranges: &[GearRange]) -> Result<(), Vec<RangeViolation>> {
    match validate_ranges(ranges) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(violations) => Err(violations.iter().cloned().collect()),
    }
}
