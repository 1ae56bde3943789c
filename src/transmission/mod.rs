//! Manual transmission state machines.
//!
//! A transmission tracks a speed and a gear. Drivers change one or the other
//! a step at a time; every attempt is checked against the gear table and
//! leaves a [`Status`] describing what happened. Attempts never fail with an
//! error: an out-of-range step is refused, speed and gear stay put, and the
//! status says what to do first.

mod regular;

pub use regular::RegularTransmission;

use crate::core::{Snapshot, Status};

/// Operations a driver can perform on a manual transmission.
///
/// Each operation returns the transmission so calls can be chained:
///
/// ```rust
/// use gearshift::transmission::{ManualTransmission, RegularTransmission};
/// use gearshift::core::Status;
///
/// let mut car = RegularTransmission::new([0, 10, 5, 20, 15, 30, 25, 40, 35, 50]).unwrap();
///
/// car.increase_speed().increase_speed().increase_speed();
/// assert_eq!(car.speed(), 3);
///
/// // 3 is below the second gear's floor of 5
/// car.increase_gear();
/// assert_eq!(car.gear(), 1);
/// assert_eq!(car.status(), Status::MustIncreaseSpeed);
/// ```
pub trait ManualTransmission {
    /// Outcome of the last attempted operation.
    fn status(&self) -> Status;

    /// Current speed.
    fn speed(&self) -> u32;

    /// Current gear, starting at 1.
    fn gear(&self) -> usize;

    /// Read status, speed and gear at once.
    fn query(&self) -> Snapshot {
        Snapshot::new(self.status(), self.speed(), self.gear())
    }

    /// Raise the speed by one without changing gear.
    fn increase_speed(&mut self) -> &mut Self;

    /// Lower the speed by one without changing gear.
    fn decrease_speed(&mut self) -> &mut Self;

    /// Shift up one gear without changing speed.
    fn increase_gear(&mut self) -> &mut Self;

    /// Shift down one gear without changing speed.
    fn decrease_gear(&mut self) -> &mut Self;
}
