//! Gear-table driven manual transmission.

use super::ManualTransmission;
use crate::config::{ConfigurationError, TransmissionConfig};
use crate::core::{
    ranges_from_bounds, GearRange, Operation, ShiftHistory, ShiftRecord, Snapshot, Status,
};
use crate::validation::check_ranges;
use tracing::{debug, warn};

/// Manual transmission whose gears each accept an inclusive speed range.
///
/// The gear table is validated once at construction and never changes.
/// The transmission starts stopped in first gear with status `Ok`.
///
/// # Example
///
/// ```rust
/// use gearshift::core::Status;
/// use gearshift::transmission::{ManualTransmission, RegularTransmission};
///
/// let mut car = RegularTransmission::new([0, 10, 5, 20, 15, 30, 25, 40, 35, 50]).unwrap();
///
/// for _ in 0..10 {
///     car.increase_speed();
/// }
/// assert_eq!(car.status(), Status::MayIncreaseGear);
///
/// car.increase_speed();
/// assert_eq!(car.status(), Status::MustIncreaseGear);
/// assert_eq!(car.speed(), 10);
///
/// car.increase_gear().increase_speed();
/// assert_eq!((car.speed(), car.gear()), (11, 2));
/// ```
#[derive(Clone, Debug)]
pub struct RegularTransmission {
    ranges: Vec<GearRange>,
    speed: u32,
    gear: usize,
    status: Status,
    history: ShiftHistory,
}

impl RegularTransmission {
    /// Build a five-gear transmission from flat bounds `(l1, h1, ..., l5, h5)`.
    pub fn new(bounds: [u32; 10]) -> Result<Self, ConfigurationError> {
        Self::from_ranges(ranges_from_bounds(bounds))
    }

    /// Build a transmission with one gear per range, gear 1 first.
    pub fn from_ranges(ranges: Vec<GearRange>) -> Result<Self, ConfigurationError> {
        Self::build(ranges, ShiftHistory::new())
    }

    pub fn from_config(config: &TransmissionConfig) -> Result<Self, ConfigurationError> {
        Self::build(
            config.gears.clone(),
            ShiftHistory::with_capacity(config.history_capacity),
        )
    }

    fn build(ranges: Vec<GearRange>, history: ShiftHistory) -> Result<Self, ConfigurationError> {
        check_ranges(&ranges)?;

        let transmission = Self {
            ranges,
            speed: 0,
            gear: 1,
            status: Status::Ok,
            history,
        };
        debug!(
            gears = transmission.gear_count(),
            top_speed = transmission.top_speed(),
            "transmission constructed"
        );
        Ok(transmission)
    }

    pub fn ranges(&self) -> &[GearRange] {
        &self.ranges
    }

    pub fn gear_count(&self) -> usize {
        self.ranges.len()
    }

    /// Ceiling of the top gear.
    pub fn top_speed(&self) -> u32 {
        self.ranges.last().map_or(0, |range| range.high)
    }

    /// Speed range of `gear`, or `None` outside `1..=gear_count()`.
    pub fn range_of(&self, gear: usize) -> Option<GearRange> {
        self.ranges.get(gear.checked_sub(1)?).copied()
    }

    /// Attempts made so far, oldest first.
    pub fn history(&self) -> &ShiftHistory {
        &self.history
    }

    // `gear` is always in 1..=gear_count() here.
    fn range(&self, gear: usize) -> GearRange {
        self.ranges[gear - 1]
    }

    /// Check whether `speed` lies where gears `lower` and `upper` overlap:
    /// at or above `upper`'s floor and at or below `lower`'s ceiling.
    fn in_overlap(&self, lower: usize, upper: usize, speed: u32) -> bool {
        match (self.range_of(lower), self.range_of(upper)) {
            (Some(lower), Some(upper)) => upper.low <= speed && speed <= lower.high,
            _ => false,
        }
    }

    fn accept(
        &mut self,
        operation: Operation,
        speed: u32,
        gear: usize,
        status: Status,
    ) -> &mut Self {
        let from = self.query();
        self.speed = speed;
        self.gear = gear;
        self.status = status;
        self.record(operation, from)
    }

    fn reject(&mut self, operation: Operation, status: Status) -> &mut Self {
        let from = self.query();
        self.status = status;
        self.record(operation, from)
    }

    fn record(&mut self, operation: Operation, from: Snapshot) -> &mut Self {
        let to = self.query();
        if to.status.is_rejection() {
            debug!(
                operation = operation.name(),
                speed = to.speed,
                gear = to.gear,
                status = to.status.code(),
                "transmission step refused"
            );
        } else {
            debug!(
                operation = operation.name(),
                speed = to.speed,
                gear = to.gear,
                status = to.status.code(),
                "transmission step applied"
            );
        }
        self.history = self.history.record(ShiftRecord::new(operation, from, to));
        self
    }
}

impl ManualTransmission for RegularTransmission {
    fn status(&self) -> Status {
        self.status
    }

    fn speed(&self) -> u32 {
        self.speed
    }

    fn gear(&self) -> usize {
        self.gear
    }

    fn increase_speed(&mut self) -> &mut Self {
        let current = self.range(self.gear);

        // Reachable only after shifting up into a gear with a lower ceiling.
        if self.speed > current.high {
            warn!(
                speed = self.speed,
                gear = self.gear,
                high = current.high,
                "speed above gear ceiling; increase ignored"
            );
            return self;
        }

        let Some(candidate) = self
            .speed
            .checked_add(1)
            .filter(|speed| *speed <= current.high)
        else {
            let status = if self.gear == self.gear_count() {
                Status::MaxSpeedReached
            } else {
                Status::MustIncreaseGear
            };
            return self.reject(Operation::IncreaseSpeed, status);
        };

        let status = if self.in_overlap(self.gear, self.gear + 1, candidate) {
            Status::MayIncreaseGear
        } else {
            Status::Ok
        };
        self.accept(Operation::IncreaseSpeed, candidate, self.gear, status)
    }

    fn decrease_speed(&mut self) -> &mut Self {
        let current = self.range(self.gear);

        // Reachable only after shifting down into a gear with a higher floor.
        if self.speed < current.low {
            warn!(
                speed = self.speed,
                gear = self.gear,
                low = current.low,
                "speed below gear floor; decrease ignored"
            );
            self.status = Status::Ok;
            return self;
        }

        let candidate = match self.speed.checked_sub(1) {
            Some(speed) if speed >= current.low => speed,
            _ if self.gear == 1 => {
                return self.reject(Operation::DecreaseSpeed, Status::MinSpeedReached)
            }
            _ => return self.reject(Operation::DecreaseSpeed, Status::MustDecreaseGear),
        };

        let status = if self.gear > 1 && self.in_overlap(self.gear - 1, self.gear, candidate) {
            Status::MayDecreaseGear
        } else {
            Status::Ok
        };
        self.accept(Operation::DecreaseSpeed, candidate, self.gear, status)
    }

    fn increase_gear(&mut self) -> &mut Self {
        let next = self.gear + 1;

        match self.range_of(next) {
            None => self.reject(Operation::IncreaseGear, Status::MaxGearReached),
            Some(range) if self.speed < range.low => {
                self.reject(Operation::IncreaseGear, Status::MustIncreaseSpeed)
            }
            Some(_) => self.accept(Operation::IncreaseGear, self.speed, next, Status::Ok),
        }
    }

    fn decrease_gear(&mut self) -> &mut Self {
        let previous = self.gear - 1;

        match self.range_of(previous) {
            None => self.reject(Operation::DecreaseGear, Status::MinGearReached),
            Some(range) if self.speed > range.high => {
                self.reject(Operation::DecreaseGear, Status::MustDecreaseSpeed)
            }
            Some(_) => self.accept(Operation::DecreaseGear, self.speed, previous, Status::Ok),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RangeViolation;

    const STANDARD: [u32; 10] = [0, 10, 5, 20, 15, 30, 25, 40, 35, 50];

    fn standard() -> RegularTransmission {
        RegularTransmission::new(STANDARD).unwrap()
    }

    fn drive(car: &mut RegularTransmission, steps: i32) {
        for _ in 0..steps.unsigned_abs() {
            if steps > 0 {
                car.increase_speed();
            } else {
                car.decrease_speed();
            }
        }
    }

    #[test]
    fn new_transmission_starts_stopped_in_first_gear() {
        let car = standard();

        assert_eq!(car.query(), Snapshot::new(Status::Ok, 0, 1));
        assert_eq!(car.gear_count(), 5);
        assert_eq!(car.top_speed(), 50);
        assert!(car.history().is_empty());
    }

    #[test]
    fn invalid_table_fails_construction() {
        let result = RegularTransmission::new([5, 10, 15, 20, 25, 30, 35, 40, 45, 50]);

        let err = result.unwrap_err();
        assert!(matches!(
            err.violations()[0],
            RangeViolation::FirstGearNotAtZero { low: 5 }
        ));
    }

    #[test]
    fn range_of_is_one_based() {
        let car = standard();

        assert_eq!(car.range_of(0), None);
        assert_eq!(car.range_of(1), Some(GearRange::new(0, 10)));
        assert_eq!(car.range_of(5), Some(GearRange::new(35, 50)));
        assert_eq!(car.range_of(6), None);
    }

    #[test]
    fn overlap_compares_adjacent_gears_only() {
        let car = standard();

        assert!(car.in_overlap(1, 2, 5));
        assert!(car.in_overlap(1, 2, 10));
        assert!(!car.in_overlap(1, 2, 4));
        assert!(!car.in_overlap(1, 2, 11));
        assert!(car.in_overlap(4, 5, 35));
        assert!(!car.in_overlap(5, 6, 45));
        assert!(!car.in_overlap(0, 1, 0));
    }

    #[test]
    fn increase_speed_inside_gear_is_ok() {
        let mut car = standard();
        car.increase_speed().increase_speed();

        assert_eq!(car.query(), Snapshot::new(Status::Ok, 2, 1));
    }

    #[test]
    fn increase_speed_into_overlap_suggests_upshift() {
        let mut car = standard();
        drive(&mut car, 5);

        assert_eq!(car.query(), Snapshot::new(Status::MayIncreaseGear, 5, 1));
    }

    #[test]
    fn increase_speed_past_ceiling_requires_upshift() {
        let mut car = standard();
        drive(&mut car, 16);

        assert_eq!(car.query(), Snapshot::new(Status::MustIncreaseGear, 10, 1));
    }

    #[test]
    fn increase_speed_in_top_gear_stops_at_top_speed() {
        let mut car = standard();
        for _ in 0..4 {
            drive(&mut car, 10);
            car.increase_gear();
        }
        drive(&mut car, 20);

        assert_eq!(car.query(), Snapshot::new(Status::MaxSpeedReached, 50, 5));
    }

    #[test]
    fn decrease_speed_at_rest_reports_minimum() {
        let mut car = standard();
        car.decrease_speed();

        assert_eq!(car.query(), Snapshot::new(Status::MinSpeedReached, 0, 1));
    }

    #[test]
    fn decrease_speed_below_floor_requires_downshift() {
        let mut car = standard();
        drive(&mut car, 10);
        car.increase_gear();
        drive(&mut car, -5);
        assert_eq!(car.query(), Snapshot::new(Status::MayDecreaseGear, 5, 2));

        car.decrease_speed();
        assert_eq!(car.query(), Snapshot::new(Status::MustDecreaseGear, 5, 2));
    }

    #[test]
    fn decrease_speed_into_overlap_suggests_downshift() {
        let mut car = standard();
        drive(&mut car, 10);
        car.increase_gear();
        drive(&mut car, 4);
        assert_eq!(car.query(), Snapshot::new(Status::Ok, 14, 2));

        drive(&mut car, -3);
        assert_eq!(car.query(), Snapshot::new(Status::Ok, 11, 2));

        car.decrease_speed();
        assert_eq!(car.query(), Snapshot::new(Status::MayDecreaseGear, 10, 2));
    }

    #[test]
    fn increase_gear_requires_next_floor() {
        let mut car = standard();
        drive(&mut car, 4);
        car.increase_gear();
        assert_eq!(car.query(), Snapshot::new(Status::MustIncreaseSpeed, 4, 1));

        car.increase_speed().increase_gear();
        assert_eq!(car.query(), Snapshot::new(Status::Ok, 5, 2));
    }

    #[test]
    fn increase_gear_in_top_gear_is_refused() {
        let mut car = standard();
        for _ in 0..4 {
            drive(&mut car, 10);
            car.increase_gear();
        }
        assert_eq!(car.gear(), 5);

        car.increase_gear();
        assert_eq!(car.query(), Snapshot::new(Status::MaxGearReached, 40, 5));
    }

    #[test]
    fn decrease_gear_in_first_gear_is_refused() {
        let mut car = standard();
        car.decrease_gear();

        assert_eq!(car.query(), Snapshot::new(Status::MinGearReached, 0, 1));
    }

    #[test]
    fn decrease_gear_requires_previous_ceiling() {
        let mut car = standard();
        drive(&mut car, 10);
        car.increase_gear();
        drive(&mut car, 1);

        car.decrease_gear();
        assert_eq!(car.query(), Snapshot::new(Status::MustDecreaseSpeed, 11, 2));

        car.decrease_speed().decrease_gear();
        assert_eq!(car.query(), Snapshot::new(Status::Ok, 10, 1));
    }

    #[test]
    fn history_records_every_decided_attempt() {
        let mut car = standard();
        car.decrease_speed().increase_speed().increase_gear();

        let history = car.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history.records()[0].operation, Operation::DecreaseSpeed);
        assert!(history.records()[0].was_rejected());
        assert_eq!(history.records()[1].to, Snapshot::new(Status::Ok, 1, 1));
        assert_eq!(history.records()[2].status(), Status::MustIncreaseSpeed);
        assert_eq!(history.path(), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn config_sets_history_capacity() {
        let config = TransmissionConfig::five_speed(STANDARD).with_history_capacity(2);
        let mut car = RegularTransmission::from_config(&config).unwrap();

        drive(&mut car, 5);

        assert_eq!(car.history().len(), 2);
        assert_eq!(car.history().capacity(), 2);
    }

    #[test]
    fn smaller_tables_are_supported() {
        let mut car =
            RegularTransmission::from_ranges(vec![GearRange::new(0, 3), GearRange::new(2, 6)])
                .unwrap();

        drive(&mut car, 3);
        car.increase_gear();
        drive(&mut car, 10);
        assert_eq!(car.query(), Snapshot::new(Status::MaxSpeedReached, 6, 2));

        car.increase_gear();
        assert_eq!(car.status(), Status::MaxGearReached);
    }

    #[test]
    fn single_gear_table_never_shifts() {
        let mut car = RegularTransmission::from_ranges(vec![GearRange::new(0, 2)]).unwrap();

        drive(&mut car, 2);
        assert_eq!(car.query(), Snapshot::new(Status::Ok, 2, 1));

        car.increase_speed();
        assert_eq!(car.status(), Status::MaxSpeedReached);

        car.increase_gear();
        assert_eq!(car.status(), Status::MaxGearReached);
        car.decrease_gear();
        assert_eq!(car.status(), Status::MinGearReached);
    }

    // Safety net: an upshift may land above the new gear's ceiling when that
    // ceiling is lower than the previous one.
    #[test]
    fn increase_speed_above_ceiling_is_ignored() {
        let mut car = RegularTransmission::from_ranges(vec![
            GearRange::new(0, 30),
            GearRange::new(5, 20),
            GearRange::new(15, 40),
        ])
        .unwrap();
        drive(&mut car, 25);
        car.increase_gear();
        assert_eq!(car.query(), Snapshot::new(Status::Ok, 25, 2));
        let recorded = car.history().len();

        car.increase_speed();

        assert_eq!(car.query(), Snapshot::new(Status::Ok, 25, 2));
        assert_eq!(car.history().len(), recorded);

        car.decrease_speed();
        assert_eq!(car.query(), Snapshot::new(Status::MayDecreaseGear, 24, 2));
    }

    // Safety net: a downshift may land below the new gear's floor when that
    // floor is higher than the previous one.
    #[test]
    fn decrease_speed_below_floor_is_ignored() {
        let mut car = RegularTransmission::from_ranges(vec![
            GearRange::new(0, 10),
            GearRange::new(8, 30),
            GearRange::new(5, 40),
        ])
        .unwrap();
        drive(&mut car, 8);
        car.increase_gear().increase_gear();
        drive(&mut car, -2);
        car.decrease_gear();
        assert_eq!((car.speed(), car.gear()), (6, 2));
        let recorded = car.history().len();

        car.decrease_speed();

        assert_eq!(car.query(), Snapshot::new(Status::Ok, 6, 2));
        assert_eq!(car.history().len(), recorded);
    }
}
