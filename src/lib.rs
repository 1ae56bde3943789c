//! Gearshift: a manual transmission state machine
//!
//! Gearshift models a manual gearbox as a finite-state machine over a speed
//! and a gear. Each gear accepts an inclusive speed range; adjacent ranges
//! overlap so the driver can shift without changing speed. Every attempted
//! change is validated against the gear table and reported through a
//! [`Status`](crate::core::Status). Refused changes are not errors: speed and gear
//! stay put and the status says what to do first.
//!
//! # Core Concepts
//!
//! - **Gear table**: one [`GearRange`](crate::core::GearRange) per gear, checked
//!   once at construction by [`validation`]
//! - **Transmission**: the [`ManualTransmission`](transmission::ManualTransmission)
//!   trait and its [`RegularTransmission`](transmission::RegularTransmission)
//!   implementation
//! - **History**: an immutable, bounded log of attempted operations
//!
//! # Example
//!
//! ```rust
//! use gearshift::core::Status;
//! use gearshift::transmission::{ManualTransmission, RegularTransmission};
//!
//! let mut car = RegularTransmission::new([0, 10, 5, 20, 15, 30, 25, 40, 35, 50]).unwrap();
//! assert_eq!((car.status(), car.speed(), car.gear()), (Status::Ok, 0, 1));
//!
//! car.decrease_speed();
//! assert_eq!(car.status(), Status::MinSpeedReached);
//!
//! for _ in 0..10 {
//!     car.increase_speed();
//! }
//! car.increase_gear();
//! assert_eq!((car.status(), car.speed(), car.gear()), (Status::Ok, 10, 2));
//! ```

pub mod config;
pub mod core;
pub mod transmission;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigurationError, TransmissionConfig};
pub use crate::core::{GearRange, Snapshot, Status};
pub use transmission::{ManualTransmission, RegularTransmission};
