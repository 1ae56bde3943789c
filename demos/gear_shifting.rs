//! Gear Shifting
//!
//! This example drives a five-gear transmission from rest to top speed and
//! back, printing the status reported after every refused step.
//!
//! Key concepts:
//! - Building a transmission from a validated gear table
//! - Chaining operations on a mutable handle
//! - Reacting to refused operations through their status
//! - Inspecting the shift history
//!
//! Run with: cargo run --example gear_shifting
//! Set RUST_LOG=gearshift=debug to see every step.

use gearshift::core::Status;
use gearshift::{ManualTransmission, RegularTransmission, TransmissionConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Gear Shifting Example ===\n");

    let config = TransmissionConfig::five_speed([0, 10, 5, 20, 15, 30, 25, 40, 35, 50])
        .with_history_capacity(256);
    let mut car = match RegularTransmission::from_config(&config) {
        Ok(car) => car,
        Err(err) => {
            eprintln!("Could not build transmission: {err}");
            return;
        }
    };

    println!("Accelerating...");
    loop {
        car.increase_speed();
        match car.status() {
            Status::MustIncreaseGear => {
                println!("  {} at {} in gear {}", car.status(), car.speed(), car.gear());
                car.increase_gear();
            }
            Status::MaxSpeedReached => {
                println!("  {} at {}", car.status(), car.speed());
                break;
            }
            _ => {}
        }
    }

    println!("\nBraking...");
    loop {
        car.decrease_speed();
        match car.status() {
            Status::MustDecreaseGear => {
                println!("  {} at {} in gear {}", car.status(), car.speed(), car.gear());
                car.decrease_gear();
            }
            Status::MinSpeedReached => {
                println!("  {}", car.status());
                break;
            }
            _ => {}
        }
    }

    let history = car.history();
    println!("\nAttempts recorded: {}", history.len());
    println!("Refused attempts: {}", history.rejections().count());
    println!("Final reading: {:?}", car.query());

    println!("\n=== Example Complete ===");
}
