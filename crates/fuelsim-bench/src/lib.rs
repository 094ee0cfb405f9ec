//! Benchmark profiles for the fuelsim vehicle simulation.
//!
//! Provides pre-built garage configurations and command batches:
//!
//! - [`fleet_profile`]: alternating cars and trucks with full tanks
//! - [`commute_batch`]: a deterministic mix of fills, drives, and trailer changes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fuelsim_core::Command;
use fuelsim_engine::{GarageConfig, VehicleConfig, VehicleSpec};

/// Name of the `i`-th vehicle in [`fleet_profile`].
pub fn vehicle_name(i: usize) -> String {
    format!("v{i:04}")
}

/// Build a garage of `size` vehicles, alternating car and truck.
///
/// Trucks cycle through 0 to 4 trailers. Every tank starts full (initial fuel clamps to capacity).
pub fn fleet_profile(size: usize) -> GarageConfig {
    let vehicles = (0..size)
        .map(|i| {
            let config = if i % 2 == 0 {
                VehicleConfig::Car {
                    consumption: 5.0 + (i % 7) as f64,
                }
            } else {
                VehicleConfig::Truck {
                    trailer_consumption: 15.0,
                    trailer_count: (i % 5) as u32,
                }
            };
            VehicleSpec::new(vehicle_name(i), config).with_initial_fuel(600.0)
        })
        .collect();
    GarageConfig {
        vehicles,
        max_batch: usize::MAX,
    }
}

/// Build `len` commands spread over a fleet of `fleet_size` vehicles.
///
/// Roughly one in eight commands is rejected (trailer change on a car,
/// or a drive too long for the tank), so the rejection path is exercised.
pub fn commute_batch(fleet_size: usize, len: usize) -> Vec<Command> {
    (0..len)
        .map(|i| {
            let name = vehicle_name(i % fleet_size);
            match i % 8 {
                0 | 3 => Command::fill_up(name, 20.0),
                5 => Command::set_trailer_count(name, (i % 5) as i64),
                7 => Command::drive(name, 5_000.0),
                _ => Command::drive(name, 12.5),
            }
        })
        .collect()
}
