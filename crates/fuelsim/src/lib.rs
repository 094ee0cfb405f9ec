//! fuelsim: a vehicle fuel-tank simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the fuelsim sub-crates. For most users, adding `fuelsim` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fuelsim::prelude::*;
//!
//! let mut car = Car::new(7.0).unwrap();
//! car.fill_up(100.0).unwrap();
//! car.drive(200.0).unwrap();
//! assert!((car.remaining_fuel() - 86.0).abs() < 1e-9);
//!
//! let mut truck = Truck::new(15.0, 2).unwrap();
//! truck.fill_up(10.0).unwrap();
//! let err = truck.drive(100.0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Value);
//! assert_eq!(truck.remaining_fuel(), 10.0);
//!
//! // Untyped operands: booleans are never numbers.
//! let err = car.apply(&CommandPayload::FillUp { amount: Scalar::Bool(true) }).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Type);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fuelsim-core` | errors, scalars, commands, the `Vehicle` trait |
//! | [`vehicles`] | `fuelsim-vehicles` | `Car`, `Truck`, `FuelTank` |
//! | [`engine`] | `fuelsim-engine` | `GarageConfig`, `Garage`, `GarageMetrics` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`fuelsim-core`).
pub use fuelsim_core as types;

/// Concrete vehicles and the shared tank (`fuelsim-vehicles`).
pub use fuelsim_vehicles as vehicles;

/// Garage configuration and batched dispatch (`fuelsim-engine`).
pub use fuelsim_engine as engine;

/// Common imports for typical fuelsim usage.
///
/// ```rust
/// use fuelsim::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use fuelsim_core::{Command, CommandPayload, Receipt, Scalar, Vehicle, VehicleKind};

    // Errors
    pub use fuelsim_core::{ErrorKind, FuelError, RejectReason};

    // Vehicles
    pub use fuelsim_vehicles::{Car, FuelTank, Truck};

    // Engine
    pub use fuelsim_engine::{
        ConfigError, Garage, GarageConfig, GarageMetrics, VehicleConfig, VehicleSpec,
    };
}
