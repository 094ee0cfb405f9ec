//! Vehicle fuel models for fuelsim.
//!
//! This crate provides the concrete [`Vehicle`](fuelsim_core::Vehicle)
//! implementations and the bounded [`FuelTank`] they share.
//!
//! # Vehicles
//!
//! - [`Car`]: fixed consumption, 100-unit tank
//! - [`Truck`]: per-trailer consumption scaled by 0 to 4 trailers, 600-unit tank

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod car;
pub mod tank;
pub mod truck;

#[cfg(test)]
pub(crate) mod compliance;

pub use car::Car;
pub use tank::FuelTank;
pub use truck::Truck;
