//! Garage configuration and batched command dispatch for fuelsim.
//!
//! [`GarageConfig`] describes a set of named vehicles; [`Garage`] builds
//! them and applies [`Command`](fuelsim_core::Command) batches, returning
//! one [`Receipt`](fuelsim_core::Receipt) per command and accumulating
//! [`GarageMetrics`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod garage;
pub mod metrics;

pub use config::{ConfigError, GarageConfig, VehicleConfig, VehicleSpec};
pub use garage::Garage;
pub use metrics::GarageMetrics;
