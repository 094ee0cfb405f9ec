//! Core types and traits for the fuelsim vehicle fuel simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by the rest of the workspace: the error
//! taxonomy, the dynamic [`Scalar`] input surface, command and receipt
//! types, and the [`Vehicle`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod traits;
pub mod validate;
pub mod value;

pub use command::{Command, CommandPayload, Receipt};
pub use error::{ErrorKind, FuelError, RejectReason};
pub use traits::{apply_fuel_command, Vehicle, VehicleKind};
pub use value::Scalar;
