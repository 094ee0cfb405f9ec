//! The core [`Vehicle`] trait.

use std::fmt;

use crate::command::CommandPayload;
use crate::error::FuelError;
use crate::validate;

/// Which concrete vehicle variant an implementation models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    /// A passenger car with a fixed consumption rate.
    Car,
    /// A truck whose consumption scales with attached trailers.
    Truck,
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => write!(f, "car"),
            Self::Truck => write!(f, "truck"),
        }
    }
}

/// A vehicle with a bounded fuel tank.
///
/// Implementations own their fuel state exclusively. Every mutating
/// operation validates first and mutates last, so an `Err` return
/// guarantees the vehicle is unchanged.
///
/// # Object Safety
///
/// The trait is used as `Box<dyn Vehicle>` by the engine. `Send` is
/// required so a garage of vehicles can be moved across threads.
pub trait Vehicle: Send + fmt::Debug {
    /// The concrete variant.
    fn kind(&self) -> VehicleKind;

    /// Maximum fuel the tank can hold.
    fn capacity(&self) -> f64;

    /// Effective fuel burned per 100 distance units.
    fn consumption(&self) -> f64;

    /// Fuel currently in the tank. No side effects.
    fn remaining_fuel(&self) -> f64;

    /// Add fuel, clamping the level at [`capacity()`](Vehicle::capacity).
    ///
    /// Rejects non-positive or non-finite amounts.
    fn fill_up(&mut self, liters: f64) -> Result<(), FuelError>;

    /// Burn the fuel needed to cover `distance`.
    ///
    /// Rejects negative or non-finite distances, and fails with
    /// [`FuelError::InsufficientFuel`] when the tank cannot cover the trip.
    fn drive(&mut self, distance: f64) -> Result<(), FuelError>;

    /// Fuel a drive of `distance` would burn at the current consumption.
    ///
    /// Validates `distance` exactly like [`drive`](Vehicle::drive) but
    /// never touches the tank.
    fn fuel_needed(&self, distance: f64) -> Result<f64, FuelError> {
        let distance = validate::non_negative("distance", distance)?;
        Ok(self.consumption() * distance / 100.0)
    }

    /// Apply a dynamically-typed command.
    ///
    /// The default handles fill and drive and rejects everything else as
    /// unsupported. Vehicles with extra operations override this and fall
    /// back to [`apply_fuel_command`].
    fn apply(&mut self, payload: &CommandPayload) -> Result<(), FuelError> {
        apply_fuel_command(self, payload)
    }
}

/// Dispatch the fill and drive commands common to every vehicle.
///
/// Operand kinds are checked before any range check, so a boolean
/// distance is a type error even though `-1` would be a value error.
pub fn apply_fuel_command<V: Vehicle + ?Sized>(
    vehicle: &mut V,
    payload: &CommandPayload,
) -> Result<(), FuelError> {
    match payload {
        CommandPayload::FillUp { amount } => vehicle.fill_up(amount.as_number("fuel amount")?),
        CommandPayload::Drive { distance } => vehicle.drive(distance.as_number("distance")?),
        other => Err(FuelError::UnsupportedCommand {
            vehicle: vehicle.kind(),
            command: other.name(),
        }),
    }
}
