//! Test utilities and mock types for fuelsim development.
//!
//! Provides a scriptable [`MockVehicle`] implementing [`Vehicle`] and
//! the fixtures in [`fixtures`] for building vehicles in a known state.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use fuelsim_core::validate;
use fuelsim_core::{CommandPayload, FuelError, Vehicle, VehicleKind};

pub use fixtures::{empty_car, full_car, full_truck, CAR_CONSUMPTION, TRAILER_CONSUMPTION};

/// One recorded call on a [`MockVehicle`].
#[derive(Clone, Debug, PartialEq)]
pub enum MockCall {
    FillUp(f64),
    Drive(f64),
    Apply(&'static str),
}

/// Mock implementation of [`Vehicle`].
///
/// Follows the fill/drive arithmetic of the real vehicles but records
/// every call, and can be told to reject the next operations with a
/// fixed error via [`fail_with`](MockVehicle::fail_with).
#[derive(Debug)]
pub struct MockVehicle {
    kind: VehicleKind,
    capacity: f64,
    consumption: f64,
    fuel: f64,
    failure: Option<FuelError>,
    calls: Vec<MockCall>,
}

impl MockVehicle {
    /// Create an empty mock with the given capacity and consumption.
    pub fn new(kind: VehicleKind, capacity: f64, consumption: f64) -> Self {
        Self {
            kind,
            capacity,
            consumption,
            fuel: 0.0,
            failure: None,
            calls: Vec::new(),
        }
    }

    /// Reject every subsequent fill and drive with `err`.
    pub fn fail_with(mut self, err: FuelError) -> Self {
        self.failure = Some(err);
        self
    }

    /// Start with `fuel` units in the tank, clamped to capacity.
    pub fn with_fuel(mut self, fuel: f64) -> Self {
        self.fuel = fuel.min(self.capacity);
        self
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> &[MockCall] {
        &self.calls
    }

    fn check_failure(&self) -> Result<(), FuelError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl Vehicle for MockVehicle {
    fn kind(&self) -> VehicleKind {
        self.kind
    }

    fn capacity(&self) -> f64 {
        self.capacity
    }

    fn consumption(&self) -> f64 {
        self.consumption
    }

    fn remaining_fuel(&self) -> f64 {
        self.fuel
    }

    fn fill_up(&mut self, liters: f64) -> Result<(), FuelError> {
        self.calls.push(MockCall::FillUp(liters));
        self.check_failure()?;
        let liters = validate::positive("fuel amount", liters)?;
        self.fuel = (self.fuel + liters).min(self.capacity);
        Ok(())
    }

    fn drive(&mut self, distance: f64) -> Result<(), FuelError> {
        self.calls.push(MockCall::Drive(distance));
        self.check_failure()?;
        let needed = self.fuel_needed(distance)?;
        if needed > self.fuel {
            return Err(FuelError::InsufficientFuel {
                needed,
                available: self.fuel,
            });
        }
        self.fuel -= needed;
        Ok(())
    }

    fn apply(&mut self, payload: &CommandPayload) -> Result<(), FuelError> {
        self.calls.push(MockCall::Apply(payload.name()));
        fuelsim_core::apply_fuel_command(self, payload)
    }
}
