//! Passenger car with a fixed consumption rate.

use fuelsim_core::validate;
use fuelsim_core::{FuelError, Scalar, Vehicle, VehicleKind};

use crate::tank::FuelTank;

/// A car burning a fixed amount of fuel per 100 distance units.
///
/// Starts with an empty 100-unit tank.
///
/// # Examples
///
/// ```
/// use fuelsim_core::Vehicle;
/// use fuelsim_vehicles::Car;
///
/// let mut car = Car::new(7.0).unwrap();
/// car.fill_up(100.0).unwrap();
/// car.drive(200.0).unwrap();
/// assert!((car.remaining_fuel() - 86.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Car {
    consumption: f64,
    tank: FuelTank,
}

impl Car {
    /// Tank capacity for every car.
    pub const MAX_FUEL_CAPACITY: f64 = 100.0;

    /// Create a car that burns `consumption` units per 100 distance units.
    ///
    /// Returns an error if `consumption` is not finite and positive.
    pub fn new(consumption: f64) -> Result<Self, FuelError> {
        let consumption = validate::positive("consumption", consumption)?;
        Ok(Self {
            consumption,
            tank: FuelTank::new(Self::MAX_FUEL_CAPACITY)?,
        })
    }

    /// Create a car from an untyped consumption operand.
    ///
    /// Non-numeric operands (including booleans) are type errors.
    pub fn from_scalar(consumption: &Scalar) -> Result<Self, FuelError> {
        Self::new(consumption.as_number("consumption")?)
    }

    /// The car's tank.
    pub fn tank(&self) -> &FuelTank {
        &self.tank
    }
}

impl Vehicle for Car {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn capacity(&self) -> f64 {
        self.tank.capacity()
    }

    fn consumption(&self) -> f64 {
        self.consumption
    }

    fn remaining_fuel(&self) -> f64 {
        self.tank.level()
    }

    fn fill_up(&mut self, liters: f64) -> Result<(), FuelError> {
        let accepted = self.tank.fill(liters)?;
        log::debug!("car fill_up: +{accepted}, level {}", self.tank.level());
        Ok(())
    }

    fn drive(&mut self, distance: f64) -> Result<(), FuelError> {
        let needed = self.fuel_needed(distance)?;
        self.tank.burn(needed)?;
        log::debug!(
            "car drive: {distance} units, burned {needed}, level {}",
            self.tank.level()
        );
        Ok(())
    }
}
