//! Truck whose consumption scales with the number of attached trailers.

use fuelsim_core::validate;
use fuelsim_core::{apply_fuel_command, CommandPayload, FuelError, Scalar, Vehicle, VehicleKind};

use crate::tank::FuelTank;

/// A truck hauling between zero and [`MAX_TRAILERS`](Truck::MAX_TRAILERS)
/// trailers.
///
/// Effective consumption is `trailer_consumption * trailer_count`, so a
/// truck with no trailers burns nothing. Changing the trailer count
/// affects subsequent drives only. Starts with an empty 600-unit tank.
///
/// # Examples
///
/// ```
/// use fuelsim_core::Vehicle;
/// use fuelsim_vehicles::Truck;
///
/// let mut truck = Truck::new(15.0, 2).unwrap();
/// assert_eq!(truck.consumption(), 30.0);
///
/// truck.fill_up(600.0).unwrap();
/// truck.drive(100.0).unwrap();
/// assert!((truck.remaining_fuel() - 570.0).abs() < 1e-9);
///
/// truck.set_trailer_count(4).unwrap();
/// assert_eq!(truck.consumption(), 60.0);
/// assert!(truck.set_trailer_count(5).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Truck {
    trailer_consumption: f64,
    trailer_count: u32,
    tank: FuelTank,
}

impl Truck {
    /// Tank capacity for every truck.
    pub const MAX_FUEL_CAPACITY: f64 = 600.0;

    /// Largest number of trailers a truck can haul.
    pub const MAX_TRAILERS: u32 = 4;

    /// Create a truck burning `trailer_consumption` units per 100 distance
    /// units for each of its `trailer_count` trailers.
    ///
    /// Returns an error if `trailer_consumption` is not finite and
    /// positive, or if `trailer_count` exceeds [`MAX_TRAILERS`](Self::MAX_TRAILERS).
    pub fn new(trailer_consumption: f64, trailer_count: u32) -> Result<Self, FuelError> {
        let trailer_consumption = validate::positive("trailer consumption", trailer_consumption)?;
        let trailer_count = validate::trailer_count(i64::from(trailer_count), Self::MAX_TRAILERS)?;
        Ok(Self {
            trailer_consumption,
            trailer_count,
            tank: FuelTank::new(Self::MAX_FUEL_CAPACITY)?,
        })
    }

    /// Create a truck from untyped operands.
    ///
    /// Both operand kinds are checked before either range: the rate must
    /// be a number and the count an integer.
    pub fn from_scalars(
        trailer_consumption: &Scalar,
        trailer_count: &Scalar,
    ) -> Result<Self, FuelError> {
        let rate = trailer_consumption.as_number("trailer consumption")?;
        let count = trailer_count.as_integer("trailer count")?;
        let count = validate::trailer_count(count, Self::MAX_TRAILERS)?;
        Self::new(rate, count)
    }

    /// Fuel burned per 100 distance units by each trailer.
    pub fn trailer_consumption(&self) -> f64 {
        self.trailer_consumption
    }

    /// Number of attached trailers.
    pub fn trailer_count(&self) -> u32 {
        self.trailer_count
    }

    /// Attach or detach trailers.
    ///
    /// Fails with [`FuelError::TrailerCountOutOfRange`] above
    /// [`MAX_TRAILERS`](Self::MAX_TRAILERS), leaving the count unchanged.
    pub fn set_trailer_count(&mut self, count: u32) -> Result<(), FuelError> {
        let count = validate::trailer_count(i64::from(count), Self::MAX_TRAILERS)?;
        log::debug!(
            "truck trailers: {} -> {count}, consumption {}",
            self.trailer_count,
            self.trailer_consumption * f64::from(count)
        );
        self.trailer_count = count;
        Ok(())
    }

    /// The truck's tank.
    pub fn tank(&self) -> &FuelTank {
        &self.tank
    }
}

impl Vehicle for Truck {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Truck
    }

    fn capacity(&self) -> f64 {
        self.tank.capacity()
    }

    fn consumption(&self) -> f64 {
        self.trailer_consumption * f64::from(self.trailer_count)
    }

    fn remaining_fuel(&self) -> f64 {
        self.tank.level()
    }

    fn fill_up(&mut self, liters: f64) -> Result<(), FuelError> {
        let accepted = self.tank.fill(liters)?;
        log::debug!("truck fill_up: +{accepted}, level {}", self.tank.level());
        Ok(())
    }

    fn drive(&mut self, distance: f64) -> Result<(), FuelError> {
        let needed = self.fuel_needed(distance)?;
        self.tank.burn(needed)?;
        log::debug!(
            "truck drive: {distance} units with {} trailers, burned {needed}, level {}",
            self.trailer_count,
            self.tank.level()
        );
        Ok(())
    }

    fn apply(&mut self, payload: &CommandPayload) -> Result<(), FuelError> {
        match payload {
            CommandPayload::SetTrailerCount { count } => {
                let count = count.as_integer("trailer count")?;
                let count = validate::trailer_count(count, Self::MAX_TRAILERS)?;
                self.set_trailer_count(count)
            }
            other => apply_fuel_command(self, other),
        }
    }
}
