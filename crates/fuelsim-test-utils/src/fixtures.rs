//! Reusable vehicle fixtures.
//!
//! - [`empty_car`]: a car with the reference consumption and no fuel.
//! - [`full_car`]: the same car filled to capacity.
//! - [`full_truck`]: a truck with `trailers` trailers filled to capacity.

use fuelsim_core::Vehicle;
use fuelsim_vehicles::{Car, Truck};

/// Reference car consumption, units per 100 distance.
pub const CAR_CONSUMPTION: f64 = 7.0;

/// Reference per-trailer truck consumption, units per 100 distance.
pub const TRAILER_CONSUMPTION: f64 = 15.0;

pub fn empty_car() -> Car {
    Car::new(CAR_CONSUMPTION).expect("reference consumption is valid")
}

pub fn full_car() -> Car {
    let mut car = empty_car();
    car.fill_up(Car::MAX_FUEL_CAPACITY)
        .expect("filling an empty car succeeds");
    car
}

/// # Panics
///
/// Panics if `trailers` exceeds [`Truck::MAX_TRAILERS`].
pub fn full_truck(trailers: u32) -> Truck {
    let mut truck = Truck::new(TRAILER_CONSUMPTION, trailers).expect("trailer count in range");
    truck
        .fill_up(Truck::MAX_FUEL_CAPACITY)
        .expect("filling an empty truck succeeds");
    truck
}
