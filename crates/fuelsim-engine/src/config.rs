//! Garage configuration, validation, and error types.
//!
//! [`GarageConfig`] is the builder-input for constructing a [`Garage`](crate::Garage).
//! [`validate()`](GarageConfig::validate) checks structural invariants and
//! every vehicle's parameters; the garage constructor runs the same
//! checks and keeps the vehicles they build.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use indexmap::IndexMap;

use fuelsim_core::validate;
use fuelsim_core::{FuelError, Vehicle, VehicleKind};
use fuelsim_vehicles::{Car, Truck};

// ── VehicleConfig ──────────────────────────────────────────────────

/// Construction parameters for one vehicle.
#[derive(Clone, Debug, PartialEq)]
pub enum VehicleConfig {
    /// A [`Car`].
    Car {
        /// Fuel burned per 100 distance units.
        consumption: f64,
    },
    /// A [`Truck`].
    Truck {
        /// Fuel burned per 100 distance units by each trailer.
        trailer_consumption: f64,
        /// Initial trailer count, `0..=4`.
        trailer_count: u32,
    },
}

impl VehicleConfig {
    /// The variant this config builds.
    pub fn kind(&self) -> VehicleKind {
        match self {
            Self::Car { .. } => VehicleKind::Car,
            Self::Truck { .. } => VehicleKind::Truck,
        }
    }

    /// Construct an empty vehicle.
    pub fn build(&self) -> Result<Box<dyn Vehicle>, FuelError> {
        let vehicle: Box<dyn Vehicle> = match *self {
            Self::Car { consumption } => Box::new(Car::new(consumption)?),
            Self::Truck {
                trailer_consumption,
                trailer_count,
            } => Box::new(Truck::new(trailer_consumption, trailer_count)?),
        };
        Ok(vehicle)
    }
}

// ── VehicleSpec ────────────────────────────────────────────────────

/// A named vehicle and its starting fuel.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleSpec {
    /// Unique name within the garage.
    pub name: String,
    /// Construction parameters.
    pub config: VehicleConfig,
    /// Fuel in the tank at construction. Clamped to capacity. Default: 0.
    pub initial_fuel: f64,
}

impl VehicleSpec {
    /// A spec with an empty tank.
    pub fn new(name: impl Into<String>, config: VehicleConfig) -> Self {
        Self {
            name: name.into(),
            config,
            initial_fuel: 0.0,
        }
    }

    /// Set the starting fuel.
    pub fn with_initial_fuel(mut self, fuel: f64) -> Self {
        self.initial_fuel = fuel;
        self
    }

    /// Construct the vehicle and pour in the initial fuel.
    pub fn build(&self) -> Result<Box<dyn Vehicle>, ConfigError> {
        let invalid = |source| ConfigError::InvalidVehicle {
            name: self.name.clone(),
            source,
        };
        let initial =
            validate::non_negative("initial fuel", self.initial_fuel).map_err(invalid)?;
        let mut vehicle = self.config.build().map_err(invalid)?;
        if initial > 0.0 {
            vehicle.fill_up(initial).map_err(invalid)?;
        }
        Ok(vehicle)
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GarageConfig::validate()`] or when
/// registering vehicles on a [`Garage`](crate::Garage).
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// No vehicles configured.
    NoVehicles,
    /// A vehicle has an empty name.
    EmptyName {
        /// Position of the vehicle: its index in
        /// [`GarageConfig::vehicles`], or the number of vehicles already
        /// registered when inserting into a [`Garage`](crate::Garage).
        index: usize,
    },
    /// Two vehicles share a name.
    DuplicateName {
        /// The repeated name.
        name: String,
    },
    /// `max_batch` is zero.
    BatchLimitZero,
    /// A vehicle's parameters were rejected.
    InvalidVehicle {
        /// Name of the vehicle.
        name: String,
        /// Why it was rejected.
        source: FuelError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoVehicles => write!(f, "no vehicles configured"),
            Self::EmptyName { index } => write!(f, "vehicle at index {index} has an empty name"),
            Self::DuplicateName { name } => write!(f, "duplicate vehicle name '{name}'"),
            Self::BatchLimitZero => write!(f, "max_batch must be at least 1"),
            Self::InvalidVehicle { name, source } => {
                write!(f, "invalid vehicle '{name}': {source}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidVehicle { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ── GarageConfig ───────────────────────────────────────────────────

/// Complete configuration for constructing a [`Garage`](crate::Garage).
#[derive(Clone, Debug, PartialEq)]
pub struct GarageConfig {
    /// Vehicles in registration order.
    pub vehicles: Vec<VehicleSpec>,
    /// Maximum commands applied per [`submit`](crate::Garage::submit).
    /// Default: 1024.
    pub max_batch: usize,
}

impl Default for GarageConfig {
    fn default() -> Self {
        Self {
            vehicles: Vec::new(),
            max_batch: 1024,
        }
    }
}

impl GarageConfig {
    /// Validate all structural invariants and vehicle parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_vehicles().map(drop)
    }

    /// Validate, then build every vehicle with its initial fuel, keyed by
    /// name in configuration order.
    pub(crate) fn build_vehicles(
        &self,
    ) -> Result<IndexMap<String, Box<dyn Vehicle>>, ConfigError> {
        // 1. At least one vehicle.
        if self.vehicles.is_empty() {
            return Err(ConfigError::NoVehicles);
        }
        // 2. Batch limit >= 1.
        if self.max_batch == 0 {
            return Err(ConfigError::BatchLimitZero);
        }
        // 3. Names non-empty and unique.
        let mut seen = HashSet::with_capacity(self.vehicles.len());
        for (index, spec) in self.vehicles.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(ConfigError::EmptyName { index });
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(ConfigError::DuplicateName {
                    name: spec.name.clone(),
                });
            }
        }
        // 4. Every vehicle builds.
        let mut vehicles = IndexMap::with_capacity(self.vehicles.len());
        for spec in &self.vehicles {
            vehicles.insert(spec.name.clone(), spec.build()?);
        }
        Ok(vehicles)
    }
}
