//! A named collection of vehicles with batched command dispatch.
//!
//! [`Garage`] owns its vehicles exclusively. All mutation goes through
//! `&mut self`, so a garage is [`Send`] but never shared; commands in a
//! batch are applied strictly in submission order.

use indexmap::IndexMap;

use fuelsim_core::{Command, Receipt, RejectReason, Vehicle};

use crate::config::{ConfigError, GarageConfig};
use crate::metrics::GarageMetrics;

// Compile-time assertion: Garage is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Garage>();
    }
};

/// Named vehicles in registration order.
///
/// # Example
///
/// ```
/// use fuelsim_core::Command;
/// use fuelsim_engine::{Garage, GarageConfig, VehicleConfig, VehicleSpec};
///
/// let config = GarageConfig {
///     vehicles: vec![
///         VehicleSpec::new("sedan", VehicleConfig::Car { consumption: 7.0 }),
///         VehicleSpec::new(
///             "hauler",
///             VehicleConfig::Truck { trailer_consumption: 15.0, trailer_count: 2 },
///         ),
///     ],
///     ..Default::default()
/// };
/// let mut garage = Garage::new(config).unwrap();
///
/// let receipts = garage.submit(vec![
///     Command::fill_up("sedan", 100),
///     Command::drive("sedan", 200),
///     Command::set_trailer_count("sedan", 1),
/// ]);
/// assert!(receipts[0].accepted && receipts[1].accepted);
/// assert!(!receipts[2].accepted);
/// assert_eq!(garage.metrics().commands_rejected, 1);
/// ```
#[derive(Debug)]
pub struct Garage {
    vehicles: IndexMap<String, Box<dyn Vehicle>>,
    max_batch: usize,
    metrics: GarageMetrics,
}

impl Garage {
    /// Validate `config` and build every vehicle it describes.
    pub fn new(config: GarageConfig) -> Result<Self, ConfigError> {
        let vehicles = config.build_vehicles()?;
        log::debug!("garage built with {} vehicles", vehicles.len());
        Ok(Self {
            vehicles,
            max_batch: config.max_batch,
            metrics: GarageMetrics::default(),
        })
    }

    /// A garage with no vehicles.
    ///
    /// Returns [`ConfigError::BatchLimitZero`] if `max_batch == 0`.
    pub fn empty(max_batch: usize) -> Result<Self, ConfigError> {
        if max_batch == 0 {
            return Err(ConfigError::BatchLimitZero);
        }
        Ok(Self {
            vehicles: IndexMap::new(),
            max_batch,
            metrics: GarageMetrics::default(),
        })
    }

    /// Register an already-built vehicle under `name`.
    ///
    /// Rejects empty and duplicate names; the garage is unchanged on error.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        vehicle: Box<dyn Vehicle>,
    ) -> Result<(), ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyName {
                index: self.vehicles.len(),
            });
        }
        if self.vehicles.contains_key(&name) {
            return Err(ConfigError::DuplicateName { name });
        }
        self.vehicles.insert(name, vehicle);
        Ok(())
    }

    /// Look up a vehicle by name.
    pub fn vehicle(&self, name: &str) -> Option<&dyn Vehicle> {
        self.vehicles.get(name).map(|v| &**v)
    }

    /// Look up a vehicle by name for direct mutation.
    pub fn vehicle_mut(&mut self, name: &str) -> Option<&mut (dyn Vehicle + 'static)> {
        self.vehicles.get_mut(name).map(|v| &mut **v)
    }

    /// Vehicle names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vehicles.keys().map(String::as_str)
    }

    /// Number of registered vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Whether no vehicles are registered.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Maximum commands applied per [`submit`](Self::submit).
    pub fn max_batch(&self) -> usize {
        self.max_batch
    }

    /// Sum of every vehicle's remaining fuel.
    pub fn total_remaining_fuel(&self) -> f64 {
        self.vehicles.values().map(|v| v.remaining_fuel()).sum()
    }

    /// Cumulative metrics since construction.
    pub fn metrics(&self) -> &GarageMetrics {
        &self.metrics
    }

    /// Apply a batch of commands in order.
    ///
    /// Returns one [`Receipt`] per command, in input order. Commands past
    /// [`max_batch`](Self::max_batch) are rejected with
    /// [`RejectReason::BatchFull`] without being applied. A rejected
    /// command never changes any vehicle and does not stop the batch.
    pub fn submit(&mut self, commands: Vec<Command>) -> Vec<Receipt> {
        let mut receipts = Vec::with_capacity(commands.len());
        for (index, command) in commands.into_iter().enumerate() {
            let receipt = if index < self.max_batch {
                self.apply_one(index, &command)
            } else {
                self.reject(
                    index,
                    &command,
                    RejectReason::BatchFull {
                        limit: self.max_batch,
                    },
                )
            };
            receipts.push(receipt);
        }
        receipts
    }

    fn apply_one(&mut self, index: usize, command: &Command) -> Receipt {
        let Some(vehicle) = self.vehicles.get_mut(&command.vehicle) else {
            let name = command.vehicle.clone();
            return self.reject(index, command, RejectReason::UnknownVehicle { name });
        };
        let before = vehicle.remaining_fuel();
        match vehicle.apply(&command.payload) {
            Ok(()) => {
                let after = vehicle.remaining_fuel();
                self.metrics
                    .record_applied(&command.payload, before, after);
                log::debug!(
                    "command {index} {} on '{}' applied, fuel {before} -> {after}",
                    command.payload.name(),
                    command.vehicle
                );
                Receipt::applied(index, after)
            }
            Err(e) => self.reject(index, command, RejectReason::Rejected(e)),
        }
    }

    fn reject(&mut self, index: usize, command: &Command, reason: RejectReason) -> Receipt {
        log::warn!(
            "command {index} {} on '{}' rejected: {reason}",
            command.payload.name(),
            command.vehicle
        );
        self.metrics.record_rejected();
        let fuel = self.vehicle(&command.vehicle).map(|v| v.remaining_fuel());
        Receipt::rejected(index, reason, fuel)
    }
}
