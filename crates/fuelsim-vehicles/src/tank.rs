//! Bounded fuel storage shared by every vehicle.

use fuelsim_core::validate;
use fuelsim_core::FuelError;

/// A fuel tank with a fixed capacity.
///
/// The level always satisfies `0 <= level <= capacity`. Filling past
/// capacity clamps; burning more than the level fails without change.
///
/// # Examples
///
/// ```
/// use fuelsim_vehicles::FuelTank;
///
/// let mut tank = FuelTank::new(100.0).unwrap();
/// assert_eq!(tank.fill(120.0), Ok(100.0));
/// assert!(tank.is_full());
///
/// tank.burn(14.0).unwrap();
/// assert_eq!(tank.level(), 86.0);
/// assert!(tank.burn(90.0).is_err());
/// assert_eq!(tank.level(), 86.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FuelTank {
    level: f64,
    capacity: f64,
}

impl FuelTank {
    /// Create an empty tank.
    ///
    /// Returns an error if `capacity` is not finite and positive.
    pub fn new(capacity: f64) -> Result<Self, FuelError> {
        let capacity = validate::positive("tank capacity", capacity)?;
        Ok(Self {
            level: 0.0,
            capacity,
        })
    }

    /// Current fuel level.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Maximum fuel level.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Fuel that can still be added before the tank is full.
    pub fn free_space(&self) -> f64 {
        self.capacity - self.level
    }

    /// Whether the tank holds no fuel.
    pub fn is_empty(&self) -> bool {
        self.level == 0.0
    }

    /// Whether the tank is at capacity.
    pub fn is_full(&self) -> bool {
        self.level >= self.capacity
    }

    /// Add fuel, clamping at capacity.
    ///
    /// Returns how much fuel the tank actually took, which is less than
    /// `liters` when the tank overflows.
    pub fn fill(&mut self, liters: f64) -> Result<f64, FuelError> {
        let liters = validate::positive("fuel amount", liters)?;
        let accepted = liters.min(self.free_space());
        let level = (self.level + liters).min(self.capacity);
        if accepted < liters {
            log::trace!(
                "tank overflow: offered {liters}, accepted {accepted}, capacity {}",
                self.capacity
            );
        }
        self.level = level;
        Ok(accepted)
    }

    /// Remove `needed` units of fuel.
    ///
    /// Fails with [`FuelError::InsufficientFuel`] if the tank holds less
    /// than `needed`; the level is unchanged on failure. An infinite
    /// requirement (a finite drive whose cost overflowed) is reported the
    /// same way.
    pub fn burn(&mut self, needed: f64) -> Result<(), FuelError> {
        if needed == f64::INFINITY {
            return Err(FuelError::InsufficientFuel {
                needed,
                available: self.level,
            });
        }
        let needed = validate::non_negative("fuel needed", needed)?;
        if needed > self.level {
            return Err(FuelError::InsufficientFuel {
                needed,
                available: self.level,
            });
        }
        self.level -= needed;
        Ok(())
    }
}
