//! Cumulative dispatch metrics for a garage.
//!
//! [`GarageMetrics`] accumulates across every
//! [`submit`](crate::Garage::submit) call for the life of the garage.

use fuelsim_core::CommandPayload;

/// Counters and fuel totals collected while applying commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GarageMetrics {
    /// Commands applied successfully.
    pub commands_applied: u64,
    /// Commands rejected for any reason.
    pub commands_rejected: u64,
    /// Fuel actually taken by tanks. Excludes overflow past capacity.
    pub fuel_added: f64,
    /// Fuel burned by drives.
    pub fuel_burned: f64,
    /// Total distance covered by successful drives.
    pub distance_driven: f64,
}

impl GarageMetrics {
    /// Record a successful command given the fuel level around it.
    pub(crate) fn record_applied(&mut self, payload: &CommandPayload, before: f64, after: f64) {
        self.commands_applied += 1;
        if after > before {
            self.fuel_added += after - before;
        } else {
            self.fuel_burned += before - after;
        }
        if let CommandPayload::Drive { distance } = payload {
            if let Ok(d) = distance.as_number("distance") {
                self.distance_driven += d;
            }
        }
    }

    /// Record a rejected command.
    pub(crate) fn record_rejected(&mut self) {
        self.commands_rejected += 1;
    }

    /// Total commands seen, applied or not.
    pub fn commands_total(&self) -> u64 {
        self.commands_applied + self.commands_rejected
    }
}
