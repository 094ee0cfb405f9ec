//! Command, command payload, and receipt types for batched dispatch.

use crate::error::RejectReason;
use crate::value::Scalar;

/// A command addressed to a named vehicle.
///
/// # Examples
///
/// ```
/// use fuelsim_core::{Command, CommandPayload, Scalar};
///
/// let cmd = Command::drive("hauler", 120.5);
/// assert_eq!(cmd.vehicle, "hauler");
/// assert_eq!(
///     cmd.payload,
///     CommandPayload::Drive { distance: Scalar::Float(120.5) }
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    /// Name of the target vehicle.
    pub vehicle: String,
    /// The operation to perform.
    pub payload: CommandPayload,
}

impl Command {
    /// Build a command from its parts.
    pub fn new(vehicle: impl Into<String>, payload: CommandPayload) -> Self {
        Self {
            vehicle: vehicle.into(),
            payload,
        }
    }

    /// Add `amount` units of fuel.
    pub fn fill_up(vehicle: impl Into<String>, amount: impl Into<Scalar>) -> Self {
        Self::new(
            vehicle,
            CommandPayload::FillUp {
                amount: amount.into(),
            },
        )
    }

    /// Drive `distance` units.
    pub fn drive(vehicle: impl Into<String>, distance: impl Into<Scalar>) -> Self {
        Self::new(
            vehicle,
            CommandPayload::Drive {
                distance: distance.into(),
            },
        )
    }

    /// Change the number of attached trailers.
    pub fn set_trailer_count(vehicle: impl Into<String>, count: impl Into<Scalar>) -> Self {
        Self::new(
            vehicle,
            CommandPayload::SetTrailerCount {
                count: count.into(),
            },
        )
    }
}

/// All command payloads. Operands are untyped and checked on dispatch.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandPayload {
    /// Add fuel to the tank.
    FillUp {
        /// Fuel to add. Must be a positive number.
        amount: Scalar,
    },
    /// Burn fuel proportional to a distance.
    Drive {
        /// Distance to cover. Must be a non-negative number.
        distance: Scalar,
    },
    /// Change the trailer count. Trucks only.
    SetTrailerCount {
        /// New count. Must be an integer in `[0, 4]`.
        count: Scalar,
    },
}

impl CommandPayload {
    /// Stable operation name, used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FillUp { .. } => "fill_up",
            Self::Drive { .. } => "drive",
            Self::SetTrailerCount { .. } => "set_trailer_count",
        }
    }
}

/// Receipt returned for each command in a submitted batch.
#[derive(Clone, Debug, PartialEq)]
pub struct Receipt {
    /// Whether the command was applied.
    pub accepted: bool,
    /// Why the command was not applied, if it wasn't.
    pub reason: Option<RejectReason>,
    /// Index of this command within the submitted batch.
    pub command_index: usize,
    /// Fuel left in the target vehicle after this command, when the
    /// vehicle exists.
    pub remaining_fuel: Option<f64>,
}

impl Receipt {
    /// Receipt for a successfully applied command.
    pub fn applied(command_index: usize, remaining_fuel: f64) -> Self {
        Self {
            accepted: true,
            reason: None,
            command_index,
            remaining_fuel: Some(remaining_fuel),
        }
    }

    /// Receipt for a rejected command.
    pub fn rejected(
        command_index: usize,
        reason: RejectReason,
        remaining_fuel: Option<f64>,
    ) -> Self {
        Self {
            accepted: false,
            reason: Some(reason),
            command_index,
            remaining_fuel,
        }
    }
}
