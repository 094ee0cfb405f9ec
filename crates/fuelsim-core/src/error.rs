//! Error types for the fuelsim vehicle simulation.
//!
//! Every rejection a vehicle can produce is a [`FuelError`]. Callers that
//! only care about the broad category (wrong input kind vs. out-of-range
//! value) match on [`FuelError::kind()`] instead of individual variants.

use std::error::Error;
use std::fmt;

use crate::traits::VehicleKind;

/// Broad classification of a [`FuelError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operand had the wrong kind (non-numeric, non-integer, boolean).
    Type,
    /// The operand was numeric but outside the allowed range, or the
    /// vehicle state cannot satisfy the request.
    Value,
    /// The target vehicle does not support the requested operation.
    Unsupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type => write!(f, "type error"),
            Self::Value => write!(f, "value error"),
            Self::Unsupported => write!(f, "unsupported operation"),
        }
    }
}

/// Errors from vehicle construction and fuel operations.
///
/// A failed operation never mutates the vehicle: validation and the
/// fuel-sufficiency check both run before any state is touched.
#[derive(Clone, Debug, PartialEq)]
pub enum FuelError {
    /// The operand was not of the expected kind.
    InvalidType {
        /// Name of the offending parameter.
        field: &'static str,
        /// What the parameter accepts ("a number", "an integer").
        expected: &'static str,
        /// The kind that was actually supplied.
        found: &'static str,
    },
    /// The operand was NaN or infinite.
    NotFinite {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The operand must be strictly positive.
    NotPositive {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The operand must not be negative.
    Negative {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Trailer count outside `[0, max]`.
    TrailerCountOutOfRange {
        /// The rejected count.
        value: i64,
        /// Largest accepted count.
        max: u32,
    },
    /// The tank holds less fuel than the requested drive needs.
    InsufficientFuel {
        /// Fuel the drive would burn.
        needed: f64,
        /// Fuel currently in the tank.
        available: f64,
    },
    /// The command is not meaningful for this kind of vehicle.
    UnsupportedCommand {
        /// The vehicle that received the command.
        vehicle: VehicleKind,
        /// Name of the rejected command.
        command: &'static str,
    },
}

impl FuelError {
    /// Broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } => ErrorKind::Type,
            Self::NotFinite { .. }
            | Self::NotPositive { .. }
            | Self::Negative { .. }
            | Self::TrailerCountOutOfRange { .. }
            | Self::InsufficientFuel { .. } => ErrorKind::Value,
            Self::UnsupportedCommand { .. } => ErrorKind::Unsupported,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::Type`.
    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    /// Shorthand for `self.kind() == ErrorKind::Value`.
    pub fn is_value_error(&self) -> bool {
        self.kind() == ErrorKind::Value
    }
}

impl fmt::Display for FuelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType {
                field,
                expected,
                found,
            } => write!(f, "{field} must be {expected}, got {found}"),
            Self::NotFinite { field, value } => {
                write!(f, "{field} must be a finite number, got {value}")
            }
            Self::NotPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} cannot be negative, got {value}")
            }
            Self::TrailerCountOutOfRange { value, max } => {
                write!(f, "trailer count must be between 0 and {max}, got {value}")
            }
            Self::InsufficientFuel { needed, available } => {
                write!(f, "not enough fuel: need {needed}, have {available}")
            }
            Self::UnsupportedCommand { vehicle, command } => {
                write!(f, "{vehicle} does not support {command}")
            }
        }
    }
}

impl Error for FuelError {}

/// Why a submitted [`Command`](crate::Command) was not applied.
#[derive(Clone, Debug, PartialEq)]
pub enum RejectReason {
    /// No vehicle is registered under the command's target name.
    UnknownVehicle {
        /// The name that failed to resolve.
        name: String,
    },
    /// The batch exceeded the per-submission limit.
    BatchFull {
        /// The configured limit.
        limit: usize,
    },
    /// The vehicle rejected the command.
    Rejected(FuelError),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVehicle { name } => write!(f, "unknown vehicle '{name}'"),
            Self::BatchFull { limit } => write!(f, "batch exceeds limit of {limit} commands"),
            Self::Rejected(e) => write!(f, "rejected: {e}"),
        }
    }
}

impl Error for RejectReason {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FuelError> for RejectReason {
    fn from(e: FuelError) -> Self {
        Self::Rejected(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_partition_variants() {
        let type_err = FuelError::InvalidType {
            field: "distance",
            expected: "a number",
            found: "boolean",
        };
        assert_eq!(type_err.kind(), ErrorKind::Type);
        assert!(type_err.is_type_error());

        let short = FuelError::InsufficientFuel {
            needed: 30.0,
            available: 10.0,
        };
        assert_eq!(short.kind(), ErrorKind::Value);
        assert!(short.is_value_error());

        let unsupported = FuelError::UnsupportedCommand {
            vehicle: VehicleKind::Car,
            command: "set_trailer_count",
        };
        assert_eq!(unsupported.kind(), ErrorKind::Unsupported);
        assert!(!unsupported.is_type_error());
        assert!(!unsupported.is_value_error());
    }

    #[test]
    fn display_messages() {
        let e = FuelError::TrailerCountOutOfRange { value: 5, max: 4 };
        assert_eq!(e.to_string(), "trailer count must be between 0 and 4, got 5");

        let e = FuelError::Negative {
            field: "distance",
            value: -1.0,
        };
        assert_eq!(e.to_string(), "distance cannot be negative, got -1");

        let e = FuelError::UnsupportedCommand {
            vehicle: VehicleKind::Car,
            command: "set_trailer_count",
        };
        assert_eq!(e.to_string(), "car does not support set_trailer_count");
    }

    #[test]
    fn reject_reason_chains_fuel_error() {
        let inner = FuelError::NotPositive {
            field: "fuel amount",
            value: 0.0,
        };
        let reason: RejectReason = inner.clone().into();
        assert_eq!(reason, RejectReason::Rejected(inner));
        assert!(reason.source().is_some());

        let unknown = RejectReason::UnknownVehicle {
            name: "van".into(),
        };
        assert!(unknown.source().is_none());
        assert_eq!(unknown.to_string(), "unknown vehicle 'van'");
    }
}
