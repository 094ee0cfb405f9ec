//! Range checks shared by vehicle constructors and operations.
//!
//! Each helper returns the accepted value so call sites can validate
//! and bind in one expression.

use crate::error::FuelError;

/// Require a finite, strictly positive value.
pub fn positive(field: &'static str, value: f64) -> Result<f64, FuelError> {
    if !value.is_finite() {
        return Err(FuelError::NotFinite { field, value });
    }
    if value <= 0.0 {
        return Err(FuelError::NotPositive { field, value });
    }
    Ok(value)
}

/// Require a finite value that is zero or greater.
pub fn non_negative(field: &'static str, value: f64) -> Result<f64, FuelError> {
    if !value.is_finite() {
        return Err(FuelError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(FuelError::Negative { field, value });
    }
    Ok(value)
}

/// Require a trailer count in `[0, max]`.
pub fn trailer_count(value: i64, max: u32) -> Result<u32, FuelError> {
    match u32::try_from(value) {
        Ok(n) if n <= max => Ok(n),
        _ => Err(FuelError::TrailerCountOutOfRange { value, max }),
    }
}
