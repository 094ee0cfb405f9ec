//! Dynamically-typed operands for the command surface.
//!
//! The typed vehicle API takes `f64`/`u32` directly. Commands built from
//! untyped sources carry a [`Scalar`] instead, and the conversion to a
//! number or integer is where wrong-kind input is rejected.

use std::fmt;

use crate::error::FuelError;

/// An untyped operand.
///
/// Only [`Int`](Scalar::Int) and [`Float`](Scalar::Float) convert to a
/// number; only [`Int`](Scalar::Int) converts to an integer. A
/// [`Bool`](Scalar::Bool) is never coerced to `0`/`1`.
///
/// # Examples
///
/// ```
/// use fuelsim_core::{ErrorKind, Scalar};
///
/// assert_eq!(Scalar::from(12.5).as_number("fuel amount"), Ok(12.5));
/// assert_eq!(Scalar::from(3).as_integer("trailer count"), Ok(3));
///
/// let err = Scalar::from(true).as_number("distance").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Type);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// A whole number.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// A string.
    Text(String),
    /// An absent value.
    Null,
    /// A sequence of values.
    List(Vec<Scalar>),
}

impl Scalar {
    /// Human-readable name of the variant, used in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Text(_) => "string",
            Self::Null => "null",
            Self::List(_) => "list",
        }
    }

    /// Interpret as a number.
    ///
    /// Returns [`FuelError::InvalidType`] for anything other than an
    /// integer or float. Range checks are left to the caller.
    pub fn as_number(&self, field: &'static str) -> Result<f64, FuelError> {
        match self {
            Self::Int(v) => Ok(*v as f64),
            Self::Float(v) => Ok(*v),
            other => Err(FuelError::InvalidType {
                field,
                expected: "a number",
                found: other.type_name(),
            }),
        }
    }

    /// Interpret as an integer.
    ///
    /// Floats are rejected even when they hold a whole value.
    pub fn as_integer(&self, field: &'static str) -> Result<i64, FuelError> {
        match self {
            Self::Int(v) => Ok(*v),
            other => Err(FuelError::InvalidType {
                field,
                expected: "an integer",
                found: other.type_name(),
            }),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Null => write!(f, "null"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for Scalar {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}
