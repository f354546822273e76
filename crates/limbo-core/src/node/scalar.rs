//! Scalar coercion rules.
//!
//! Numbers may be written as YAML numbers or as numeric strings (`"25565"`),
//! and booleans as YAML booleans or the strings `true`/`false` in any case.
//! Anything else is a type mismatch. NaN and infinities are out of range.

use serde_yaml::Value;

/// Why a value could not be read as a scalar type.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarMismatch {
    WrongType,
    /// Numeric, but outside the target range. Carries the value as written.
    OutOfRange(String),
}

/// A type that can be read directly from a single YAML value.
pub trait Scalar: Sized {
    /// Human-readable type name used in error messages.
    const NAME: &'static str;

    fn from_value(value: &Value) -> Result<Self, ScalarMismatch>;
}

impl Scalar for String {
    const NAME: &'static str = "string";

    fn from_value(value: &Value) -> Result<Self, ScalarMismatch> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(ScalarMismatch::WrongType),
        }
    }
}

impl Scalar for bool {
    const NAME: &'static str = "boolean";

    fn from_value(value: &Value) -> Result<Self, ScalarMismatch> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Ok(true),
            Value::String(s) if s.trim().eq_ignore_ascii_case("false") => Ok(false),
            _ => Err(ScalarMismatch::WrongType),
        }
    }
}

impl Scalar for i64 {
    const NAME: &'static str = "long";

    fn from_value(value: &Value) -> Result<Self, ScalarMismatch> {
        match value {
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(v)
                } else if n.is_u64() {
                    Err(ScalarMismatch::OutOfRange(n.to_string()))
                } else {
                    Err(ScalarMismatch::WrongType)
                }
            }
            Value::String(s) => s.trim().parse::<i64>().map_err(|_| ScalarMismatch::WrongType),
            _ => Err(ScalarMismatch::WrongType),
        }
    }
}

/// Narrow integer types go through `i64` and a checked conversion.
macro_rules! narrow_integer_scalar {
    ($ty:ty, $name:literal) => {
        impl Scalar for $ty {
            const NAME: &'static str = $name;

            fn from_value(value: &Value) -> Result<Self, ScalarMismatch> {
                let wide = i64::from_value(value)?;
                <$ty>::try_from(wide).map_err(|_| ScalarMismatch::OutOfRange(wide.to_string()))
            }
        }
    };
}

narrow_integer_scalar!(i32, "integer");
narrow_integer_scalar!(u16, "port number");
narrow_integer_scalar!(u32, "unsigned integer");

impl Scalar for f64 {
    const NAME: &'static str = "number";

    fn from_value(value: &Value) -> Result<Self, ScalarMismatch> {
        let wide = match value {
            Value::Number(n) => n.as_f64().ok_or(ScalarMismatch::WrongType)?,
            Value::String(s) => s.trim().parse::<f64>().map_err(|_| ScalarMismatch::WrongType)?,
            _ => return Err(ScalarMismatch::WrongType),
        };
        // `.nan`, `.inf` and their string spellings are valid YAML floats
        // but never a usable setting.
        if !wide.is_finite() {
            return Err(ScalarMismatch::OutOfRange(wide.to_string()));
        }
        Ok(wide)
    }
}

impl Scalar for f32 {
    const NAME: &'static str = "float";

    fn from_value(value: &Value) -> Result<Self, ScalarMismatch> {
        let wide = f64::from_value(value)?;
        if wide.abs() > f32::MAX as f64 {
            return Err(ScalarMismatch::OutOfRange(wide.to_string()));
        }
        Ok(wide as f32)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
