//! Runtime view of the data under validation.
//!
//! `null` stands in for both "absent" and "null"; keys missing from an object
//! never reach the engine at all.
use std::fmt;

use serde_json::{Number, Value};

/// Runtime type tag of a JSON value, as reported in type mismatch errors.
///
/// Arrays are their own kind and never satisfy an `"object"` spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String form of a value, used for enum membership and error messages.
///
/// Strings are taken verbatim (no quotes). Numbers follow JavaScript's
/// `String(n)`: `1.0` reads as `"1"`, `-0.0` as `"0"`, and magnitudes at or
/// above `1e21` or below `1e-6` use exponent form (`"1e+21"`, `"1.5e-7"`).
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_string(n),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn number_string(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => float_string(f),
        _ => n.to_string(),
    }
}

fn float_string(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let magnitude = f.abs();
    if magnitude < 1e21 && magnitude >= 1e-6 {
        return f.to_string();
    }
    // `{:e}` is shortest round-trip, but omits the `+` on positive exponents
    let text = format!("{f:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
        _ => text,
    }
}
