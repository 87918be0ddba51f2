use std::fmt;

use thiserror::Error;

use crate::path::FieldPath;
use crate::spec::SpecError;
use crate::value::{self, ValueKind};
use serde_json::Value;

pub type ValidationResult<T = ()> = Result<T, ValidationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Object,
    Array,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Object => "Object",
            Self::Array => "Array",
        })
    }
}

/// First violation found by a validation walk.
///
/// Message texts are matched verbatim by downstream code; keep them stable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {path}")]
    MissingRequiredField { path: String },

    #[error("Invalid type for {path}: expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: ValueKind,
    },

    #[error("{kind} cannot be empty: {path}")]
    EmptyCollection { path: String, kind: CollectionKind },

    #[error("Invalid value for {path}: expected one of [{}], got {actual}", .allowed.join(", "))]
    InvalidEnumValue {
        path: String,
        allowed: Vec<String>,
        actual: String,
    },

    /// Only raised under [`UnknownFieldPolicy::Reject`](crate::UnknownFieldPolicy::Reject).
    #[error("Unknown field: {path}")]
    UnknownField { path: String },

    /// The spec node at `path` is malformed; the data was never judged.
    #[error("Invalid specification for {path}: {reason}")]
    InvalidSpecification { path: String, reason: SpecError },
}

impl ValidationError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        Self::MissingRequiredField { path: path.into() }
    }

    pub(crate) fn type_mismatch(path: &FieldPath<'_>, expected: &'static str, actual: &Value) -> Self {
        Self::TypeMismatch {
            path: path.render(),
            expected,
            actual: ValueKind::of(actual),
        }
    }

    pub(crate) fn empty(path: &FieldPath<'_>, kind: CollectionKind) -> Self {
        Self::EmptyCollection { path: path.render(), kind }
    }

    pub(crate) fn not_allowed(path: &FieldPath<'_>, allowed: &[&str], actual: &Value) -> Self {
        Self::InvalidEnumValue {
            path: path.render(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
            actual: value::display_string(actual),
        }
    }

    pub(crate) fn invalid_spec(path: &FieldPath<'_>, reason: SpecError) -> Self {
        Self::InvalidSpecification { path: path.render(), reason }
    }

    /// Rendered location of the violation; empty at the root.
    pub fn path(&self) -> &str {
        match self {
            Self::MissingRequiredField { path }
            | Self::TypeMismatch { path, .. }
            | Self::EmptyCollection { path, .. }
            | Self::InvalidEnumValue { path, .. }
            | Self::UnknownField { path }
            | Self::InvalidSpecification { path, .. } => path,
        }
    }

    /// True when a spec node was at fault rather than the data.
    pub fn is_specification_error(&self) -> bool {
        matches!(self, Self::InvalidSpecification { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        let cases = [
            (ValidationError::missing("items.1.id"), "Missing required field: items.1.id"),
            (
                ValidationError::TypeMismatch { path: "".into(), expected: "string", actual: ValueKind::Number },
                "Invalid type for : expected string, got number",
            ),
            (
                ValidationError::EmptyCollection { path: "".into(), kind: CollectionKind::Object },
                "Object cannot be empty: ",
            ),
            (
                ValidationError::EmptyCollection { path: "tags".into(), kind: CollectionKind::Array },
                "Array cannot be empty: tags",
            ),
            (
                ValidationError::InvalidEnumValue {
                    path: "type".into(),
                    allowed: vec!["x".into(), "y".into()],
                    actual: "z".into(),
                },
                "Invalid value for type: expected one of [x, y], got z",
            ),
            (ValidationError::UnknownField { path: "extra".into() }, "Unknown field: extra"),
        ];
        for (error, message) in cases {
            assert_eq!(error.to_string(), message);
        }
    }

    #[test]
    fn specification_errors_are_distinguishable() {
        let spec = ValidationError::InvalidSpecification {
            path: "a".into(),
            reason: SpecError::UnknownType("int".into()),
        };
        assert!(spec.is_specification_error());
        assert_eq!(spec.path(), "a");
        assert_eq!(spec.to_string(), "Invalid specification for a: unknown type `int`");
        assert!(!ValidationError::missing("a").is_specification_error());
    }
}
