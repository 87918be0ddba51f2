//! Check JSON values against lightweight shape specs.
//!
//! A spec is ordinary JSON: strings name primitive types, objects describe
//! fields (a trailing `$` marks a field as required), and one-element arrays
//! describe array items.
//!
//! ```
//! use serde_json::json;
//!
//! let spec = json!({
//!     "name$": "string",
//!     "timestamp$": "number",
//!     "level": "string = info | warn | error",
//!     "tags": ["string"],
//! });
//!
//! json_shape::validate(&json!({ "name": "boot", "timestamp": 1623456789 }), &spec).unwrap();
//!
//! let err = json_shape::validate(&json!({ "name": "boot" }), &spec).unwrap_err();
//! assert_eq!(err.to_string(), "Missing required field: timestamp");
//! ```
//!
//! Validation stops at the first violation. Policies for path rendering,
//! undeclared fields and `null` spec nodes live in [`Options`].
pub mod engine;
pub mod error;
pub mod options;
pub mod path;
pub mod spec;
pub mod value;

use serde_json::Value;

pub use engine::Validator;
pub use error::{CollectionKind, ValidationError, ValidationResult};
pub use options::{AbsentSpecPolicy, Options, UnknownFieldPolicy};
pub use path::PathStyle;
pub use spec::SpecError;
pub use value::ValueKind;

/// Validate `data` against `spec` with default [`Options`], root required.
pub fn validate(data: &Value, spec: &Value) -> ValidationResult {
    Validator::default().validate(data, spec)
}
