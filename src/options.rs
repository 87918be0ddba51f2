//! Validation policies.
//!
//! Every field has a default, so a config document only needs to name the
//! policies it overrides:
//!
//! ```
//! let options: json_shape::Options =
//!     serde_json::from_str(r#"{ "unknown-fields": "warn" }"#).unwrap();
//! assert_eq!(options.unknown_fields, json_shape::UnknownFieldPolicy::Warn);
//! ```
use serde::{Deserialize, Serialize};

use crate::path::PathStyle;

/// Data keys with no matching spec field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownFieldPolicy {
    #[default]
    Ignore,
    /// Emit a `tracing` warning and carry on.
    Warn,
    Reject,
}

/// A `null` spec node, including the item spec of `[]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbsentSpecPolicy {
    /// Accept whatever value sits there.
    #[default]
    Accept,
    /// Fail with [`ValidationError::InvalidSpecification`](crate::ValidationError::InvalidSpecification).
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Options {
    pub path_style: PathStyle,
    pub unknown_fields: UnknownFieldPolicy,
    pub absent_spec: AbsentSpecPolicy,
}

impl Options {
    pub fn with_path_style(mut self, path_style: PathStyle) -> Self {
        self.path_style = path_style;
        self
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn with_absent_spec(mut self, policy: AbsentSpecPolicy) -> Self {
        self.absent_spec = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_lenient_behaviour() {
        let options = Options::default();
        assert_eq!(options.path_style, PathStyle::Dotted);
        assert_eq!(options.unknown_fields, UnknownFieldPolicy::Ignore);
        assert_eq!(options.absent_spec, AbsentSpecPolicy::Accept);
    }

    #[test]
    fn partial_documents_keep_defaults() {
        let options: Options = serde_json::from_str(r#"{ "path-style": "bracketed" }"#).unwrap();
        assert_eq!(options, Options::default().with_path_style(PathStyle::Bracketed));
    }

    #[test]
    fn config_names_are_exact_kebab_case() {
        assert!(serde_json::from_str::<Options>(r#"{ "unknown-fields": "Warn" }"#).is_err());
        assert!(serde_json::from_str::<Options>(r#"{ "absent-spec": " reject" }"#).is_err());
        let options: Options = serde_json::from_str(r#"{ "absent-spec": "reject" }"#).unwrap();
        assert_eq!(options.absent_spec, AbsentSpecPolicy::Reject);
    }
}
