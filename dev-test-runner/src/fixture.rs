//! Fixture cases: a spec, a document, and the message it should fail with.
//!
//! A fixture file is a JSON array of cases:
//!
//! ```json
//! [
//!   {
//!     "name": "missing timestamp",
//!     "spec": { "name$": "string", "timestamp$": "number" },
//!     "data": { "name": "x" },
//!     "expect": "Missing required field: timestamp"
//!   }
//! ]
//! ```
//!
//! `expect` omitted or `null` means the document must pass. `required`
//! defaults to `true`; `options` overrides any subset of the runner's flags.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use json_shape::{AbsentSpecPolicy, Options, PathStyle, UnknownFieldPolicy, Validator};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Case {
    pub name: String,
    pub spec: Value,
    #[serde(default)]
    pub data: Value,
    #[serde(default = "required_by_default")]
    pub required: bool,
    #[serde(default)]
    pub options: CaseOptions,
    #[serde(default)]
    pub expect: Option<String>,
}

fn required_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CaseOptions {
    pub path_style: Option<PathStyle>,
    pub unknown_fields: Option<UnknownFieldPolicy>,
    pub absent_spec: Option<AbsentSpecPolicy>,
}

impl CaseOptions {
    pub fn apply(self, base: Options) -> Options {
        Options {
            path_style: self.path_style.unwrap_or(base.path_style),
            unknown_fields: self.unknown_fields.unwrap_or(base.unknown_fields),
            absent_spec: self.absent_spec.unwrap_or(base.absent_spec),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed {
        expected: Option<String>,
        actual: Option<String>,
    },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl Case {
    pub fn run(&self, base: Options) -> Outcome {
        let validator = Validator::new(self.options.apply(base));
        let actual = validator
            .validate_as(&self.data, &self.spec, self.required)
            .err()
            .map(|error| error.to_string());
        if actual == self.expect {
            Outcome::Passed
        } else {
            Outcome::Failed { expected: self.expect.clone(), actual }
        }
    }
}

/// Deserialize with JSON-path context in error messages.
fn from_slice_with_path<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(de).map_err(|err| {
        let path = err.path().to_string();
        anyhow!("at JSON path {path} → {}", err.into_inner())
    })
}

pub fn decode_cases(bytes: &[u8]) -> Result<Vec<Case>> {
    from_slice_with_path(bytes)
}

pub fn load_cases(path: &Path) -> Result<Vec<Case>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read fixture file {}", path.display()))?;
    decode_cases(&bytes).with_context(|| format!("malformed fixture file {}", path.display()))
}
