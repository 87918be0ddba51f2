//! Recursive validation walk.
//!
//! One spec node is judged against one value node per step, depth first, in
//! declared field order. The first violation aborts the walk.
mod array;
mod field;
mod object;

use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::options::{AbsentSpecPolicy, Options};
use crate::path::FieldPath;
use crate::spec::{SpecError, Specifier};

/// Stateless validator; holds only its policies, so it is free to copy and
/// share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    options: Options,
}

impl Validator {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Validate `data` against `spec`, treating the root as required.
    pub fn validate(&self, data: &Value, spec: &Value) -> ValidationResult {
        self.validate_as(data, spec, true)
    }

    /// Validate with an explicit required flag for the root node.
    ///
    /// With `required = false` a `null` root passes, and an empty root object
    /// or array is accepted.
    pub fn validate_as(&self, data: &Value, spec: &Value, required: bool) -> ValidationResult {
        let mut path = FieldPath::root(self.options.path_style);
        self.walk(data, spec, &mut path, required)
    }

    fn walk<'s>(
        &self,
        value: &Value,
        spec: &'s Value,
        path: &mut FieldPath<'s>,
        required: bool,
    ) -> ValidationResult {
        // parse errors wait until the value is known to be present
        let specifier = Specifier::parse(spec);
        if matches!(specifier, Ok(Specifier::Absent)) {
            return self.absent_spec(path);
        }

        if value.is_null() {
            if required {
                return Err(ValidationError::missing(path.render()));
            }
            return Ok(());
        }

        let specifier = specifier.map_err(|reason| ValidationError::invalid_spec(path, reason))?;
        tracing::trace!(path = %path, ?specifier, "checking node");

        match specifier {
            Specifier::Absent => self.absent_spec(path),
            Specifier::Primitive(primitive) => self.check_primitive(value, &primitive, path),
            Specifier::AnyArray => self.check_array(value, None, path, required),
            Specifier::ArrayOf(item) => self.check_array(value, Some(item), path, required),
            Specifier::AnyObject => self.check_object(value, None, path, required),
            Specifier::Object(fields) => self.check_object(value, Some(fields), path, required),
        }
    }

    fn absent_spec(&self, path: &FieldPath<'_>) -> ValidationResult {
        match self.options.absent_spec {
            AbsentSpecPolicy::Accept => {
                tracing::debug!(path = %path, "no spec for node, accepting as is");
                Ok(())
            }
            AbsentSpecPolicy::Reject => Err(ValidationError::invalid_spec(path, SpecError::Absent)),
        }
    }
}
