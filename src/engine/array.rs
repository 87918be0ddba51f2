use serde_json::Value;

use crate::error::{CollectionKind, ValidationError, ValidationResult};
use crate::path::{FieldPath, Segment};

use super::Validator;

impl Validator {
    /// `item = None` is the bare `"array"` token.
    pub(super) fn check_array<'s>(
        &self,
        value: &Value,
        item: Option<&'s Value>,
        path: &mut FieldPath<'s>,
        required: bool,
    ) -> ValidationResult {
        let Value::Array(elements) = value else {
            return Err(ValidationError::type_mismatch(path, "array", value));
        };
        if required && elements.is_empty() {
            return Err(ValidationError::empty(path, CollectionKind::Array));
        }
        let Some(item) = item else { return Ok(()) };

        // elements of a present array are always required
        for (index, element) in elements.iter().enumerate() {
            path.scoped(Segment::Index(index), |path| self.walk(element, item, path, true))?;
        }
        Ok(())
    }
}
