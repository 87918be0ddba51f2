use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::{CollectionKind, ValidationError, ValidationResult};
use crate::options::UnknownFieldPolicy;
use crate::path::{FieldPath, Segment};
use crate::spec::FieldKey;

use super::Validator;

impl Validator {
    /// `fields = None` is the bare `"object"` token.
    pub(super) fn check_object<'s>(
        &self,
        value: &Value,
        fields: Option<&'s Map<String, Value>>,
        path: &mut FieldPath<'s>,
        required: bool,
    ) -> ValidationResult {
        let Value::Object(entries) = value else {
            return Err(ValidationError::type_mismatch(path, "object", value));
        };
        // a required object with no keys counts as missing
        if required && entries.is_empty() {
            return Err(ValidationError::empty(path, CollectionKind::Object));
        }
        let Some(fields) = fields else { return Ok(()) };

        for (key, child) in fields {
            let key = FieldKey::parse(key);
            match entries.get(key.name) {
                Some(field) => {
                    path.scoped(Segment::Field(key.name), |path| {
                        self.walk(field, child, path, key.required)
                    })?;
                }
                None if key.required => {
                    return Err(ValidationError::missing(path.join(Segment::Field(key.name))));
                }
                None => {}
            }
        }

        self.check_undeclared(entries, fields, path)
    }

    fn check_undeclared(
        &self,
        entries: &Map<String, Value>,
        fields: &Map<String, Value>,
        path: &FieldPath<'_>,
    ) -> ValidationResult {
        let policy = self.options.unknown_fields;
        if policy == UnknownFieldPolicy::Ignore {
            return Ok(());
        }
        let declared: HashSet<&str> = fields.keys().map(|key| FieldKey::parse(key).name).collect();

        for name in entries.keys().filter(|name| !declared.contains(name.as_str())) {
            let field_path = path.join(Segment::Field(name));
            match policy {
                UnknownFieldPolicy::Reject => {
                    return Err(ValidationError::UnknownField { path: field_path });
                }
                UnknownFieldPolicy::Warn => {
                    tracing::warn!(path = %field_path, "field is not declared in spec");
                }
                UnknownFieldPolicy::Ignore => {}
            }
        }
        Ok(())
    }
}
