use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::path::FieldPath;
use crate::spec::Primitive;
use crate::value::{self, ValueKind};

use super::Validator;

impl Validator {
    pub(super) fn check_primitive(
        &self,
        value: &Value,
        primitive: &Primitive<'_>,
        path: &FieldPath<'_>,
    ) -> ValidationResult {
        if !primitive.ty.matches(ValueKind::of(value)) {
            return Err(ValidationError::type_mismatch(path, primitive.ty.as_str(), value));
        }
        if let Some(allowed) = &primitive.alternatives {
            if !primitive.allows(&value::display_string(value)) {
                return Err(ValidationError::not_allowed(path, allowed, value));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{ValidationError, Validator};
    use serde_json::json;

    fn check(data: serde_json::Value, spec: serde_json::Value) -> Result<(), String> {
        Validator::default().validate(&data, &spec).map_err(|e| e.to_string())
    }

    #[test]
    fn no_coercion_between_types() {
        assert_eq!(check(json!("42"), json!("number")), Err("Invalid type for : expected number, got string".into()));
        assert_eq!(check(json!(1), json!("boolean")), Err("Invalid type for : expected boolean, got number".into()));
        assert_eq!(check(json!(true), json!("string")), Err("Invalid type for : expected string, got boolean".into()));
        assert_eq!(check(json!([1]), json!("string")), Err("Invalid type for : expected string, got array".into()));
    }

    #[test]
    fn numbers_and_booleans_match_their_string_form() {
        assert_eq!(check(json!(1), json!("number = 1 | 2")), Ok(()));
        assert_eq!(check(json!(2.0), json!("number = 1 | 2")), Ok(()));
        assert_eq!(check(json!(true), json!("boolean = true")), Ok(()));
        assert_eq!(
            check(json!(3), json!("number = 1 | 2")),
            Err("Invalid value for : expected one of [1, 2], got 3".into())
        );
    }

    #[test]
    fn enum_error_carries_alternatives() {
        let err = Validator::default()
            .validate(&json!({ "kind": "z" }), &json!({ "kind$": "String = x | y" }))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidEnumValue {
                path: "kind".into(),
                allowed: vec!["x".into(), "y".into()],
                actual: "z".into(),
            }
        );
    }
}
