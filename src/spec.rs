//! Spec micro-language.
//!
//! A spec is plain JSON, read one node at a time while the engine walks:
//! - `"string"`, `"number"`, `"boolean"`, optionally `"type = a | b"`;
//! - `"object"` / `"array"`: any object / any array, contents unchecked;
//! - `{ "key$": spec, "key": spec }`: object with required / optional fields;
//! - `[spec]`: array whose every element matches `spec`;
//! - `null`: no constraint (see [`AbsentSpecPolicy`](crate::AbsentSpecPolicy)).
//!
//! Nodes are never parsed ahead of the walk, so a broken spec under an absent
//! optional field goes unnoticed.
pub mod key;
pub mod primitive;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::value::ValueKind;

pub use key::{FieldKey, REQUIRED_MARKER};
pub use primitive::{Primitive, TypeName};

/// Item spec of `[]`.
static ABSENT: Value = Value::Null;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("no spec given")]
    Absent,
    #[error("unknown type `{0}`")]
    UnknownType(String),
    #[error("`{0}` does not take a value clause")]
    ClauseOnCollection(&'static str),
    #[error("array spec must hold a single item spec, found {0}")]
    ArrayArity(usize),
    #[error("a {0} cannot be used as a spec")]
    UnsupportedNode(ValueKind),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Specifier<'s> {
    Absent,
    Primitive(Primitive<'s>),
    AnyObject,
    AnyArray,
    Object(&'s Map<String, Value>),
    ArrayOf(&'s Value),
}

impl<'s> Specifier<'s> {
    pub fn parse(spec: &'s Value) -> Result<Self, SpecError> {
        match spec {
            Value::Null => Ok(Self::Absent),
            Value::String(text) => Self::parse_str(text),
            Value::Array(items) => match items.as_slice() {
                [] => Ok(Self::ArrayOf(&ABSENT)),
                [item] => Ok(Self::ArrayOf(item)),
                more => Err(SpecError::ArrayArity(more.len())),
            },
            Value::Object(fields) => Ok(Self::Object(fields)),
            other => Err(SpecError::UnsupportedNode(ValueKind::of(other))),
        }
    }

    fn parse_str(text: &'s str) -> Result<Self, SpecError> {
        let (head, clause) = match text.split_once('=') {
            Some((head, clause)) => (head, Some(clause.trim())),
            None => (text, None),
        };
        let name = head.trim().to_lowercase();
        match (name.as_str(), clause) {
            ("object", None) => Ok(Self::AnyObject),
            ("array", None) => Ok(Self::AnyArray),
            ("object", Some(_)) => Err(SpecError::ClauseOnCollection("object")),
            ("array", Some(_)) => Err(SpecError::ClauseOnCollection("array")),
            (name, clause) => Ok(Self::Primitive(Primitive::new(TypeName::parse(name)?, clause))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_parse_to_primitives() {
        let spec = json!(" String ");
        assert_eq!(
            Specifier::parse(&spec),
            Ok(Specifier::Primitive(Primitive { ty: TypeName::String, alternatives: None }))
        );
    }

    #[test]
    fn clause_splits_once_on_equals() {
        let spec = json!("string = a=b | c");
        let Ok(Specifier::Primitive(p)) = Specifier::parse(&spec) else {
            panic!("expected primitive");
        };
        assert_eq!(p.alternatives, Some(vec!["a=b", "c"]));
    }

    #[test]
    fn bare_collection_tokens() {
        assert_eq!(Specifier::parse(&json!("object")), Ok(Specifier::AnyObject));
        assert_eq!(Specifier::parse(&json!("ARRAY")), Ok(Specifier::AnyArray));
        assert_eq!(
            Specifier::parse(&json!("array = 1")),
            Err(SpecError::ClauseOnCollection("array"))
        );
    }

    #[test]
    fn structured_nodes() {
        let object = json!({ "id$": "string" });
        assert!(matches!(Specifier::parse(&object), Ok(Specifier::Object(m)) if m.len() == 1));

        let array = json!(["number"]);
        assert_eq!(Specifier::parse(&array), Ok(Specifier::ArrayOf(&json!("number"))));

        assert_eq!(Specifier::parse(&json!([])), Ok(Specifier::ArrayOf(&Value::Null)));
        assert_eq!(Specifier::parse(&json!(null)), Ok(Specifier::Absent));
    }

    #[test]
    fn malformed_nodes() {
        assert_eq!(Specifier::parse(&json!(["a", "b"])), Err(SpecError::ArrayArity(2)));
        assert_eq!(
            Specifier::parse(&json!(3)),
            Err(SpecError::UnsupportedNode(ValueKind::Number))
        );
        assert_eq!(Specifier::parse(&json!("date")), Err(SpecError::UnknownType("date".into())));
    }
}
