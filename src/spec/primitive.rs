use crate::value::ValueKind;

use super::SpecError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    String,
    Number,
    Boolean,
}

impl TypeName {
    /// `name` must already be trimmed and lower-cased.
    pub fn parse(name: &str) -> Result<Self, SpecError> {
        match name {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            other => Err(SpecError::UnknownType(other.to_owned())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    pub fn matches(self, kind: ValueKind) -> bool {
        matches!(
            (self, kind),
            (Self::String, ValueKind::String)
                | (Self::Number, ValueKind::Number)
                | (Self::Boolean, ValueKind::Boolean)
        )
    }
}

/// `"type"` or `"type = a | b"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primitive<'s> {
    pub ty: TypeName,
    pub alternatives: Option<Vec<&'s str>>,
}

impl<'s> Primitive<'s> {
    pub(super) fn new(ty: TypeName, clause: Option<&'s str>) -> Self {
        let alternatives = clause.map(|clause| clause.split('|').map(str::trim).collect());
        Self { ty, alternatives }
    }

    /// Whether a value whose string form is `text` satisfies the clause.
    pub fn allows(&self, text: &str) -> bool {
        match &self.alternatives {
            None => true,
            Some(alternatives) => alternatives.iter().any(|alt| *alt == text),
        }
    }
}
