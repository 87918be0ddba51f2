/// Suffix that marks an object key as required (`"name$"`).
///
/// There is no escaping: a field whose real name ends in `$` cannot be declared.
pub const REQUIRED_MARKER: char = '$';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey<'s> {
    pub name: &'s str,
    pub required: bool,
}

impl<'s> FieldKey<'s> {
    pub fn parse(key: &'s str) -> Self {
        match key.strip_suffix(REQUIRED_MARKER) {
            Some(name) => Self { name, required: true },
            None => Self { name: key, required: false },
        }
    }
}
