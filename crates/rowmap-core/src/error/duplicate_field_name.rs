use super::Error;

/// Error when two members of an entity resolve to the same field name.
#[derive(Debug)]
pub(super) struct DuplicateFieldName {
    entity: Box<str>,
    name: Box<str>,
}

impl DuplicateFieldName {
    pub(super) fn subject(&self) -> &str {
        &self.name
    }
}

impl std::error::Error for DuplicateFieldName {}

impl core::fmt::Display for DuplicateFieldName {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field name '{}' is declared more than once in entity '{}'",
            self.name, self.entity
        )
    }
}

impl Error {
    /// Creates a duplicate field name error.
    pub fn duplicate_field_name(entity: impl Into<String>, name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateFieldName(DuplicateFieldName {
            entity: entity.into().into(),
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate field name error.
    pub fn is_duplicate_field_name(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::DuplicateFieldName(_))
    }
}
