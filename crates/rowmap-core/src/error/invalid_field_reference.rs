use super::Error;

/// Error when a tag argument refers to a member the entity does not declare.
#[derive(Debug)]
pub(super) struct InvalidFieldReference {
    entity: Box<str>,
    field: Box<str>,
    target: Box<str>,
    role: &'static str,
}

impl InvalidFieldReference {
    pub(super) fn subject(&self) -> &str {
        &self.field
    }
}

impl std::error::Error for InvalidFieldReference {}

impl core::fmt::Display for InvalidFieldReference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field '{}' in entity '{}' references unknown field '{}' as its {}",
            self.field, self.entity, self.target, self.role
        )
    }
}

impl Error {
    /// Creates an invalid field reference error. `role` describes how the
    /// reference is used, e.g. "textual field".
    pub fn invalid_field_reference(
        entity: impl Into<String>,
        field: impl Into<String>,
        target: impl Into<String>,
        role: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidFieldReference(InvalidFieldReference {
            entity: entity.into().into(),
            field: field.into().into(),
            target: target.into().into(),
            role,
        }))
    }

    /// Returns `true` if this error is an invalid field reference.
    pub fn is_invalid_field_reference(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidFieldReference(_))
    }
}
