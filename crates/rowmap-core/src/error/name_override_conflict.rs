use super::Error;

/// Error when a tag tries to replace a value that was already fixed.
///
/// Column tags may not rename a field whose name was assigned manually, and a
/// table name may only be declared once per entity. Any other precedence
/// rule that refuses to overwrite a manual value reports the same kind.
#[derive(Debug)]
pub(super) struct NameOverrideConflict {
    target: Target,
    entity: Box<str>,
    subject: Box<str>,
    current: Box<str>,
    requested: Box<str>,
}

#[derive(Debug)]
enum Target {
    /// A property of a field, e.g. "Name" or "Expression"
    Field(&'static str),

    /// The entity's table name
    Table,
}

impl NameOverrideConflict {
    pub(super) fn subject(&self) -> &str {
        &self.subject
    }
}

impl std::error::Error for NameOverrideConflict {}

impl core::fmt::Display for NameOverrideConflict {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.target {
            Target::Field(attribute) => write!(
                f,
                "{attribute} of field '{}' can't be overridden with '{}' as it is already set to '{}' in entity '{}'",
                self.subject, self.requested, self.current, self.entity
            ),
            Target::Table => write!(
                f,
                "Table name of entity '{}' can't be overridden with '{}' as it is already set to '{}'",
                self.entity, self.requested, self.current
            ),
        }
    }
}

impl Error {
    /// Creates a name override conflict error.
    ///
    /// `subject` identifies the field whose name is fixed to `current`;
    /// `requested` is the rejected value.
    pub fn name_override_conflict(
        entity: impl Into<String>,
        subject: impl Into<String>,
        current: impl Into<String>,
        requested: impl Into<String>,
    ) -> Error {
        Error::value_override_conflict(entity, subject, "Name", current, requested)
    }

    /// Creates an override conflict for another field attribute, such as the
    /// expression or caption.
    pub fn value_override_conflict(
        entity: impl Into<String>,
        subject: impl Into<String>,
        attribute: &'static str,
        current: impl Into<String>,
        requested: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::NameOverrideConflict(NameOverrideConflict {
            target: Target::Field(attribute),
            entity: entity.into().into(),
            subject: subject.into().into(),
            current: current.into().into(),
            requested: requested.into().into(),
        }))
    }

    /// Creates a name override conflict for an entity whose table name was
    /// already declared.
    pub fn table_name_override_conflict(
        entity: impl Into<String>,
        current: impl Into<String>,
        requested: impl Into<String>,
    ) -> Error {
        let entity = entity.into();
        Error::from(super::ErrorKind::NameOverrideConflict(NameOverrideConflict {
            target: Target::Table,
            subject: entity.clone().into(),
            entity: entity.into(),
            current: current.into().into(),
            requested: requested.into().into(),
        }))
    }

    /// Returns `true` if this error is a name override conflict.
    pub fn is_name_override_conflict(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::NameOverrideConflict(_))
    }
}
