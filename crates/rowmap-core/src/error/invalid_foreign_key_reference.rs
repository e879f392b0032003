use super::Error;

/// Error when a foreign key tag does not name both a table and a field.
#[derive(Debug)]
pub(super) struct InvalidForeignKeyReference {
    entity: Box<str>,
    field: Box<str>,
    table: Box<str>,
    foreign_field: Box<str>,
}

impl InvalidForeignKeyReference {
    pub(super) fn subject(&self) -> &str {
        &self.field
    }
}

impl std::error::Error for InvalidForeignKeyReference {}

impl core::fmt::Display for InvalidForeignKeyReference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "foreign key of field '{}' in entity '{}' must name both a table and a field (table: '{}', field: '{}')",
            self.field, self.entity, self.table, self.foreign_field
        )
    }
}

impl Error {
    /// Creates an invalid foreign key reference error.
    pub fn invalid_foreign_key_reference(
        entity: impl Into<String>,
        field: impl Into<String>,
        table: impl Into<String>,
        foreign_field: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidForeignKeyReference(
            InvalidForeignKeyReference {
                entity: entity.into().into(),
                field: field.into().into(),
                table: table.into().into(),
                foreign_field: foreign_field.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid foreign key reference.
    pub fn is_invalid_foreign_key_reference(&self) -> bool {
        matches!(
            self.root_kind(),
            super::ErrorKind::InvalidForeignKeyReference(_)
        )
    }
}
