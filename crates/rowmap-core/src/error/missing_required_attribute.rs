use super::Error;

/// Error when a declaration lacks a tag or tag argument the build requires.
///
/// This occurs when:
/// - A tag carries an empty name, table, alias, or expression
/// - A field-level join is declared without a foreign key to join on
#[derive(Debug)]
pub(super) struct MissingRequiredAttribute {
    entity: Box<str>,
    subject: Box<str>,
    attribute: Box<str>,
}

impl MissingRequiredAttribute {
    pub(super) fn subject(&self) -> &str {
        &self.subject
    }
}

impl std::error::Error for MissingRequiredAttribute {}

impl core::fmt::Display for MissingRequiredAttribute {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "Missing required {} for '{}' in entity '{}'",
            self.attribute, self.subject, self.entity
        )
    }
}

impl Error {
    /// Creates a missing required attribute error.
    ///
    /// `subject` names the field, join, or entity missing the attribute and
    /// `attribute` describes what is missing (e.g. "column name").
    pub fn missing_required_attribute(
        entity: impl Into<String>,
        subject: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::MissingRequiredAttribute(
            MissingRequiredAttribute {
                entity: entity.into().into(),
                subject: subject.into().into(),
                attribute: attribute.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a missing required attribute error.
    pub fn is_missing_required_attribute(&self) -> bool {
        matches!(
            self.root_kind(),
            super::ErrorKind::MissingRequiredAttribute(_)
        )
    }
}
