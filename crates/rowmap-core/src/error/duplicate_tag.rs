use super::Error;

/// Error when a tag that may appear once is declared more than once on the
/// same member or entity.
#[derive(Debug)]
pub(super) struct DuplicateTag {
    entity: Box<str>,
    subject: Box<str>,
    tag: Box<str>,
}

impl DuplicateTag {
    pub(super) fn subject(&self) -> &str {
        &self.subject
    }
}

impl std::error::Error for DuplicateTag {}

impl core::fmt::Display for DuplicateTag {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "tag `{}` is declared more than once on '{}' in entity '{}'",
            self.tag, self.subject, self.entity
        )
    }
}

impl Error {
    /// Creates a duplicate tag error.
    pub fn duplicate_tag(
        entity: impl Into<String>,
        subject: impl Into<String>,
        tag: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::DuplicateTag(DuplicateTag {
            entity: entity.into().into(),
            subject: subject.into().into(),
            tag: tag.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate tag error.
    pub fn is_duplicate_tag(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::DuplicateTag(_))
    }
}
