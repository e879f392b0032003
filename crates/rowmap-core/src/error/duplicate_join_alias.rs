use super::Error;

/// Error when a join alias is already taken within an entity.
///
/// The base alias counts as taken: a join may not shadow the entity's own
/// table.
#[derive(Debug)]
pub(super) struct DuplicateJoinAlias {
    entity: Box<str>,
    alias: Box<str>,
    reserved: bool,
}

impl DuplicateJoinAlias {
    pub(super) fn subject(&self) -> &str {
        &self.alias
    }
}

impl std::error::Error for DuplicateJoinAlias {}

impl core::fmt::Display for DuplicateJoinAlias {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.reserved {
            write!(
                f,
                "join alias '{}' is reserved for the base table of entity '{}'",
                self.alias, self.entity
            )
        } else {
            write!(
                f,
                "join alias '{}' is declared more than once in entity '{}'",
                self.alias, self.entity
            )
        }
    }
}

impl Error {
    /// Creates a duplicate join alias error.
    pub fn duplicate_join_alias(entity: impl Into<String>, alias: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateJoinAlias(DuplicateJoinAlias {
            entity: entity.into().into(),
            alias: alias.into().into(),
            reserved: false,
        }))
    }

    /// Creates a duplicate join alias error for a join that reuses the base
    /// alias.
    pub fn reserved_join_alias(entity: impl Into<String>, alias: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateJoinAlias(DuplicateJoinAlias {
            entity: entity.into().into(),
            alias: alias.into().into(),
            reserved: true,
        }))
    }

    /// Returns `true` if this error is a duplicate join alias error.
    pub fn is_duplicate_join_alias(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::DuplicateJoinAlias(_))
    }
}
