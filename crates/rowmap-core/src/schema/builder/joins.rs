use crate::schema::{Join, JoinTag};
use crate::stmt::Criteria;
use crate::{Error, Result};
use indexmap::IndexMap;

/// Collects an entity's joins, keyed by alias.
pub(super) struct JoinRegistry<'a> {
    entity: &'a str,
    base_alias: &'a str,
    joins: IndexMap<String, Join>,
}

impl<'a> JoinRegistry<'a> {
    pub(super) fn new(entity: &'a str, base_alias: &'a str) -> Self {
        JoinRegistry {
            entity,
            base_alias,
            joins: IndexMap::new(),
        }
    }

    /// Registers a join. `subject` names what declared it, for errors.
    pub(super) fn insert(&mut self, subject: &str, tag: &JoinTag) -> Result<()> {
        let alias = tag.alias.trim();
        if alias.is_empty() {
            return Err(Error::missing_required_attribute(
                self.entity,
                subject,
                "join alias",
            ));
        }

        let table = tag.table.trim();
        if table.is_empty() {
            return Err(Error::missing_required_attribute(self.entity, alias, "join table"));
        }

        if matches!(&tag.on, Criteria::Raw(sql) if sql.trim().is_empty()) {
            return Err(Error::missing_required_attribute(
                self.entity,
                alias,
                "join criteria",
            ));
        }

        if alias == self.base_alias {
            return Err(Error::reserved_join_alias(self.entity, alias));
        }

        if self.joins.contains_key(alias) {
            return Err(Error::duplicate_join_alias(self.entity, alias));
        }

        self.joins.insert(
            alias.to_string(),
            Join {
                alias: alias.to_string(),
                table: table.to_string(),
                on_criteria: tag.on.clone(),
                kind: tag.kind,
            },
        );

        Ok(())
    }

    pub(super) fn into_joins(self) -> IndexMap<String, Join> {
        self.joins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::JoinKind;

    #[test]
    fn join_defaults_to_left() {
        let mut registry = JoinRegistry::new("ComplexRow", "T0");
        registry
            .insert(
                "ComplexRow",
                &JoinTag::left("c", "TheCountryTable", "c.TheCountryID = T0.CountryID"),
            )
            .unwrap();

        let joins = registry.into_joins();
        assert_eq!(joins["c"].kind, JoinKind::Left);
        assert_eq!(joins["c"].table, "TheCountryTable");
    }

    #[test]
    fn duplicate_alias() {
        let mut registry = JoinRegistry::new("ComplexRow", "T0");
        registry
            .insert("ComplexRow", &JoinTag::left("c", "A", "c.ID = T0.A"))
            .unwrap();

        let err = registry
            .insert("ComplexRow", &JoinTag::inner("c", "B", "c.ID = T0.B"))
            .unwrap_err();
        assert!(err.is_duplicate_join_alias());
        assert_eq!(err.subject(), Some("c"));
    }

    #[test]
    fn base_alias_is_reserved() {
        let mut registry = JoinRegistry::new("ComplexRow", "T0");
        let err = registry
            .insert("ComplexRow", &JoinTag::left("T0", "A", "T0.ID = T0.A"))
            .unwrap_err();
        assert!(err.is_duplicate_join_alias());
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn aliases_are_case_sensitive() {
        let mut registry = JoinRegistry::new("ComplexRow", "T0");
        registry
            .insert("ComplexRow", &JoinTag::left("c", "A", "c.ID = T0.A"))
            .unwrap();
        registry
            .insert("ComplexRow", &JoinTag::left("C", "B", "C.ID = T0.B"))
            .unwrap();
        assert_eq!(registry.into_joins().len(), 2);
    }

    #[test]
    fn empty_criteria() {
        let mut registry = JoinRegistry::new("ComplexRow", "T0");
        let err = registry
            .insert("ComplexRow", &JoinTag::left("c", "A", " "))
            .unwrap_err();
        assert!(err.is_missing_required_attribute());
    }
}
