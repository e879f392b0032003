use super::{Field, FieldId, Join};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/// The immutable field and join metadata of one entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields {
    /// Identifies this container. Every field's `id.entity` equals it.
    pub id: EntityId,

    /// Name of the declaring type
    pub type_name: String,

    pub table_name: String,

    /// Alias of the entity's own table in field expressions
    pub base_alias: String,

    /// Fields in declaration order; `fields[i].id.index == i`
    pub fields: Vec<Field>,

    /// Joins keyed by alias, type-level joins first
    pub joins: IndexMap<String, Join>,

    by_name: HashMap<String, usize>,
}

/// Identifies a [`Fields`] container within its registry.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub usize);

impl Fields {
    /// Assembles a container. Field names must already be unique.
    pub(crate) fn new(
        id: EntityId,
        type_name: String,
        table_name: String,
        base_alias: String,
        fields: Vec<Field>,
        joins: IndexMap<String, Join>,
    ) -> Fields {
        let by_name = fields
            .iter()
            .map(|field| (field.name.clone(), field.id.index))
            .collect();

        Fields {
            id,
            type_name,
            table_name,
            base_alias,
            fields,
            joins,
            by_name,
        }
    }

    /// Returns the field with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id belongs to another container or is out of range.
    #[track_caller]
    pub fn field(&self, id: impl Into<FieldId>) -> &Field {
        let id = id.into();
        assert_eq!(self.id, id.entity, "field id belongs to another entity");
        &self.fields[id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.by_name.get(name).map(|index| &self.fields[*index])
    }

    pub fn field_by_property(&self, property: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.property_name == property)
    }

    pub fn join(&self, alias: &str) -> Option<&Join> {
        self.joins.get(alias)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn primary_keys(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_primary_key())
    }

    /// The auto-incremented primary key, if the entity has exactly one.
    pub fn identity(&self) -> Option<&Field> {
        let mut identity = self.fields.iter().filter(|field| field.is_identity());
        match (identity.next(), identity.next()) {
            (Some(field), None) => Some(field),
            _ => None,
        }
    }

    pub fn foreign_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_foreign())
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl std::ops::Index<&str> for Fields {
    type Output = Field;

    #[track_caller]
    fn index(&self, name: &str) -> &Field {
        match self.field_by_name(name) {
            Some(field) => field,
            None => panic!("no field named `{name}` in entity `{}`", self.type_name),
        }
    }
}

impl EntityId {
    /// Identifies a field of this entity by position.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId {
            entity: self,
            index,
        }
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntityId({})", self.0)
    }
}
