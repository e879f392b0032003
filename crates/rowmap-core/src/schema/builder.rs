mod joins;
use joins::JoinRegistry;

use super::flags;
use super::rules::{self, FieldDraft, RuleCx};
use super::{Declaration, EntityId, Field, FieldFlags, Fields, TypeTag, Result};
use crate::stmt::ValueType;
use crate::Error;
use std::collections::HashSet;

/// Builds [`Fields`] containers from declarations.
#[derive(Debug, Clone)]
pub struct Builder {
    /// Alias of the entity's own table in field expressions
    base_alias: String,

    /// If set, prefix default table names with this string
    table_name_prefix: Option<String>,

    /// Strip a trailing `Row` from the type name when deriving the default
    /// table name
    strip_row_suffix: bool,
}

/// Used to track state during the build process
struct BuildFields<'a> {
    builder: &'a Builder,
    decl: &'a Declaration,
    id: EntityId,
    joins: JoinRegistry<'a>,
    names: HashSet<String>,
    fields: Vec<Field>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            base_alias: "T0".to_string(),
            table_name_prefix: None,
            strip_row_suffix: true,
        }
    }

    pub fn base_alias(&mut self, alias: &str) -> &mut Self {
        self.base_alias = alias.to_string();
        self
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn strip_row_suffix(&mut self, strip: bool) -> &mut Self {
        self.strip_row_suffix = strip;
        self
    }

    pub fn get_base_alias(&self) -> &str {
        &self.base_alias
    }

    /// Builds the fields of one entity.
    ///
    /// Either every member is processed successfully and a complete
    /// container is returned, or the first configuration error is.
    pub fn build(&self, id: EntityId, decl: &Declaration) -> Result<Fields> {
        tracing::debug!(entity = %decl.type_name, ?id, "building fields");

        let fields = BuildFields {
            builder: self,
            decl,
            id,
            joins: JoinRegistry::new(&decl.type_name, &self.base_alias),
            names: HashSet::new(),
            fields: Vec::with_capacity(decl.members.len()),
        }
        .build()?;

        tracing::debug!(
            entity = %fields.type_name,
            table = %fields.table_name,
            fields = fields.len(),
            joins = fields.joins.len(),
            "built fields"
        );

        Ok(fields)
    }

    fn default_table_name(&self, type_name: &str) -> String {
        let name = match type_name.strip_suffix("Row") {
            Some(stripped) if self.strip_row_suffix && !stripped.is_empty() => stripped,
            _ => type_name,
        };

        match &self.table_name_prefix {
            Some(prefix) => format!("{prefix}{name}"),
            None => name.to_string(),
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildFields<'_> {
    fn build(mut self) -> Result<Fields> {
        let decl = self.decl;
        let table_name = self.build_table_name()?;

        // Type-level joins are registered ahead of joins declared by fields
        for tag in &decl.tags {
            if let TypeTag::Join(join) = tag {
                self.joins.insert(&decl.type_name, join)?;
            }
        }

        let builder = self.builder;
        let cx = RuleCx {
            entity: &decl.type_name,
            base_alias: &builder.base_alias,
        };

        for member in &decl.members {
            let mut draft = FieldDraft::seed(member);
            rules::apply(&cx, &mut draft, &member.tags)?;

            for join in &draft.joins {
                self.joins.insert(&draft.property, join)?;
            }

            self.push_field(draft)?;
        }

        let fields = Fields::new(
            self.id,
            decl.type_name.clone(),
            table_name,
            builder.base_alias.clone(),
            self.fields,
            self.joins.into_joins(),
        );

        fields.verify()?;
        Ok(fields)
    }

    fn build_table_name(&self) -> Result<String> {
        let mut table_name: Option<&str> = None;

        for tag in &self.decl.tags {
            let TypeTag::TableName(name) = tag else {
                continue;
            };

            let name = name.trim();
            if name.is_empty() {
                return Err(Error::missing_required_attribute(
                    &self.decl.type_name,
                    &self.decl.type_name,
                    "table name",
                ));
            }

            if let Some(current) = table_name {
                return Err(Error::table_name_override_conflict(
                    &self.decl.type_name,
                    current,
                    name,
                ));
            }

            table_name = Some(name);
        }

        Ok(match table_name {
            Some(name) => name.to_string(),
            None => self.builder.default_table_name(&self.decl.type_name),
        })
    }

    fn push_field(&mut self, draft: FieldDraft) -> Result<()> {
        let base_alias = &self.builder.base_alias;
        let name = draft.name.value;

        if !self.names.insert(name.clone()) {
            return Err(Error::duplicate_field_name(&self.decl.type_name, name));
        }

        let (expression, referenced_aliases, flags, join_alias) = match draft.expression.value {
            Some(expression) => {
                let derived = flags::derive(&expression, base_alias);
                let flags = derived.apply(draft.flags);
                let join_alias = draft
                    .join_alias
                    .or_else(|| derived.join_alias(base_alias).map(str::to_string));
                (expression, Some(derived.aliases), flags, join_alias)
            }
            None => (
                format!("{base_alias}.{name}"),
                None,
                draft.flags - (FieldFlags::FOREIGN | FieldFlags::CALCULATED),
                draft.join_alias,
            ),
        };

        tracing::trace!(
            entity = %self.decl.type_name,
            field = %name,
            %expression,
            ?flags,
            "derived field flags"
        );

        self.fields.push(Field {
            id: self.id.field(self.fields.len()),
            name,
            expression,
            property_name: draft.property,
            flags,
            size: draft.size,
            scale: draft.scale,
            default_value: draft.default_value,
            min_select_level: draft.min_select_level,
            foreign_table: draft.foreign_table,
            foreign_field: draft.foreign_field,
            join_alias,
            referenced_aliases,
            origin: draft.origin,
            natural_order: draft.natural_order,
            textual_field: draft.textual_field,
            caption: draft.caption.value,
            ty: draft.ty,
            value_type: ValueType::new(draft.ty, draft.nullable),
        });

        Ok(())
    }
}
