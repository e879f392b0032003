//! The tag precedence table.
//!
//! Tags are applied rule by rule in [`RULES`] order, never in the order
//! they were declared. Each rule states whether it may replace a value the
//! entity author assigned by hand.

use super::{FieldFlags, JoinKind, JoinTag, Manual, Member, Origin, SelectLevel, Tag, TagKind};
use crate::stmt::{Criteria, FieldType, Value};
use crate::{Error, Result};
use std::collections::HashMap;

/// One entry of the precedence table.
pub struct Rule {
    pub kind: TagKind,
    pub overwrite: Overwrite,
    apply: fn(&RuleCx<'_>, &mut FieldDraft, &Tag, Overwrite) -> Result<()>,
}

/// Whether a rule may replace a manually assigned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// The tag value always wins.
    Always,

    /// A differing manual value is a conflict. An identical one is accepted.
    Never,
}

/// Where a draft value came from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    #[default]
    Default,
    Manual,
    Tag,
}

/// A value together with its source.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Assigned<T> {
    pub value: T,
    pub source: Source,
}

/// Entity-wide inputs to the rules.
#[derive(Debug, Clone, Copy)]
pub struct RuleCx<'a> {
    pub entity: &'a str,
    pub base_alias: &'a str,
}

/// A field under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDraft {
    pub property: String,
    pub ty: FieldType,
    pub nullable: bool,
    pub name: Assigned<String>,

    /// `None` until an expression is assigned; the builder then falls back
    /// to the base-alias-qualified name
    pub expression: Assigned<Option<String>>,

    pub caption: Assigned<Option<String>>,
    pub size: u32,
    pub scale: u32,
    pub default_value: Option<Value>,
    pub flags: FieldFlags,
    pub foreign_table: Option<String>,
    pub foreign_field: Option<String>,
    pub join_alias: Option<String>,
    pub origin: Option<Origin>,
    pub min_select_level: SelectLevel,
    pub natural_order: i32,
    pub textual_field: Option<String>,

    /// Joins declared by field-level tags
    pub joins: Vec<JoinTag>,
}

/// The precedence table.
pub static RULES: &[Rule] = &[
    Rule {
        kind: TagKind::Column,
        overwrite: Overwrite::Never,
        apply: apply_column,
    },
    Rule {
        kind: TagKind::Origin,
        overwrite: Overwrite::Always,
        apply: apply_origin,
    },
    Rule {
        kind: TagKind::Expression,
        overwrite: Overwrite::Always,
        apply: apply_expression,
    },
    Rule {
        kind: TagKind::DisplayName,
        overwrite: Overwrite::Always,
        apply: apply_display_name,
    },
    Rule {
        kind: TagKind::ForeignKey,
        overwrite: Overwrite::Always,
        apply: apply_foreign_key,
    },
    Rule {
        kind: TagKind::LeftJoin,
        overwrite: Overwrite::Always,
        apply: apply_left_join,
    },
    Rule {
        kind: TagKind::MinSelectLevel,
        overwrite: Overwrite::Always,
        apply: apply_min_select_level,
    },
    Rule {
        kind: TagKind::NaturalOrder,
        overwrite: Overwrite::Always,
        apply: apply_natural_order,
    },
    Rule {
        kind: TagKind::TextualField,
        overwrite: Overwrite::Always,
        apply: apply_textual_field,
    },
    Rule {
        kind: TagKind::Flags,
        overwrite: Overwrite::Always,
        apply: apply_flags,
    },
];

/// Applies `tags` to `draft` in precedence order.
///
/// Fails on the first rule that rejects its tag; the draft must then be
/// discarded.
pub fn apply(cx: &RuleCx<'_>, draft: &mut FieldDraft, tags: &[Tag]) -> Result<()> {
    check_arity(cx, &draft.property, tags)?;

    for rule in RULES {
        for tag in tags.iter().filter(|tag| tag.kind() == rule.kind) {
            (rule.apply)(cx, draft, tag, rule.overwrite)?;
        }
    }

    Ok(())
}

fn check_arity(cx: &RuleCx<'_>, property: &str, tags: &[Tag]) -> Result<()> {
    let mut seen = HashMap::new();

    for tag in tags {
        let kind = tag.kind();
        let count = seen.entry(kind).or_insert(0usize);
        *count += 1;

        if *count == 2 && !kind.repeatable() {
            return Err(Error::duplicate_tag(cx.entity, property, kind.name()));
        }
    }

    Ok(())
}

impl FieldDraft {
    /// Seeds a draft from the member's manual assignments.
    pub fn seed(member: &Member) -> FieldDraft {
        let Manual {
            name,
            expression,
            caption,
            size,
            scale,
            flags,
            default_value,
        } = member.manual.clone();

        FieldDraft {
            property: member.property.clone(),
            ty: member.ty,
            nullable: member.nullable,
            name: match name {
                Some(name) => Assigned::manual(name),
                None => Assigned::new(member.property.clone()),
            },
            expression: Assigned::from_manual(expression),
            caption: Assigned::from_manual(caption),
            size: size.unwrap_or(0),
            scale: scale.unwrap_or(0),
            default_value,
            flags: flags.unwrap_or_default(),
            foreign_table: None,
            foreign_field: None,
            join_alias: None,
            origin: None,
            min_select_level: SelectLevel::Default,
            natural_order: 0,
            textual_field: None,
            joins: vec![],
        }
    }
}

impl<T> Assigned<T> {
    pub fn new(value: T) -> Assigned<T> {
        Assigned {
            value,
            source: Source::Default,
        }
    }

    pub fn manual(value: T) -> Assigned<T> {
        Assigned {
            value,
            source: Source::Manual,
        }
    }

    pub fn is_manual(&self) -> bool {
        self.source == Source::Manual
    }

    /// Assigns a tag value, returning the value kept when `overwrite`
    /// forbids replacing a differing manual one.
    pub fn assign(&mut self, value: T, overwrite: Overwrite) -> std::result::Result<(), &T>
    where
        T: PartialEq,
    {
        if overwrite == Overwrite::Never && self.is_manual() && self.value != value {
            return Err(&self.value);
        }

        self.value = value;
        self.source = Source::Tag;
        Ok(())
    }
}

impl<T> Assigned<Option<T>> {
    fn from_manual(value: Option<T>) -> Assigned<Option<T>> {
        match value {
            Some(value) => Assigned::manual(Some(value)),
            None => Assigned::new(None),
        }
    }
}

fn required<'a>(cx: &RuleCx<'_>, property: &str, attribute: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::missing_required_attribute(cx.entity, property, attribute));
    }
    Ok(value)
}

/// Assigns a text value, reporting a refused overwrite as a conflict.
fn assign_text(
    cx: &RuleCx<'_>,
    property: &str,
    attribute: &'static str,
    slot: &mut Assigned<Option<String>>,
    value: String,
    overwrite: Overwrite,
) -> Result<()> {
    let Err(current) = slot.assign(Some(value.clone()), overwrite) else {
        return Ok(());
    };

    Err(Error::value_override_conflict(
        cx.entity,
        property,
        attribute,
        current.as_deref().unwrap_or_default(),
        value,
    ))
}

fn apply_column(cx: &RuleCx<'_>, draft: &mut FieldDraft, tag: &Tag, overwrite: Overwrite) -> Result<()> {
    let Tag::Column(column) = tag else {
        return Ok(());
    };

    let name = required(cx, &draft.property, "column name", &column.name)?;
    if let Err(current) = draft.name.assign(name.to_string(), overwrite) {
        return Err(Error::name_override_conflict(
            cx.entity,
            &draft.property,
            current.as_str(),
            name,
        ));
    }

    if let Some(size) = column.size {
        draft.size = size;
    }

    if let Some(scale) = column.scale {
        draft.scale = scale;
    }

    if let Some(default) = &column.default {
        draft.default_value = Some(default.clone());
    }

    Ok(())
}

fn apply_origin(cx: &RuleCx<'_>, draft: &mut FieldDraft, tag: &Tag, overwrite: Overwrite) -> Result<()> {
    let Tag::Origin(origin) = tag else {
        return Ok(());
    };

    let alias = required(cx, &draft.property, "origin join alias", &origin.join_alias)?;
    let column = required(cx, &draft.property, "origin column", &origin.column)?;

    assign_text(
        cx,
        &draft.property,
        "Expression",
        &mut draft.expression,
        format!("{alias}.{column}"),
        overwrite,
    )?;
    draft.join_alias = Some(alias.to_string());
    draft.origin = Some(Origin {
        join_alias: alias.to_string(),
        column: column.to_string(),
    });

    Ok(())
}

fn apply_expression(cx: &RuleCx<'_>, draft: &mut FieldDraft, tag: &Tag, overwrite: Overwrite) -> Result<()> {
    let Tag::Expression(expression) = tag else {
        return Ok(());
    };

    let expression = required(cx, &draft.property, "expression", expression)?;
    assign_text(
        cx,
        &draft.property,
        "Expression",
        &mut draft.expression,
        expression.to_string(),
        overwrite,
    )
}

fn apply_display_name(cx: &RuleCx<'_>, draft: &mut FieldDraft, tag: &Tag, overwrite: Overwrite) -> Result<()> {
    let Tag::DisplayName(caption) = tag else {
        return Ok(());
    };

    let caption = required(cx, &draft.property, "display name", caption)?;
    assign_text(
        cx,
        &draft.property,
        "Caption",
        &mut draft.caption,
        caption.to_string(),
        overwrite,
    )
}

fn apply_foreign_key(cx: &RuleCx<'_>, draft: &mut FieldDraft, tag: &Tag, _: Overwrite) -> Result<()> {
    let Tag::ForeignKey { table, field } = tag else {
        return Ok(());
    };

    let (table, field) = (table.trim(), field.trim());
    if table.is_empty() || field.is_empty() {
        return Err(Error::invalid_foreign_key_reference(
            cx.entity,
            &draft.property,
            table,
            field,
        ));
    }

    draft.foreign_table = Some(table.to_string());
    draft.foreign_field = Some(field.to_string());
    Ok(())
}

fn apply_left_join(cx: &RuleCx<'_>, draft: &mut FieldDraft, tag: &Tag, _: Overwrite) -> Result<()> {
    let Tag::LeftJoin { alias, table } = tag else {
        return Ok(());
    };

    let alias = required(cx, &draft.property, "join alias", alias)?;
    let (Some(foreign_table), Some(foreign_field)) = (&draft.foreign_table, &draft.foreign_field)
    else {
        return Err(Error::missing_required_attribute(
            cx.entity,
            &draft.property,
            "foreign key",
        ));
    };

    let table = match table {
        Some(table) => required(cx, &draft.property, "join table", table)?,
        None => foreign_table,
    };

    draft.joins.push(JoinTag {
        alias: alias.to_string(),
        table: table.to_string(),
        on: Criteria::column(alias, foreign_field.as_str())
            .eq(Criteria::column(cx.base_alias, draft.name.value.as_str())),
        kind: JoinKind::Left,
    });
    Ok(())
}

fn apply_min_select_level(_: &RuleCx<'_>, draft: &mut FieldDraft, tag: &Tag, _: Overwrite) -> Result<()> {
    if let Tag::MinSelectLevel(level) = tag {
        draft.min_select_level = *level;
    }
    Ok(())
}

fn apply_natural_order(_: &RuleCx<'_>, draft: &mut FieldDraft, tag: &Tag, _: Overwrite) -> Result<()> {
    if let Tag::NaturalOrder(order) = tag {
        draft.natural_order = *order;
    }
    Ok(())
}

fn apply_textual_field(cx: &RuleCx<'_>, draft: &mut FieldDraft, tag: &Tag, _: Overwrite) -> Result<()> {
    let Tag::TextualField(textual) = tag else {
        return Ok(());
    };

    let textual = required(cx, &draft.property, "textual field", textual)?;
    draft.textual_field = Some(textual.to_string());
    Ok(())
}

fn apply_flags(_: &RuleCx<'_>, draft: &mut FieldDraft, tag: &Tag, _: Overwrite) -> Result<()> {
    if let Tag::Flags { add, remove } = tag {
        draft.flags = (draft.flags | *add) - *remove;
    }
    Ok(())
}
