use super::{FieldFlags, JoinKind, Origin, SelectLevel};
use crate::stmt::{Criteria, FieldType, Primitive, Value};

/// A type whose field metadata is declared through tags.
///
/// `#[derive(Row)]` implements this trait. Hand-written implementations
/// build the [`Declaration`] with its builder methods.
pub trait Entity: 'static {
    fn declaration() -> Declaration;
}

/// The ordered members of an entity type and the tags declared on them.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Name of the declaring type, used for the default table name and in
    /// error messages
    pub type_name: String,

    /// Type-level tags
    pub tags: Vec<TypeTag>,

    /// Mapped members, in declaration order
    pub members: Vec<Member>,
}

/// Tags attached to the entity type itself.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeTag {
    TableName(String),
    Join(JoinTag),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinTag {
    pub alias: String,
    pub table: String,
    pub on: Criteria,
    pub kind: JoinKind,
}

/// One mapped member of an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Name of the declared property
    pub property: String,

    pub ty: FieldType,

    pub nullable: bool,

    /// Values assigned directly by the entity author
    pub manual: Manual,

    /// Field-level tags, in declaration order
    pub tags: Vec<Tag>,
}

/// Field properties assigned by hand rather than through tags.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Manual {
    pub name: Option<String>,
    pub expression: Option<String>,
    pub caption: Option<String>,
    pub size: Option<u32>,
    pub scale: Option<u32>,
    pub flags: Option<FieldFlags>,
    pub default_value: Option<Value>,
}

/// A field-level declarative tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    /// Names the column. May not rename a manually named field.
    Column(ColumnTag),

    /// Replaces the field's SQL expression
    Expression(String),

    /// Sets the field's caption
    DisplayName(String),

    ForeignKey { table: String, field: String },

    /// Joins the foreign table of this field's foreign key under `alias`.
    /// `table` overrides the foreign key's table.
    LeftJoin { alias: String, table: Option<String> },

    /// Reads the field from a column of a joined table
    Origin(Origin),

    MinSelectLevel(SelectLevel),

    NaturalOrder(i32),

    /// Names the field holding display text for this one
    TextualField(String),

    /// Adds and removes flags. May be repeated.
    Flags { add: FieldFlags, remove: FieldFlags },
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ColumnTag {
    pub name: String,
    pub size: Option<u32>,
    pub scale: Option<u32>,
    pub default: Option<Value>,
}

/// Discriminant of [`Tag`], used by the precedence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Column,
    Expression,
    DisplayName,
    ForeignKey,
    LeftJoin,
    Origin,
    MinSelectLevel,
    NaturalOrder,
    TextualField,
    Flags,
}

impl Declaration {
    pub fn new(type_name: impl Into<String>) -> Declaration {
        Declaration {
            type_name: type_name.into(),
            tags: vec![],
            members: vec![],
        }
    }

    pub fn tag(mut self, tag: TypeTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn table_name(self, name: impl Into<String>) -> Self {
        self.tag(TypeTag::TableName(name.into()))
    }

    pub fn join(self, join: JoinTag) -> Self {
        self.tag(TypeTag::Join(join))
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }
}

impl JoinTag {
    pub fn left(
        alias: impl Into<String>,
        table: impl Into<String>,
        on: impl Into<Criteria>,
    ) -> JoinTag {
        JoinTag {
            alias: alias.into(),
            table: table.into(),
            on: on.into(),
            kind: JoinKind::Left,
        }
    }

    pub fn inner(
        alias: impl Into<String>,
        table: impl Into<String>,
        on: impl Into<Criteria>,
    ) -> JoinTag {
        JoinTag {
            kind: JoinKind::Inner,
            ..JoinTag::left(alias, table, on)
        }
    }
}

impl Member {
    pub fn new(property: impl Into<String>, ty: FieldType) -> Member {
        Member {
            property: property.into(),
            ty,
            nullable: false,
            manual: Manual::default(),
            tags: vec![],
        }
    }

    /// A member whose logical type comes from a Rust type.
    pub fn of<T: Primitive>(property: impl Into<String>) -> Member {
        Member::new(property, T::FIELD_TYPE).nullable(T::NULLABLE)
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn manual(mut self, manual: Manual) -> Self {
        self.manual = manual;
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }
}

impl Manual {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn flags(mut self, flags: FieldFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

impl Tag {
    pub fn column(name: impl Into<String>) -> Tag {
        Tag::Column(ColumnTag::new(name))
    }

    pub fn expression(expression: impl Into<String>) -> Tag {
        Tag::Expression(expression.into())
    }

    pub fn display_name(caption: impl Into<String>) -> Tag {
        Tag::DisplayName(caption.into())
    }

    pub fn foreign_key(table: impl Into<String>, field: impl Into<String>) -> Tag {
        Tag::ForeignKey {
            table: table.into(),
            field: field.into(),
        }
    }

    pub fn left_join(alias: impl Into<String>) -> Tag {
        Tag::LeftJoin {
            alias: alias.into(),
            table: None,
        }
    }

    pub fn origin(join_alias: impl Into<String>, column: impl Into<String>) -> Tag {
        Tag::Origin(Origin {
            join_alias: join_alias.into(),
            column: column.into(),
        })
    }

    pub fn min_select_level(level: SelectLevel) -> Tag {
        Tag::MinSelectLevel(level)
    }

    pub fn natural_order(order: i32) -> Tag {
        Tag::NaturalOrder(order)
    }

    pub fn textual_field(field: impl Into<String>) -> Tag {
        Tag::TextualField(field.into())
    }

    pub fn add_flags(add: FieldFlags) -> Tag {
        Tag::Flags {
            add,
            remove: FieldFlags::empty(),
        }
    }

    pub fn remove_flags(remove: FieldFlags) -> Tag {
        Tag::Flags {
            add: FieldFlags::empty(),
            remove,
        }
    }

    pub fn primary_key() -> Tag {
        Tag::add_flags(FieldFlags::PRIMARY_KEY | FieldFlags::NOT_NULL)
    }

    /// An auto-incremented primary key. Identity values are generated by
    /// the database, so the field is neither inserted nor updated.
    pub fn identity() -> Tag {
        Tag::Flags {
            add: FieldFlags::IDENTITY,
            remove: FieldFlags::INSERTABLE | FieldFlags::UPDATABLE,
        }
    }

    pub fn not_null() -> Tag {
        Tag::add_flags(FieldFlags::NOT_NULL)
    }

    pub fn unique() -> Tag {
        Tag::add_flags(FieldFlags::UNIQUE)
    }

    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Column(_) => TagKind::Column,
            Tag::Expression(_) => TagKind::Expression,
            Tag::DisplayName(_) => TagKind::DisplayName,
            Tag::ForeignKey { .. } => TagKind::ForeignKey,
            Tag::LeftJoin { .. } => TagKind::LeftJoin,
            Tag::Origin(_) => TagKind::Origin,
            Tag::MinSelectLevel(_) => TagKind::MinSelectLevel,
            Tag::NaturalOrder(_) => TagKind::NaturalOrder,
            Tag::TextualField(_) => TagKind::TextualField,
            Tag::Flags { .. } => TagKind::Flags,
        }
    }
}

impl ColumnTag {
    pub fn new(name: impl Into<String>) -> ColumnTag {
        ColumnTag {
            name: name.into(),
            ..ColumnTag::default()
        }
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

impl From<ColumnTag> for Tag {
    fn from(value: ColumnTag) -> Self {
        Tag::Column(value)
    }
}

impl TagKind {
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Column => "column",
            TagKind::Expression => "expression",
            TagKind::DisplayName => "display_name",
            TagKind::ForeignKey => "foreign_key",
            TagKind::LeftJoin => "left_join",
            TagKind::Origin => "origin",
            TagKind::MinSelectLevel => "min_select_level",
            TagKind::NaturalOrder => "natural_order",
            TagKind::TextualField => "textual_field",
            TagKind::Flags => "flags",
        }
    }

    /// Whether the tag may appear more than once on a member.
    pub fn repeatable(self) -> bool {
        matches!(self, TagKind::Flags)
    }
}
