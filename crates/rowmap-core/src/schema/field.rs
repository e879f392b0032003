use super::EntityId;
use crate::stmt::{FieldType, Value, ValueType};
use std::collections::BTreeSet;
use std::fmt;

/// Metadata for one mapped member of an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Identifies the owning container and the field's position in it.
    pub id: FieldId,

    /// Field name, unique within the container
    pub name: String,

    /// SQL expression selecting the field. Defaults to `{base_alias}.{name}`.
    pub expression: String,

    /// Name of the declared member
    pub property_name: String,

    pub flags: FieldFlags,

    pub size: u32,

    pub scale: u32,

    pub default_value: Option<Value>,

    pub min_select_level: SelectLevel,

    /// Set together with `foreign_field` by a foreign key tag
    pub foreign_table: Option<String>,

    pub foreign_field: Option<String>,

    /// Alias of the join the field's value comes through
    pub join_alias: Option<String>,

    /// Aliases referenced by an explicitly declared expression. `None` when
    /// the expression is the default column reference.
    pub referenced_aliases: Option<BTreeSet<String>>,

    pub origin: Option<Origin>,

    pub natural_order: i32,

    /// Field holding the display text for this field's value
    pub textual_field: Option<String>,

    /// Manually assigned or display-name supplied title
    pub caption: Option<String>,

    pub ty: FieldType,

    pub value_type: ValueType,
}

/// Identifies a field: its owning container and its index within it.
///
/// This is the field's only link to the container; it does not keep the
/// container alive.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId {
    pub entity: EntityId,
    pub index: usize,
}

/// The joined field a view-style field is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub join_alias: String,
    pub column: String,
}

/// The least selective query level at which a field is selected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelectLevel {
    #[default]
    Default,
    Always,
    Lookup,
    List,
    Details,
    Explicit,
    Never,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldFlags: u32 {
        const INSERTABLE = 1 << 0;
        const UPDATABLE = 1 << 1;
        const NOT_NULL = 1 << 2;
        const PRIMARY_KEY = 1 << 3;
        const AUTO_INCREMENT = 1 << 4;
        const UNIQUE = 1 << 5;
        const TRIM = 1 << 6;

        /// The expression references a table other than the base table.
        const FOREIGN = 1 << 7;

        /// The expression combines columns from more than one table.
        const CALCULATED = 1 << 8;

        const DEFAULT = Self::INSERTABLE.bits() | Self::UPDATABLE.bits() | Self::TRIM.bits();
        const IDENTITY = Self::PRIMARY_KEY.bits() | Self::AUTO_INCREMENT.bits() | Self::NOT_NULL.bits();
    }
}

impl Default for FieldFlags {
    fn default() -> Self {
        FieldFlags::DEFAULT
    }
}

impl Field {
    /// Position of the field within its container.
    pub fn index(&self) -> usize {
        self.id.index
    }

    /// The container the field belongs to.
    pub fn entity(&self) -> EntityId {
        self.id.entity
    }

    /// The caption if one is set, otherwise the field name.
    pub fn title(&self) -> &str {
        self.caption.as_deref().unwrap_or(&self.name)
    }

    pub fn is_foreign(&self) -> bool {
        self.flags.contains(FieldFlags::FOREIGN)
    }

    pub fn is_calculated(&self) -> bool {
        self.flags.contains(FieldFlags::CALCULATED)
    }

    pub fn is_primary_key(&self) -> bool {
        self.flags.contains(FieldFlags::PRIMARY_KEY)
    }

    pub fn is_identity(&self) -> bool {
        self.flags.contains(FieldFlags::IDENTITY)
    }

    pub fn is_nullable(&self) -> bool {
        !self.flags.contains(FieldFlags::NOT_NULL)
    }
}

impl From<&Self> for FieldId {
    fn from(val: &Self) -> Self {
        *val
    }
}

impl From<&Field> for FieldId {
    fn from(val: &Field) -> Self {
        val.id
    }
}

impl From<FieldId> for usize {
    fn from(val: FieldId) -> Self {
        val.index
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.entity.0, self.index)
    }
}
