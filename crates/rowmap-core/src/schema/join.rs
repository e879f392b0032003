use crate::stmt::Criteria;

/// A table joined to an entity's base table under an alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// Alias the joined table is referenced by; unique within the entity
    pub alias: String,

    /// Name of the joined table
    pub table: String,

    /// The join condition
    pub on_criteria: Criteria,

    pub kind: JoinKind,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    #[default]
    Left,
    Inner,
}

impl Join {
    pub fn is_left(&self) -> bool {
        self.kind == JoinKind::Left
    }

    pub fn is_inner(&self) -> bool {
        self.kind == JoinKind::Inner
    }
}

impl JoinKind {
    pub fn as_sql(self) -> &'static str {
        match self {
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Inner => "INNER JOIN",
        }
    }
}
