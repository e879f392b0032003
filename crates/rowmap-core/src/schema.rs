//! Field metadata for declared entities.
//!
//! An [`Entity`] supplies a [`Declaration`]: its members in declaration order
//! and the tags attached to each. The [`Builder`] turns a declaration into an
//! immutable [`Fields`] container, and the [`Registry`] makes sure that
//! happens at most once per entity type.

mod builder;
pub use builder::Builder;

mod decl;
pub use decl::{ColumnTag, Declaration, Entity, JoinTag, Manual, Member, Tag, TagKind, TypeTag};

mod field;
pub use field::{Field, FieldFlags, FieldId, Origin, SelectLevel};

mod fields;
pub use fields::{EntityId, Fields};

pub mod flags;

mod join;
pub use join::{Join, JoinKind};

mod registry;
pub use registry::{Registry, State};

pub mod rules;

mod verify;

use crate::Result;
