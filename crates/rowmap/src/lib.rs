//! Declarative field metadata for database rows.
//!
//! Annotate a struct with `#[derive(Row)]` and ask a [`Registry`] for its
//! [`Fields`]:
//!
//! ```
//! use rowmap::{Registry, Row};
//!
//! #[derive(Row)]
//! #[table = "People"]
//! #[join(alias = "c", table = "Country", on = "c.ID = T0.CountryID")]
//! struct PersonRow {
//!     #[identity]
//!     id: Option<i32>,
//!
//!     name: String,
//!
//!     #[expression("c.Name")]
//!     country_name: String,
//! }
//!
//! let registry = Registry::new();
//! let fields = registry.fields::<PersonRow>().unwrap();
//!
//! assert_eq!(fields.table_name, "People");
//! assert_eq!(fields["Name"].expression, "T0.Name");
//! assert!(fields["CountryName"].is_foreign());
//! ```

pub mod schema {
    pub use rowmap_core::schema::*;
}

pub mod sql {
    pub use rowmap_core::sql::*;
}

pub mod stmt {
    pub use rowmap_core::stmt::*;
}

pub use rowmap_core::schema::{
    Declaration, Entity, EntityId, Field, FieldFlags, FieldId, Fields, Join, JoinKind, Member,
    Registry, SelectLevel, State, Tag,
};
pub use rowmap_core::stmt::{Criteria, FieldType, Value, ValueType};
pub use rowmap_core::{Error, Result};

pub use rowmap_macros::Row;

#[cfg(feature = "jiff")]
pub use jiff;

#[cfg(feature = "rust_decimal")]
pub use rust_decimal;

#[cfg(feature = "uuid")]
pub use uuid;

#[doc(hidden)]
pub mod codegen_support {
    pub use rowmap_core::schema::{
        ColumnTag, Declaration, Entity, JoinTag, Manual, Member, SelectLevel, Tag,
    };
    pub use rowmap_core::stmt::{Criteria, Primitive, Value};
}
