//! Values, logical types, and the criteria expressions used by joins.

mod criteria;
pub use criteria::{ColumnRef, Criteria};

mod op_binary;
pub use op_binary::BinaryOp;

mod params;
pub use params::{Params, Placeholder};

mod primitive;
pub use primitive::Primitive;

#[cfg(feature = "jiff")]
mod primitive_jiff;

#[cfg(feature = "rust_decimal")]
mod primitive_decimal;

#[cfg(feature = "uuid")]
mod primitive_uuid;

mod ty;
pub use ty::{FieldType, ValueType};

mod value;
pub use value::Value;
