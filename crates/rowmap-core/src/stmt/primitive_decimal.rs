use super::{FieldType, Primitive};

impl Primitive for rust_decimal::Decimal {
    const FIELD_TYPE: FieldType = FieldType::Decimal;
}
