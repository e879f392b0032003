use super::{FieldType, Primitive};

impl Primitive for uuid::Uuid {
    const FIELD_TYPE: FieldType = FieldType::Guid;
}
