use super::{FieldType, Primitive};

macro_rules! impl_jiff_primitive {
    ($ty:ty, $field_ty:ident) => {
        impl Primitive for $ty {
            const FIELD_TYPE: FieldType = FieldType::$field_ty;
        }
    };
}

impl_jiff_primitive!(jiff::Timestamp, DateTime);
impl_jiff_primitive!(jiff::Zoned, DateTime);
impl_jiff_primitive!(jiff::civil::Date, DateTime);
impl_jiff_primitive!(jiff::civil::DateTime, DateTime);
impl_jiff_primitive!(jiff::civil::Time, Time);
