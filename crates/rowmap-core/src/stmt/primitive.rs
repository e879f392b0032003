use super::FieldType;

/// Maps a Rust type used in a `#[derive(Row)]` struct to its logical field
/// type.
///
/// `Option<T>` is nullable and shares the field type of `T`.
pub trait Primitive {
    const FIELD_TYPE: FieldType;

    const NULLABLE: bool = false;
}

macro_rules! impl_primitive {
    ( $( $t:ty => $field_ty:ident ),+ $(,)? ) => {
        $(
            impl Primitive for $t {
                const FIELD_TYPE: FieldType = FieldType::$field_ty;
            }
        )+
    };
}

impl_primitive! {
    bool => Boolean,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Single,
    f64 => Double,
    String => String,
    Vec<u8> => ByteArray,
}

impl<T: Primitive> Primitive for Option<T> {
    const FIELD_TYPE: FieldType = T::FIELD_TYPE;

    const NULLABLE: bool = true;
}
