use std::fmt;

/// The logical kind of value a field stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Boolean value
    Boolean,

    /// Signed 16-bit integer
    Int16,

    /// Signed 32-bit integer
    Int32,

    /// Signed 64-bit integer
    Int64,

    /// Single precision float
    Single,

    /// Double precision float
    Double,

    /// Fixed precision decimal
    Decimal,

    /// Text
    String,

    /// Date and time
    DateTime,

    /// Time of day
    Time,

    /// Globally unique identifier
    Guid,

    /// Raw bytes
    ByteArray,
}

/// The semantic type of a field's value: its logical kind plus whether the
/// value may be absent.
///
/// This is deliberately independent of the Rust type used to declare the
/// field; two declarations with different host types but the same logical
/// shape compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueType {
    pub ty: FieldType,
    pub nullable: bool,
}

impl FieldType {
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Boolean => "Boolean",
            FieldType::Int16 => "Int16",
            FieldType::Int32 => "Int32",
            FieldType::Int64 => "Int64",
            FieldType::Single => "Single",
            FieldType::Double => "Double",
            FieldType::Decimal => "Decimal",
            FieldType::String => "String",
            FieldType::DateTime => "DateTime",
            FieldType::Time => "Time",
            FieldType::Guid => "Guid",
            FieldType::ByteArray => "ByteArray",
        }
    }

    /// Returns true for kinds that carry a numeric scale.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            FieldType::Int16
                | FieldType::Int32
                | FieldType::Int64
                | FieldType::Single
                | FieldType::Double
                | FieldType::Decimal
        )
    }

    /// Text and byte kinds are reference-like: absence is representable
    /// without a separate null marker.
    pub fn is_reference_like(self) -> bool {
        matches!(self, FieldType::String | FieldType::ByteArray)
    }
}

impl ValueType {
    pub fn new(ty: FieldType, nullable: bool) -> Self {
        ValueType {
            ty,
            // Text and bytes represent absence without a null marker
            nullable: nullable && !ty.is_reference_like(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ty.name())?;
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}
