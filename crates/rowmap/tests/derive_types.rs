#![cfg(all(feature = "jiff", feature = "rust_decimal", feature = "uuid"))]

use pretty_assertions::assert_eq;
use rowmap::rust_decimal::Decimal;
use rowmap::uuid::Uuid;
use rowmap::{jiff, FieldType, Registry, Row, ValueType};
use std_util::prelude::*;

#[derive(Row)]
#[allow(dead_code)]
struct InvoiceRow {
    #[primary_key]
    id: Uuid,

    #[column("Amount", size = 18, scale = 2)]
    amount: Decimal,

    discount: Option<Decimal>,

    issued_at: jiff::Timestamp,
    due_on: jiff::civil::Date,
    local_issued: Option<jiff::civil::DateTime>,
    zoned: jiff::Zoned,
    cutoff: jiff::civil::Time,
}

#[test]
fn third_party_types_map_to_field_types() {
    let registry = Registry::new();
    let fields = assert_ok!(registry.fields::<InvoiceRow>());

    let types: Vec<_> = fields.iter().map(|field| (field.name.as_str(), field.ty)).collect();
    assert_eq!(
        types,
        [
            ("Id", FieldType::Guid),
            ("Amount", FieldType::Decimal),
            ("Discount", FieldType::Decimal),
            ("IssuedAt", FieldType::DateTime),
            ("DueOn", FieldType::DateTime),
            ("LocalIssued", FieldType::DateTime),
            ("Zoned", FieldType::DateTime),
            ("Cutoff", FieldType::Time),
        ]
    );
}

#[test]
fn nullability_follows_option() {
    let registry = Registry::new();
    let fields = assert_ok!(registry.fields::<InvoiceRow>());

    assert_eq!(fields["Amount"].value_type, ValueType::new(FieldType::Decimal, false));
    assert_eq!(fields["Discount"].value_type, ValueType::new(FieldType::Decimal, true));
    assert_eq!(fields["LocalIssued"].value_type.to_string(), "DateTime?");
    assert_eq!((fields["Amount"].size, fields["Amount"].scale), (18, 2));
    assert!(fields["Id"].is_primary_key());
}
