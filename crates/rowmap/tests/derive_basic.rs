use pretty_assertions::assert_eq;
use rowmap::{FieldFlags, FieldType, Registry, Row, SelectLevel, ValueType};
use std_util::prelude::*;

#[derive(Row)]
#[allow(dead_code)]
struct BasicRow {
    a_string: String,
    a_int32: Option<i32>,
}

#[test]
fn basic_row_has_default_mappings() {
    let registry = Registry::new();
    let fields = assert_ok!(registry.fields::<BasicRow>());

    assert_eq!(fields.table_name, "Basic");
    assert_eq!(fields.len(), 2);

    let a_string = &fields["AString"];
    assert_eq!(a_string.name, "AString");
    assert_eq!(a_string.expression, "T0.AString");
    assert_eq!(a_string.property_name, "AString");
    assert_eq!(a_string.flags, FieldFlags::DEFAULT);
    assert_eq!(a_string.size, 0);
    assert_eq!(a_string.scale, 0);
    assert_none!(a_string.default_value);
    assert_eq!(a_string.min_select_level, SelectLevel::Default);
    assert_none!(a_string.foreign_table);
    assert_none!(a_string.foreign_field);
    assert_none!(a_string.join_alias);
    assert_none!(a_string.referenced_aliases);
    assert_none!(a_string.origin);
    assert_eq!(a_string.natural_order, 0);
    assert_none!(a_string.textual_field);
    assert_none!(a_string.caption);
    assert_eq!(a_string.title(), "AString");
    assert_eq!(a_string.ty, FieldType::String);
    assert_eq!(a_string.value_type, ValueType::new(FieldType::String, false));
    assert_eq!(a_string.index(), 0);
    assert_eq!(a_string.entity(), fields.id);

    let a_int32 = &fields["AInt32"];
    assert_eq!(a_int32.expression, "T0.AInt32");
    assert_eq!(a_int32.flags, FieldFlags::DEFAULT);
    assert_eq!(a_int32.ty, FieldType::Int32);
    assert_eq!(a_int32.value_type.to_string(), "Int32?");
    assert_eq!(a_int32.index(), 1);
    assert_eq!(a_int32.entity(), fields.id);
}

#[test]
fn field_ids_resolve_through_the_registry() {
    let registry = Registry::new();
    let fields = assert_ok!(registry.fields::<BasicRow>());

    let id = fields["AInt32"].id;
    let owner = assert_some!(registry.get(id.entity));
    assert_eq!(owner.field(id).name, "AInt32");
}
