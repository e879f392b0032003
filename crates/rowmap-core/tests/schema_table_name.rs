use pretty_assertions::assert_eq;
use rowmap_core::schema::*;
use std_util::prelude::*;

fn table_name(builder: &Builder, decl: Declaration) -> String {
    assert_ok!(builder.build(EntityId(0), &decl)).table_name
}

#[test]
fn row_suffix_is_stripped() {
    let builder = Builder::new();
    assert_eq!(table_name(&builder, Declaration::new("BasicRow")), "Basic");
    assert_eq!(table_name(&builder, Declaration::new("Customer")), "Customer");
    assert_eq!(table_name(&builder, Declaration::new("Row")), "Row");
}

#[test]
fn suffix_stripping_can_be_disabled() {
    let mut builder = Builder::new();
    builder.strip_row_suffix(false);
    assert_eq!(table_name(&builder, Declaration::new("BasicRow")), "BasicRow");
}

#[test]
fn prefix_applies_to_default_names_only() {
    let mut builder = Builder::new();
    builder.table_name_prefix("app_");

    assert_eq!(table_name(&builder, Declaration::new("BasicRow")), "app_Basic");
    assert_eq!(
        table_name(&builder, Declaration::new("ComplexRow").table_name("ComplexTable")),
        "ComplexTable"
    );
}

#[test]
fn custom_base_alias() {
    let mut builder = Builder::new();
    builder.base_alias("t");

    let decl = Declaration::new("BasicRow")
        .member(Member::new("Name", rowmap_core::stmt::FieldType::String))
        .member(
            Member::new("Both", rowmap_core::stmt::FieldType::String)
                .tag(Tag::expression("t.A + c.B")),
        )
        .member(
            Member::new("Base", rowmap_core::stmt::FieldType::String)
                .tag(Tag::expression("t.A + t.B")),
        );

    let fields = assert_ok!(builder.build(EntityId(0), &decl));
    assert_eq!(fields.base_alias, "t");
    assert_eq!(fields["Name"].expression, "t.Name");
    assert!(fields["Both"].is_calculated());
    assert!(!fields["Base"].is_foreign());
}
