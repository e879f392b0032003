use rowmap::{Registry, Row, State};
use std_util::prelude::*;

#[derive(Row)]
#[allow(dead_code)]
struct FaultyRow {
    #[left_join("c")]
    country_id: Option<i32>,
}

#[derive(Row)]
#[allow(dead_code)]
struct InvalidColumnRow {
    #[manual(name = "Manual")]
    #[column("Column")]
    r#override: String,
}

#[derive(Row)]
#[allow(dead_code)]
#[join(alias = "c", table = "Country", on = "c.ID = T0.CountryID")]
struct DuplicateJoinRow {
    #[foreign_key("City", "ID")]
    #[left_join("c")]
    city_id: Option<i32>,
}

#[derive(Row)]
#[allow(dead_code)]
struct HealthyRow {
    name: String,
}

#[test]
fn missing_foreign_key_fails() {
    let registry = Registry::new();
    let err = assert_err!(registry.fields::<FaultyRow>());

    assert!(err.is_missing_required_attribute());
    assert!(err.to_string().contains("Missing"), "{err}");
    assert_eq!(err.subject(), Some("CountryId"));
}

#[test]
fn column_cant_override_manual_name() {
    let registry = Registry::new();
    let err = assert_err!(registry.fields::<InvalidColumnRow>());

    assert!(err.is_name_override_conflict());
    let msg = err.to_string();
    assert!(msg.contains("can't be overridden"), "{msg}");
    assert!(msg.contains("'Override'"), "{msg}");
}

#[test]
fn field_join_colliding_with_type_join() {
    let registry = Registry::new();
    let err = assert_err!(registry.fields::<DuplicateJoinRow>());
    assert!(err.is_duplicate_join_alias());
    assert_eq!(err.subject(), Some("c"));
}

#[test]
fn poisoned_error_is_replayed() {
    let registry = Registry::new();

    let first = assert_err!(registry.fields::<FaultyRow>());
    let second = assert_err!(registry.fields::<FaultyRow>());

    assert!(first.ptr_eq(&second));
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(registry.state::<FaultyRow>(), State::Poisoned);
}

#[test]
fn poison_is_isolated_per_type() {
    let registry = Registry::new();

    assert_err!(registry.fields::<InvalidColumnRow>());
    let healthy = assert_ok!(registry.fields::<HealthyRow>());

    assert_eq!(healthy.table_name, "Healthy");
    assert_eq!(registry.state::<InvalidColumnRow>(), State::Poisoned);
    assert_eq!(registry.state::<HealthyRow>(), State::Built);
}
