use rowmap_core::schema::*;
use rowmap_core::stmt::FieldType;
use rowmap_core::Registry;
use std::any::TypeId;
use std::sync::atomic::{AtomicUsize, Ordering};
use std_util::prelude::*;

struct FaultyRow;

impl Entity for FaultyRow {
    fn declaration() -> Declaration {
        faulty()
    }
}

fn faulty() -> Declaration {
    Declaration::new("FaultyRow")
        .member(Member::new("CountryID", FieldType::Int32).tag(Tag::left_join("c")))
}

struct BasicRow;

impl Entity for BasicRow {
    fn declaration() -> Declaration {
        Declaration::new("BasicRow").member(Member::new("AString", FieldType::String))
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn failure_is_captured_once_and_replayed() {
    init_tracing();
    let registry = Registry::new();
    let key = TypeId::of::<FaultyRow>();
    let declared = AtomicUsize::new(0);
    let declare = || {
        declared.fetch_add(1, Ordering::SeqCst);
        faulty()
    };

    assert_eq!(registry.state_of(key), State::Unbuilt);

    let first = assert_err!(registry.fields_with(key, declare));
    assert!(first.to_string().contains("Missing"));
    assert_eq!(registry.state_of(key), State::Poisoned);
    assert_eq!(declared.load(Ordering::SeqCst), 1);

    for _ in 0..3 {
        let replay = assert_err!(registry.fields_with(key, declare));
        assert!(replay.ptr_eq(&first));
    }

    // Replays are served from the captured error without declaring again
    assert_eq!(declared.load(Ordering::SeqCst), 1);
    let replay = assert_err!(registry.fields::<FaultyRow>());
    assert!(replay.ptr_eq(&first));
}

#[test]
fn other_types_still_build() {
    init_tracing();
    let registry = Registry::new();

    assert_err!(registry.fields::<FaultyRow>());
    let basic = assert_ok!(registry.fields::<BasicRow>());

    assert_eq!(basic.table_name, "Basic");
    assert_eq!(registry.state::<BasicRow>(), State::Built);
    assert_eq!(registry.len(), 2);
}

#[test]
fn success_returns_the_same_container() {
    let registry = Registry::new();
    let a = assert_ok!(registry.fields::<BasicRow>());
    let b = assert_ok!(registry.fields::<BasicRow>());
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

#[test]
fn registries_are_independent() {
    let poisoned = Registry::new();
    assert_err!(poisoned.fields::<FaultyRow>());

    let fresh = Registry::new();
    assert_eq!(fresh.state::<FaultyRow>(), State::Unbuilt);
    assert!(fresh.is_empty());
}

#[test]
fn explicit_keys() {
    struct Key;

    let registry = Registry::new();
    let fields = assert_ok!(registry.fields_with(TypeId::of::<Key>(), || {
        Declaration::new("KeyedRow").member(Member::new("ID", FieldType::Int64))
    }));
    assert_eq!(fields.table_name, "Keyed");

    // The declaration is not consulted again
    let again = assert_ok!(registry.fields_with(TypeId::of::<Key>(), || {
        panic!("declaration requested twice")
    }));
    assert_eq!(again.id, fields.id);
}

#[test]
fn entity_ids_are_assigned_in_access_order() {
    let registry = Registry::new();
    let basic = assert_ok!(registry.fields::<BasicRow>());
    assert_err!(registry.fields::<FaultyRow>());

    assert_eq!(basic.id, EntityId(0));
    assert!(registry.get(EntityId(0)).is_some());
    assert_none!(registry.get(EntityId(1)));
    assert_none!(registry.get(EntityId(2)));
}
