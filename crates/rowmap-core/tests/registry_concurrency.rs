use rowmap_core::schema::*;
use rowmap_core::stmt::FieldType;
use rowmap_core::Registry;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;

static SLOW_DECLARED: AtomicUsize = AtomicUsize::new(0);

struct SlowRow;

impl Entity for SlowRow {
    fn declaration() -> Declaration {
        SLOW_DECLARED.fetch_add(1, Ordering::SeqCst);
        thread::sleep(std::time::Duration::from_millis(20));

        Declaration::new("SlowRow")
            .member(Member::new("ID", FieldType::Int32).tag(Tag::identity()))
            .member(Member::new("Name", FieldType::String))
    }
}

static BROKEN_DECLARED: AtomicUsize = AtomicUsize::new(0);

struct BrokenRow;

impl Entity for BrokenRow {
    fn declaration() -> Declaration {
        BROKEN_DECLARED.fetch_add(1, Ordering::SeqCst);
        thread::sleep(std::time::Duration::from_millis(20));

        Declaration::new("BrokenRow")
            .member(Member::new("A", FieldType::String).tag(Tag::column("X")))
            .member(Member::new("B", FieldType::String).tag(Tag::column("X")))
    }
}

#[test]
fn concurrent_first_access_builds_once() {
    let registry = Registry::new();
    let barrier = Barrier::new(THREADS);

    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    registry.fields::<SlowRow>()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect()
    });

    assert_eq!(SLOW_DECLARED.load(Ordering::SeqCst), 1);
    for fields in &results {
        assert!(Arc::ptr_eq(fields, &results[0]));
    }
}

#[test]
fn concurrent_failures_share_one_error() {
    let registry = Registry::new();
    let barrier = Barrier::new(THREADS);

    let errors: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    registry.fields::<BrokenRow>()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap_err())
            .collect()
    });

    assert_eq!(BROKEN_DECLARED.load(Ordering::SeqCst), 1);
    assert!(errors[0].is_duplicate_field_name());
    for err in &errors {
        assert!(err.ptr_eq(&errors[0]));
    }
}

#[test]
fn registry_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registry>();
    assert_send_sync::<rowmap_core::Error>();
    assert_send_sync::<Fields>();
}
