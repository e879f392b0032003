use super::{Builder, Declaration, Entity, EntityId, Fields, Result};
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::any::TypeId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Builds and caches the [`Fields`] of entity types.
///
/// Each type is built at most once. Concurrent first accesses block until
/// the build finishes, after which every access returns the same container.
/// A failed build poisons the type: every later access returns the error
/// the build produced, without building again. Other types are unaffected.
#[derive(Debug)]
pub struct Registry {
    builder: Builder,
    slots: Mutex<IndexMap<TypeId, Arc<Slot>>>,
}

/// Build state of an entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Unbuilt,
    Building,
    Built,
    Poisoned,
}

#[derive(Debug)]
struct Slot {
    id: EntityId,
    building: AtomicBool,
    outcome: OnceLock<Result<Arc<Fields>>>,
}

/// Marks a slot as building. The mark is cleared if the build unwinds;
/// otherwise the published outcome supersedes it.
struct Building<'a>(&'a AtomicBool);

impl Registry {
    pub fn new() -> Registry {
        Registry::with_builder(Builder::new())
    }

    pub fn with_builder(builder: Builder) -> Registry {
        Registry {
            builder,
            slots: Mutex::new(IndexMap::new()),
        }
    }

    pub fn builder(&self) -> &Builder {
        &self.builder
    }

    /// Returns the fields of `E`, building them on first access.
    pub fn fields<E: Entity>(&self) -> Result<Arc<Fields>> {
        self.fields_with(TypeId::of::<E>(), E::declaration)
    }

    /// Returns the fields registered under `key`, building them from
    /// `declare` on first access.
    ///
    /// `declare` is only called by the access that performs the build.
    pub fn fields_with(
        &self,
        key: TypeId,
        declare: impl FnOnce() -> Declaration,
    ) -> Result<Arc<Fields>> {
        let slot = self.slot(key);

        if let Some(outcome) = slot.outcome.get() {
            return replay(slot.id, outcome);
        }

        let outcome = slot.outcome.get_or_init(|| {
            let _building = Building::enter(&slot.building);
            let decl = declare();

            match self.builder.build(slot.id, &decl) {
                Ok(fields) => Ok(Arc::new(fields)),
                Err(err) => {
                    tracing::warn!(entity = %decl.type_name, id = ?slot.id, error = %err, "entity poisoned");
                    Err(err)
                }
            }
        });

        outcome.clone()
    }

    /// Reports the build state of `E`.
    pub fn state<E: Entity>(&self) -> State {
        self.state_of(TypeId::of::<E>())
    }

    pub fn state_of(&self, key: TypeId) -> State {
        let slot = match self.slots.lock().get(&key) {
            Some(slot) => slot.clone(),
            None => return State::Unbuilt,
        };

        match slot.outcome.get() {
            Some(Ok(_)) => State::Built,
            Some(Err(_)) => State::Poisoned,
            None if slot.building.load(Ordering::Acquire) => State::Building,
            None => State::Unbuilt,
        }
    }

    /// Resolves an entity id to its fields, if they were built.
    pub fn get(&self, id: EntityId) -> Option<Arc<Fields>> {
        let slot = self.slots.lock().get_index(id.0)?.1.clone();
        match slot.outcome.get() {
            Some(Ok(fields)) => Some(fields.clone()),
            _ => None,
        }
    }

    /// Number of entity types accessed so far.
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }

    fn slot(&self, key: TypeId) -> Arc<Slot> {
        let mut slots = self.slots.lock();
        let next = EntityId(slots.len());

        slots
            .entry(key)
            .or_insert_with(|| {
                Arc::new(Slot {
                    id: next,
                    building: AtomicBool::new(false),
                    outcome: OnceLock::new(),
                })
            })
            .clone()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn replay(id: EntityId, outcome: &Result<Arc<Fields>>) -> Result<Arc<Fields>> {
    if let Err(err) = outcome {
        tracing::trace!(?id, error = %err, "replaying poisoned entity");
    }
    outcome.clone()
}

impl<'a> Building<'a> {
    fn enter(flag: &'a AtomicBool) -> Building<'a> {
        flag.store(true, Ordering::Release);
        Building(flag)
    }
}

impl Drop for Building<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.0.store(false, Ordering::Release);
        }
    }
}
