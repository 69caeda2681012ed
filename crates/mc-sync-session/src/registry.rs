//! Per-session mapping between world entities and runtime IDs.
//!
//! Runtime IDs are what the client addresses entities by. They are local to
//! one session: `0` is the session's own actor, every other entity gets the
//! next value of a monotonic counter the first time it is shown.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::entity::{Entity, EntityId};

/// Runtime ID the client uses for its own player.
pub const SELF_RUNTIME_ID: u64 = 0;

#[derive(Default)]
struct Inner {
    runtime_ids: HashMap<EntityId, u64>,
    entities: HashMap<u64, Arc<dyn Entity>>,
    /// Last allocated runtime ID.
    current: u64,
}

/// Bidirectional entity <-> runtime ID map.
///
/// Lookups take the shared lock; assignment and release take the exclusive
/// lock once, so a lookup never observes one direction without the other.
pub struct EntityRegistry {
    self_id: EntityId,
    inner: RwLock<Inner>,
}

impl EntityRegistry {
    pub fn new(self_id: EntityId) -> Self {
        Self {
            self_id,
            inner: RwLock::new(Inner::default()),
        }
    }

    pub fn is_self(&self, entity: &dyn Entity) -> bool {
        entity.entity_id() == self.self_id
    }

    /// Runtime ID for `entity`, allocating one if it has none yet.
    pub fn assign_or_reuse(&self, entity: &Arc<dyn Entity>) -> u64 {
        let entity_id = entity.entity_id();
        if entity_id == self.self_id {
            return SELF_RUNTIME_ID;
        }

        let mut inner = self.inner.write();
        if let Some(&id) = inner.runtime_ids.get(&entity_id) {
            return id;
        }
        inner.current += 1;
        let id = inner.current;
        inner.runtime_ids.insert(entity_id, id);
        inner.entities.insert(id, Arc::clone(entity));
        id
    }

    pub fn lookup(&self, entity_id: EntityId) -> Option<u64> {
        if entity_id == self.self_id {
            return Some(SELF_RUNTIME_ID);
        }
        self.inner.read().runtime_ids.get(&entity_id).copied()
    }

    pub fn lookup_by_id(&self, runtime_id: u64) -> Option<Arc<dyn Entity>> {
        self.inner.read().entities.get(&runtime_id).cloned()
    }

    /// Release the mapping of a hidden entity and return the ID it had.
    ///
    /// Controllable entities keep their ID so that showing them again reuses
    /// it. The self entity and unmapped entities return `None`.
    pub fn release(&self, entity: &dyn Entity) -> Option<u64> {
        let entity_id = entity.entity_id();
        if entity_id == self.self_id {
            return None;
        }

        let mut inner = self.inner.write();
        let id = inner.runtime_ids.get(&entity_id).copied()?;
        if entity.controllable().is_none() {
            inner.runtime_ids.remove(&entity_id);
            inner.entities.remove(&id);
        }
        Some(id)
    }

    /// Drop every mapping. Used on session teardown.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.runtime_ids.clear();
        inner.entities.clear();
    }

    /// Number of live mappings, excluding the self entity.
    pub fn len(&self) -> usize {
        self.inner.read().runtime_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
