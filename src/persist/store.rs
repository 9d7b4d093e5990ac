use std::rc::Rc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use super::adapter::{ persist, rehydrate, PersistPaths };
use super::storage::KeyValueStorage;

/// State owned by one store, kept in sync with its persisted copy.
///
/// Construction rehydrates from storage before anyone can read the state.
/// Every `update` writes the configured fields back. Storage failures never
/// reach the caller: a failed read starts from `T::default()` and a failed
/// write is logged and dropped. A stored record is restored all-or-nothing:
/// one field that fails to deserialize discards the valid ones with it.
pub struct PersistedStore<T> {
    id: &'static str,
    state: T,
    storage: Rc<dyn KeyValueStorage>,
    paths: PersistPaths,
}

impl<T: Default + Serialize + DeserializeOwned> PersistedStore<T> {
    pub fn new(id: &'static str, storage: Rc<dyn KeyValueStorage>, paths: PersistPaths) -> Self {
        let state = match rehydrate(storage.as_ref(), id, T::default(), &paths) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Failed to rehydrate store '{}', using defaults: {}", id, e);
                T::default()
            }
        };

        Self { id, state, storage, paths }
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    /// Apply a mutation, then persist.
    pub fn update<R>(&mut self, mutate: impl FnOnce(&mut T) -> R) -> R {
        let result = mutate(&mut self.state);
        if let Err(e) = persist(self.storage.as_ref(), self.id, &self.state, &self.paths) {
            log::error!("Failed to persist store '{}': {}", self.id, e);
        }
        result
    }
}
