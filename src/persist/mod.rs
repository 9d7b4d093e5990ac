//! Persistence for stores: key-value storage media and the adapter that
//! writes selected store fields to them.

mod adapter;
mod file;
#[cfg(target_arch = "wasm32")]
mod local;
mod storage;
mod store;

use std::rc::Rc;

pub use adapter::{ clear, persist, rehydrate, PersistPaths };
pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;
pub use storage::{ KeyValueStorage, MemoryStorage };
pub use store::PersistedStore;

/// The durable medium for the current platform, or in-memory storage when
/// it cannot be opened.
pub fn default_storage() -> Rc<dyn KeyValueStorage> {
    #[cfg(target_arch = "wasm32")]
    let opened = LocalStorage::new().map(|s| Rc::new(s) as Rc<dyn KeyValueStorage>);

    #[cfg(not(target_arch = "wasm32"))]
    let opened = FileStorage::new(crate::configs::get_storage_dir())
        .map(|s| Rc::new(s) as Rc<dyn KeyValueStorage>);

    opened.unwrap_or_else(|e| {
        log::warn!("{}; state will not survive a restart", e);
        Rc::new(MemoryStorage::new())
    })
}
