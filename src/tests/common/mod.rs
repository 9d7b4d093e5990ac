use std::rc::Rc;
use crate::persist::{ KeyValueStorage, MemoryStorage };

pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A fresh in-memory medium plus a handle stores can own. Both point at the
/// same entries, so the test can drop stores and recreate them to simulate
/// an application restart.
pub fn shared_storage() -> (MemoryStorage, Rc<dyn KeyValueStorage>) {
    let storage = MemoryStorage::new();
    let handle: Rc<dyn KeyValueStorage> = Rc::new(storage.clone());
    (storage, handle)
}
