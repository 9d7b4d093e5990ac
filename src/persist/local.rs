use wasm_bindgen::JsValue;
use web_sys::Storage;
use crate::error::StorageError;
use super::storage::KeyValueStorage;

/// The browser's `window.localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    inner: Storage,
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl LocalStorage {
    pub fn new() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("No window object".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_message(e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { inner })
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key).map_err(|e| StorageError::Read(js_message(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Throws QuotaExceededError when the origin is out of space
        self.inner.set_item(key, value).map_err(|e| StorageError::Write(js_message(e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key).map_err(|e| StorageError::Write(js_message(e)))
    }
}
