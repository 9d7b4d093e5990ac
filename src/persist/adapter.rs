use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{ Map, Value };
use crate::error::StorageError;
use super::storage::KeyValueStorage;

/// Which top-level fields of a store's state are written to storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PersistPaths {
    /// Every field of the state.
    All,
    /// Only the named fields, by their serialized names. Fields added to a
    /// state later are not persisted unless they are listed here.
    Only(&'static [&'static str]),
}

impl PersistPaths {
    pub fn allows(&self, field: &str) -> bool {
        match self {
            PersistPaths::All => true,
            PersistPaths::Only(fields) => fields.iter().any(|allowed| *allowed == field),
        }
    }
}

fn as_object(value: Value, store_id: &str) -> Result<Map<String, Value>, StorageError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(StorageError::Corrupt(format!("{}: expected an object, found {}", store_id, other))),
    }
}

fn select_fields(fields: Map<String, Value>, paths: &PersistPaths) -> Map<String, Value> {
    fields
        .into_iter()
        .filter(|(key, _)| paths.allows(key))
        .collect()
}

/// Serialize the allowed fields of `state` and write them under `store_id`.
pub fn persist<T: Serialize>(
    storage: &dyn KeyValueStorage,
    store_id: &str,
    state: &T,
    paths: &PersistPaths
) -> Result<(), StorageError> {
    let value = serde_json::to_value(state).map_err(|e| StorageError::Write(e.to_string()))?;
    let fields = match value {
        Value::Object(map) => map,
        other => {
            return Err(StorageError::Write(format!("{}: state is not an object: {}", store_id, other)));
        }
    };
    let raw = serde_json::to_string(&select_fields(fields, paths))
        .map_err(|e| StorageError::Write(e.to_string()))?;
    storage.set_item(store_id, &raw)?;
    log::debug!("Persisted store '{}' ({} bytes)", store_id, raw.len());
    Ok(())
}

/// Overwrite the allowed fields of `initial` with whatever was persisted
/// under `store_id`. Stored keys the state does not have are ignored, and
/// fields missing from storage keep their initial value.
pub fn rehydrate<T: Serialize + DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    store_id: &str,
    initial: T,
    paths: &PersistPaths
) -> Result<T, StorageError> {
    let Some(raw) = storage.get_item(store_id)? else {
        return Ok(initial);
    };

    let stored = as_object(serde_json::from_str(&raw)?, store_id)?;
    let mut fields = as_object(serde_json::to_value(&initial)?, store_id)?;
    let mut restored = 0;
    for (key, value) in select_fields(stored, paths) {
        if let Some(slot) = fields.get_mut(&key) {
            *slot = value;
            restored += 1;
        }
    }

    log::info!("Rehydrated store '{}' ({} fields)", store_id, restored);
    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// Drop the persisted copy of a store.
pub fn clear(storage: &dyn KeyValueStorage, store_id: &str) -> Result<(), StorageError> {
    storage.remove_item(store_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use crate::persist::MemoryStorage;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Draft {
        title: String,
        word_count: u32,
        cursor: u32,
    }

    const DRAFT_FIELDS: PersistPaths = PersistPaths::Only(&["title", "wordCount"]);

    #[test]
    fn test_only_allowed_fields_are_written() {
        let storage = MemoryStorage::new();
        let draft = Draft { title: "Hello".into(), word_count: 2, cursor: 7 };

        persist(&storage, "draft", &draft, &DRAFT_FIELDS).unwrap();

        let raw = storage.get_item("draft").unwrap().unwrap();
        let written: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(written, serde_json::json!({ "title": "Hello", "wordCount": 2 }));
    }

    #[test]
    fn test_fields_outside_allow_list_do_not_survive() {
        let storage = MemoryStorage::new();
        let draft = Draft { title: "Hello".into(), word_count: 2, cursor: 7 };
        persist(&storage, "draft", &draft, &DRAFT_FIELDS).unwrap();

        let restored = rehydrate(&storage, "draft", Draft::default(), &DRAFT_FIELDS).unwrap();
        assert_eq!(restored, Draft { title: "Hello".into(), word_count: 2, cursor: 0 });
    }

    #[test]
    fn test_whole_state_round_trips() {
        let storage = MemoryStorage::new();
        let draft = Draft { title: "Hello".into(), word_count: 2, cursor: 7 };
        persist(&storage, "draft", &draft, &PersistPaths::All).unwrap();

        let restored = rehydrate(&storage, "draft", Draft::default(), &PersistPaths::All).unwrap();
        assert_eq!(restored, draft);
    }

    #[test]
    fn test_rehydrate_without_stored_value_keeps_initial() {
        let storage = MemoryStorage::new();
        let initial = Draft { title: "Untitled".into(), word_count: 0, cursor: 3 };
        let restored = rehydrate(&storage, "draft", initial, &PersistPaths::All).unwrap();
        assert_eq!(restored.title, "Untitled");
        assert_eq!(restored.cursor, 3);
    }

    #[test]
    fn test_unknown_and_disallowed_stored_keys_are_ignored() {
        let storage = MemoryStorage::new();
        storage
            .set_item("draft", r#"{"title":"Kept","cursor":9,"legacy":true}"#)
            .unwrap();

        let restored = rehydrate(&storage, "draft", Draft::default(), &DRAFT_FIELDS).unwrap();
        assert_eq!(restored, Draft { title: "Kept".into(), word_count: 0, cursor: 0 });
    }

    #[test]
    fn test_corrupt_values_are_reported() {
        let storage = MemoryStorage::new();
        storage.set_item("draft", "not json").unwrap();
        let err = rehydrate(&storage, "draft", Draft::default(), &PersistPaths::All).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));

        storage.set_item("draft", "[1, 2]").unwrap();
        let err = rehydrate(&storage, "draft", Draft::default(), &PersistPaths::All).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));

        storage.set_item("draft", r#"{"wordCount":"many"}"#).unwrap();
        let err = rehydrate(&storage, "draft", Draft::default(), &PersistPaths::All).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("not representable"))
        }
    }

    #[test]
    fn test_serialization_failures_are_write_errors() {
        let storage = MemoryStorage::new();
        let err = persist(&storage, "draft", &Unserializable, &PersistPaths::All).unwrap_err();
        assert!(matches!(err, StorageError::Write(_)));

        let err = persist(&storage, "draft", &42u32, &PersistPaths::All).unwrap_err();
        assert!(matches!(err, StorageError::Write(_)));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clear_removes_persisted_copy() {
        let storage = MemoryStorage::new();
        persist(&storage, "draft", &Draft::default(), &PersistPaths::All).unwrap();
        clear(&storage, "draft").unwrap();
        assert!(storage.is_empty());
    }
}
