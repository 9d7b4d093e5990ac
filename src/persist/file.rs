use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use crate::error::StorageError;
use super::storage::KeyValueStorage;

/// Stores each key as `<dir>/<key>.json`. Used by native builds, where
/// there is no browser `localStorage`.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            StorageError::Unavailable(format!("Failed to create {}: {}", dir.display(), e))
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Store ids are plain identifiers; anything path-like would escape the directory
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(StorageError::Unavailable(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read(format!("{}: {}", path.display(), e))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::write(&path, value).map_err(|e| StorageError::Write(format!("{}: {}", path.display(), e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write(format!("{}: {}", path.display(), e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_survive_a_new_handle() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.set_item("theme", r#"{"isDarkTheme":true}"#).unwrap();

        let reopened = FileStorage::new(dir.path()).unwrap();
        assert_eq!(
            reopened.get_item("theme").unwrap().as_deref(),
            Some(r#"{"isDarkTheme":true}"#)
        );
        assert!(dir.path().join("theme.json").exists());
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.remove_item("webInfo").unwrap();
        assert_eq!(storage.get_item("webInfo").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert!(storage.set_item("../escape", "{}").is_err());
        assert!(storage.get_item("").is_err());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state").join("stores");
        let storage = FileStorage::new(&nested).unwrap();
        assert!(nested.is_dir());

        storage.set_item("theme", "{}").unwrap();
        assert!(nested.join("theme.json").is_file());
    }
}
