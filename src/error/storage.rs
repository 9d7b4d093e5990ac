use std::fmt::{ Display, Formatter };

#[derive(Debug)]
pub enum StorageError {
    Unavailable(String),
    Read(String),
    Write(String),
    Corrupt(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            StorageError::Read(msg) => write!(f, "Storage Read Error: {}", msg),
            StorageError::Write(msg) => write!(f, "Storage Write Error: {}", msg),
            StorageError::Corrupt(msg) => write!(f, "Corrupt Persisted State: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Corrupt(error.to_string())
    }
}
