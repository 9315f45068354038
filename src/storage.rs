/// Key-value storage behind the user and review stores.
///
/// Persisted state is two JSON-serialized collections plus one scalar entry
/// for the active session, all living in the browser's localStorage.
use thiserror::Error;

/// JSON array of every account.
pub const USERS_KEY: &str = "skincare-users";
/// JSON array of every review, across all users.
pub const REVIEWS_KEY: &str = "skincare-reviews";
/// Serialized user record of the active session.
pub const SESSION_KEY: &str = "current-user";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("browser storage is not available")]
    Unavailable,
    #[error("failed to read '{key}' from storage")]
    Read { key: String },
    #[error("failed to write '{key}' to storage")]
    Write { key: String },
    #[error("stored data under '{key}' is malformed: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode data for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Synchronous string-keyed storage. Each browsing session is
/// single-writer/single-reader, so no locking is involved.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage(&self) -> Result<web_sys::Storage, StorageError> {
        gloo_utils::window()
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read { key: key.to_string() })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write { key: key.to_string() })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Write { key: key.to_string() })
    }
}

/// Shared in-memory map. The native-test stand-in for localStorage; clones
/// share the same underlying map so stores built over the same backend see
/// each other's writes.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Reads a JSON collection, treating an absent key as the empty collection.
/// Malformed JSON is fatal to the read.
pub fn read_collection<T, S>(backend: &S, key: &str) -> Result<Vec<T>, StorageError>
where
    T: serde::de::DeserializeOwned,
    S: StorageBackend,
{
    match backend.read(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: key.to_string(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

/// Serializes and writes a whole JSON collection back under its key.
pub fn write_collection<T, S>(backend: &S, key: &str, items: &[T]) -> Result<(), StorageError>
where
    T: serde::Serialize,
    S: StorageBackend,
{
    let raw = serde_json::to_string(items).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    backend.write(key, &raw)
}
