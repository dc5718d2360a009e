//! Credential store: the persisted session record under one storage key.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sole source of truth for "who is logged in". Guards, the root
//! redirector, and the request gateway all read through here; only the
//! login/registration flows write and only logout clears. The record is
//! replaced wholesale on every write, never patched.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use crate::net::types::SessionRecord;

/// Storage key holding the serialized [`SessionRecord`].
pub const SESSION_KEY: &str = "User";

/// Reasons the underlying storage could not be used.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Browser storage is missing or blocked (private mode, disabled).
    #[error("browser storage unavailable")]
    Unavailable,
    /// The storage API rejected the operation.
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Raw key/value persistence behind [`SessionStore`].
///
/// Browser `localStorage` in CSR builds; an in-memory map in tests and
/// host builds. `Send + Sync` so the store can live in Leptos context.
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

impl MemoryStorage {
    fn values(&self) -> std::sync::MutexGuard<'_, std::collections::HashMap<String, String>> {
        self.values.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values().remove(key);
        Ok(())
    }
}

/// `window.localStorage` backend.
///
/// Holds no JS handles; every call goes through `web_sys::window()`, so
/// the type itself stays `Send + Sync` even though it only works on the
/// browser's main thread.
#[cfg(feature = "csr")]
#[derive(Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?.remove_item(key).map_err(js_error)
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "csr")]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Access(format!("{err:?}"))
}

/// Owner of the persisted session record.
///
/// Cheap to clone; clones share one backend. Provided as app-wide context
/// rather than accessed as a global so tests can swap in [`MemoryStorage`].
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    /// Store over an explicit backend.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store over a fresh in-memory map.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    /// Store over browser `localStorage`; in-memory outside CSR builds.
    pub fn browser() -> Self {
        #[cfg(feature = "csr")]
        {
            Self::new(Arc::new(BrowserStorage))
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::in_memory()
        }
    }

    /// Persist `record` wholesale, replacing any prior session.
    pub fn set(&self, record: &SessionRecord) {
        let raw = match serde_json::to_string(record) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("session record did not serialize: {err}");
                return;
            }
        };
        if let Err(err) = self.backend.write(SESSION_KEY, &raw) {
            log::warn!("session record was not persisted: {err}");
        }
    }

    /// Current record, or `None` when logged out.
    ///
    /// Storage failures and unparseable values both degrade to `None`;
    /// reads through here never fail.
    pub fn get(&self) -> Option<SessionRecord> {
        self.try_get().unwrap_or_else(|err| {
            log::warn!("session read degraded to logged-out: {err}");
            None
        })
    }

    /// Like [`SessionStore::get`], but preserves backend failures.
    ///
    /// A corrupt value still degrades to `Ok(None)`; only storage
    /// inaccessibility is an error. The request gateway reads through here
    /// so a broken client fails loudly instead of quietly sending
    /// unauthenticated requests.
    pub fn try_get(&self) -> Result<Option<SessionRecord>, StorageError> {
        let Some(raw) = self.backend.read(SESSION_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                log::warn!("stored session record is corrupt, treating as logged out: {err}");
                Ok(None)
            }
        }
    }

    /// Remove the record; the user is logged out afterwards.
    pub fn clear(&self) {
        if let Err(err) = self.backend.remove(SESSION_KEY) {
            log::warn!("session record was not cleared: {err}");
        }
    }
}
