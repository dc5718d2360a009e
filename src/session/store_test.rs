use std::sync::Arc;

use super::*;
use crate::net::types::{Role, SessionUser};

fn record(token: &str, user_id: i64, role: Role) -> SessionRecord {
    SessionRecord {
        token: token.to_owned(),
        user: SessionUser {
            user_id,
            role,
            name: None,
            email: None,
        },
    }
}

struct FailingStorage;

impl StorageBackend for FailingStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[test]
fn get_is_none_when_nothing_stored() {
    let store = SessionStore::in_memory();
    assert_eq!(store.get(), None);
}

#[test]
fn set_then_get_round_trips() {
    let store = SessionStore::in_memory();
    let session = record("abc", 7, Role::Doctor);
    store.set(&session);
    assert_eq!(store.get(), Some(session));
}

#[test]
fn set_replaces_prior_record_wholesale() {
    let store = SessionStore::in_memory();
    store.set(&record("first", 1, Role::Patient));
    store.set(&record("second", 2, Role::Admin));
    let current = store.get().unwrap();
    assert_eq!(current.token, "second");
    assert_eq!(current.user.user_id, 2);
}

#[test]
fn clear_removes_record() {
    let store = SessionStore::in_memory();
    store.set(&record("abc", 7, Role::Doctor));
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn corrupt_value_reads_as_logged_out() {
    let backend = Arc::new(MemoryStorage::default());
    backend.write(SESSION_KEY, "{not json").unwrap();
    let store = SessionStore::new(backend);
    assert_eq!(store.get(), None);
    assert_eq!(store.try_get(), Ok(None));
}

#[test]
fn unknown_role_does_not_invalidate_record() {
    let backend = Arc::new(MemoryStorage::default());
    backend
        .write(SESSION_KEY, r#"{"token":"t","user":{"user_id":3,"role":"NURSE"}}"#)
        .unwrap();
    let store = SessionStore::new(backend);
    let current = store.get().unwrap();
    assert_eq!(current.user.role, Role::Unknown("NURSE".to_owned()));
}

#[test]
fn get_degrades_backend_failure_to_none() {
    let store = SessionStore::new(Arc::new(FailingStorage));
    assert_eq!(store.get(), None);
}

#[test]
fn try_get_preserves_backend_failure() {
    let store = SessionStore::new(Arc::new(FailingStorage));
    assert_eq!(store.try_get(), Err(StorageError::Unavailable));
}
