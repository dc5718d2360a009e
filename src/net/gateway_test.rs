use std::sync::Arc;

use super::*;
use crate::net::types::{Role, SessionRecord, SessionUser};
use crate::session::store::{SessionStore, StorageBackend, StorageError};

fn store_with(token: &str) -> SessionStore {
    let store = SessionStore::in_memory();
    store.set(&SessionRecord {
        token: token.to_owned(),
        user: SessionUser {
            user_id: 7,
            role: Role::Doctor,
            name: None,
            email: None,
        },
    });
    store
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
fn bearer_formats_the_header_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn stored_token_yields_bearer_header() {
    let store = store_with("abc");
    assert_eq!(authorization_header(&store), Ok(Some("Bearer abc".to_owned())));
}

#[test]
fn absent_session_sends_unauthenticated() {
    let store = SessionStore::in_memory();
    assert_eq!(authorization_header(&store), Ok(None));
}

#[test]
fn empty_token_sends_unauthenticated() {
    let store = store_with("");
    assert_eq!(authorization_header(&store), Ok(None));
}

#[test]
fn unreadable_store_rejects_request_construction() {
    let store = SessionStore::new(Arc::new(FailingStorage));
    assert_eq!(authorization_header(&store), Err(StorageError::Unavailable));
}

#[test]
fn storage_error_converts_into_api_error() {
    let err: ApiError = StorageError::Unavailable.into();
    assert_eq!(err, ApiError::Storage(StorageError::Unavailable));
}

#[test]
fn join_url_handles_slashes_on_both_sides() {
    assert_eq!(join_url("/api", "/user"), "/api/user");
    assert_eq!(join_url("/api/", "user"), "/api/user");
    assert_eq!(join_url("https://clinic.example/api", "appointment"), "https://clinic.example/api/appointment");
}

#[test]
fn status_error_display_is_the_backend_message() {
    let err = ApiError::Status {
        status: 401,
        message: "Invalid credentials".to_owned(),
    };
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn default_status_message_names_the_code() {
    assert_eq!(default_status_message(503), "request failed with status 503");
}

#[test]
fn client_reads_through_the_store_it_was_given() {
    let store = store_with("abc");
    let client = ApiClient::new(crate::net::config::ApiConfig::default(), store);
    assert_eq!(
        authorization_header(client.store()),
        Ok(Some("Bearer abc".to_owned()))
    );
}

#[test]
fn client_builds_urls_from_config() {
    let client = ApiClient::new(
        crate::net::config::ApiConfig {
            base_url: "https://clinic.example/api".to_owned(),
            timeout_ms: 1_000,
        },
        SessionStore::in_memory(),
    );
    assert_eq!(client.url("/appointment"), "https://clinic.example/api/appointment");
    assert_eq!(client.timeout_ms(), 1_000);
}
