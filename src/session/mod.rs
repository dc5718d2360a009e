//! Session and authorization layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` owns the persisted credential, `reader` projects it for UI
//! logic, `guard` and `redirect` turn the projection into navigation. The
//! store is provided as router-wide context at app start, never reached
//! for as a global, so tests run against an in-memory backend.

pub mod guard;
pub mod reader;
pub mod redirect;
pub mod store;

use leptos::prelude::*;

use self::store::SessionStore;

/// Install `store` as context for the component tree below the caller.
pub fn provide_session_store(store: SessionStore) {
    provide_context(store);
}

/// The session store provided at app start.
///
/// Panics outside the app tree; components have no sensible fallback
/// session to run against.
pub fn use_session_store() -> SessionStore {
    expect_context::<SessionStore>()
}
