//! Read-only projection of the credential store.

#[cfg(test)]
#[path = "reader_test.rs"]
mod reader_test;

use crate::net::types::Role;

use super::store::SessionStore;

/// What UI logic may know about the current session.
///
/// Derived fresh from the store on every call and discarded after the
/// render or request that needed it; holding one across navigations would
/// reintroduce the stale-cache problem the store exists to avoid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<i64>,
    pub role: Option<Role>,
    pub is_authenticated: bool,
}

/// Project the store's current record into a [`Session`] view.
pub fn read_session(store: &SessionStore) -> Session {
    match store.get() {
        Some(record) => Session {
            user_id: Some(record.user.user_id),
            role: Some(record.user.role),
            is_authenticated: true,
        },
        None => Session::default(),
    }
}
