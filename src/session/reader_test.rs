use super::*;
use crate::net::types::{SessionRecord, SessionUser};
use crate::session::store::SessionStore;

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

#[test]
fn absent_record_reads_as_unauthenticated() {
    let store = SessionStore::in_memory();
    let session = read_session(&store);
    assert!(!session.is_authenticated);
    assert_eq!(session.user_id, None);
    assert_eq!(session.role, None);
}

#[test]
fn present_record_projects_identity_fields() {
    let store = SessionStore::in_memory();
    store.set(&record("abc", 7, Role::Doctor));
    let session = read_session(&store);
    assert!(session.is_authenticated);
    assert_eq!(session.user_id, Some(7));
    assert_eq!(session.role, Some(Role::Doctor));
}

#[test]
fn read_after_clear_is_never_stale() {
    let store = SessionStore::in_memory();
    store.set(&record("abc", 7, Role::Doctor));
    assert!(read_session(&store).is_authenticated);
    store.clear();
    assert!(!read_session(&store).is_authenticated);
}

#[test]
fn read_reflects_relogin_immediately() {
    let store = SessionStore::in_memory();
    store.set(&record("abc", 7, Role::Doctor));
    store.set(&record("xyz", 9, Role::Patient));
    let session = read_session(&store);
    assert_eq!(session.user_id, Some(9));
    assert_eq!(session.role, Some(Role::Patient));
}

#[test]
fn unknown_role_is_authenticated_but_unmatchable() {
    let store = SessionStore::in_memory();
    store.set(&record("abc", 7, Role::Unknown("NURSE".to_owned())));
    let session = read_session(&store);
    assert!(session.is_authenticated);
    assert_eq!(session.role, Some(Role::Unknown("NURSE".to_owned())));
}
