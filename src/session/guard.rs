//! Role gate for protected route trees.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routing convenience only: a modified client can navigate anywhere, so
//! the backend re-validates the bearer token and role on every endpoint.
//! The guard's job is keeping well-behaved navigation consistent with the
//! stored credential.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::routes;

use super::reader::{Session, read_session};
use super::use_session_store;

/// Outcome of a guard evaluation, in decision order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session role is in the allowed set: render the protected view.
    Allow,
    /// No session: send to the default login entry.
    RedirectToLogin,
    /// Authenticated but not an allowed role. Unknown roles land here too,
    /// never in `Allow`.
    RedirectToUnauthorized,
}

/// Pure routing decision for a protected view.
pub fn guard_decision(session: &Session, allowed: &[Role]) -> GuardOutcome {
    if !session.is_authenticated {
        return GuardOutcome::RedirectToLogin;
    }
    match &session.role {
        Some(role) if allowed.contains(role) => GuardOutcome::Allow,
        _ => GuardOutcome::RedirectToUnauthorized,
    }
}

/// Gate `children` behind the `allowed` roles.
///
/// The store read is synchronous, so the decision happens in the same
/// render turn with no loading state: render the children unchanged,
/// or redirect.
#[component]
pub fn RequireRole(
    /// Roles permitted to see the wrapped view. Must be non-empty.
    allowed: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    debug_assert!(!allowed.is_empty(), "a guard with no allowed roles locks everyone out");
    let store = use_session_store();
    move || match guard_decision(&read_session(&store), &allowed) {
        GuardOutcome::Allow => children().into_any(),
        GuardOutcome::RedirectToLogin => view! { <Redirect path=routes::LOGIN_PATIENT/> }.into_any(),
        GuardOutcome::RedirectToUnauthorized => {
            view! { <Redirect path=routes::UNAUTHORIZED/> }.into_any()
        }
    }
}
