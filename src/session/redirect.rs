//! Entry-point dispatch to the role's landing route.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::routes;

use super::reader::read_session;
use super::use_session_store;

/// Landing route for a session role; the login entry when logged out or
/// the role is unrecognized.
pub fn landing_route(role: Option<&Role>) -> &'static str {
    match role {
        Some(Role::Admin) => routes::DASHBOARD_ADMIN,
        Some(Role::Doctor) => routes::DASHBOARD_DOCTOR,
        Some(Role::Patient) => routes::DASHBOARD_PATIENT,
        Some(Role::Unknown(_)) | None => routes::LOGIN_PATIENT,
    }
}

/// Dispatcher mounted at `/`: reads the session once and issues a single
/// redirect. No fetches, no state.
#[component]
pub fn RootRedirect() -> impl IntoView {
    let store = use_session_store();
    let session = read_session(&store);
    view! { <Redirect path=landing_route(session.role.as_ref())/> }
}
