//! Dashboard toolbar with identity display and logout.

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod toolbar_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "csr"))]
use crate::routes;
use crate::session::use_session_store;

/// Every role logs out to the patient login entry; there is no unified
/// login route to target.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn logout_route() -> &'static str {
    routes::LOGIN_PATIENT
}

/// Toolbar display name: profile name when present, else the account id.
pub(crate) fn display_name(name: Option<&str>, user_id: Option<i64>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => user_id.map(|id| format!("user #{id}")).unwrap_or_default(),
    }
}

/// Header strip shared by the three dashboards.
#[component]
pub fn DashboardToolbar(title: &'static str) -> impl IntoView {
    let store = use_session_store();
    let record = store.get();
    let name = display_name(
        record.as_ref().and_then(|r| r.user.name.as_deref()),
        record.as_ref().map(|r| r.user.user_id),
    );

    let logout_store = store.clone();
    let on_logout = move |_| {
        logout_store.clear();
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(logout_route());
            }
        }
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__title">{title}</span>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">{name}</span>
            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
