//! Login page shared by the three role portals.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/login-patient`, `/login-doctor`, and `/login-admin` render this one
//! component with different branding and post-login destinations. A
//! successful login writes the response record to the credential store
//! verbatim, then hard-navigates to the portal's dashboard; the route
//! guard re-checks the stored role there, so an admin who logs in through
//! the patient portal lands on the unauthorized page, not a dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::use_api_client;
use crate::routes;
use crate::session::use_session_store;
use crate::util::validate::validate_login_input;

/// Which login portal the route serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginPortal {
    Patient,
    Doctor,
    Admin,
}

impl LoginPortal {
    pub fn title(self) -> &'static str {
        match self {
            LoginPortal::Patient => "Patient Login",
            LoginPortal::Doctor => "Doctor Login",
            LoginPortal::Admin => "Admin Login",
        }
    }

    /// Destination after login, keyed by the portal used rather than the
    /// role the backend returns; the dashboard guard sorts out mismatches.
    pub fn dashboard_route(self) -> &'static str {
        match self {
            LoginPortal::Patient => routes::DASHBOARD_PATIENT,
            LoginPortal::Doctor => routes::DASHBOARD_DOCTOR,
            LoginPortal::Admin => routes::DASHBOARD_ADMIN,
        }
    }
}

/// Login form for one portal.
#[component]
pub fn LoginPage(portal: LoginPortal) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let api = use_api_client();
    let store = use_session_store();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_login_input(&email.get(), &password.get()) {
            Ok(payload) => payload,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Logging in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let store = store.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api_auth::login(&api, &payload).await {
                    Ok(record) => {
                        store.set(&record);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(portal.dashboard_route());
                        }
                    }
                    Err(err) => {
                        info.set(format!("Login failed: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, &store, payload);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{portal.title()}</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="example@mail.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || portal == LoginPortal::Patient>
                    <p class="login-card__subtitle">
                        "Don't have an account? "
                        <a href=routes::REGISTER_PATIENT>"Sign up"</a>
                    </p>
                </Show>
            </div>
        </div>
    }
}
