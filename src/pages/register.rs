//! Patient self-registration page.
//!
//! Registration doubles as login: the backend returns a session record,
//! which is stored and followed straight to the patient dashboard.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::use_api_client;
use crate::routes;
use crate::session::use_session_store;
use crate::util::validate::validate_sign_up_input;

/// Route a freshly registered patient to their dashboard.
pub(crate) fn post_register_route() -> &'static str {
    routes::DASHBOARD_PATIENT
}

/// Patient sign-up form.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let contact_number = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let api = use_api_client();
    let store = use_session_store();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_sign_up_input(
            &name.get(),
            &email.get(),
            &password.get(),
            &address.get(),
            &birth_date.get(),
            &gender.get(),
            &contact_number.get(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let store = store.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api_auth::register_patient(&api, &payload).await {
                    Ok(record) => {
                        store.set(&record);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(post_register_route());
                        }
                    }
                    Err(err) => {
                        info.set(format!("Registration failed: {err}"));
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
            <div class="login-card login-card--wide">
                <h1>"Register Patient"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Enter your full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        placeholder="At least 6 characters"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Address"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="date"
                        prop:value=move || birth_date.get()
                        on:input=move |ev| birth_date.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || gender.get()
                        on:change=move |ev| gender.set(event_target_value(&ev))
                    >
                        <option value="">"Select gender"</option>
                        <option value="MALE">"Male"</option>
                        <option value="FEMALE">"Female"</option>
                    </select>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Contact number"
                        prop:value=move || contact_number.get()
                        on:input=move |ev| contact_number.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already have an account? "
                    <a href=routes::LOGIN_PATIENT>"Login"</a>
                </p>
            </div>
        </div>
    }
}
