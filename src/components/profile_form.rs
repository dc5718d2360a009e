//! Self-service profile editors for the doctor and patient dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both forms load the owning account once from `/user/detail/{id}` and
//! save through the role's update endpoint. The session record itself is
//! never rewritten here; profile fields are not authorization inputs.

#[cfg(test)]
#[path = "profile_form_test.rs"]
mod profile_form_test;

use leptos::prelude::*;

use crate::net::types::Gender;
#[cfg(feature = "csr")]
use crate::net::types::UserAccount;
use crate::net::use_api_client;
use crate::util::format::date_only;
use crate::util::validate::{validate_doctor_profile_input, validate_patient_profile_input};

/// Form default for the gender select when the profile has none recorded.
pub(crate) fn gender_form_value(gender: Option<Gender>) -> &'static str {
    gender.map_or("", Gender::as_str)
}

/// Form default for the birth-date input: date part only, empty when unset.
pub(crate) fn birth_date_form_value(birth_date: Option<&str>) -> String {
    birth_date.map(date_only).unwrap_or_default().to_owned()
}

/// Patient profile editor.
#[component]
pub fn PatientProfileForm(user_id: i64) -> impl IntoView {
    let api = use_api_client();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let contact_number = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        let api = api.clone();
        let loaded = RwSignal::new(false);
        Effect::new(move || {
            if loaded.get() {
                return;
            }
            loaded.set(true);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api_users::user_detail(&api, user_id).await {
                    Ok(envelope) => {
                        let account: UserAccount = envelope.data;
                        name.set(account.name);
                        email.set(account.email);
                        address.set(account.address.unwrap_or_default());
                        birth_date.set(birth_date_form_value(account.birth_date.as_deref()));
                        gender.set(gender_form_value(account.gender).to_owned());
                        contact_number.set(account.contact_number.unwrap_or_default());
                    }
                    Err(err) => notice.set(format!("Failed to load profile: {err}")),
                }
                loading.set(false);
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_patient_profile_input(
            &name.get(),
            &email.get(),
            &address.get(),
            &birth_date.get(),
            &gender.get(),
            &contact_number.get(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                notice.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        notice.set("Saving...".to_owned());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api_users::update_patient(&api, user_id, &payload).await {
                    Ok(()) => notice.set("Profile updated successfully.".to_owned()),
                    Err(err) => notice.set(format!("Failed to update profile: {err}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, payload);
        }
    };

    view! {
        <div class="profile-form">
            <h2>"My Profile"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading profile..."</p> }>
                <form class="form" on:submit=on_submit.clone()>
                    <label class="form__label">
                        "Name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Address"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Birth Date"
                        <input
                            class="form__input"
                            type="date"
                            prop:value=move || birth_date.get()
                            on:input=move |ev| birth_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Gender"
                        <select
                            class="form__input"
                            prop:value=move || gender.get()
                            on:change=move |ev| gender.set(event_target_value(&ev))
                        >
                            <option value="">"Select gender"</option>
                            <option value="MALE">"Male"</option>
                            <option value="FEMALE">"Female"</option>
                        </select>
                    </label>
                    <label class="form__label">
                        "Contact Number"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || contact_number.get()
                            on:input=move |ev| contact_number.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save Profile" }}
                    </button>
                </form>
            </Show>
            <Show when=move || !notice.get().is_empty()>
                <p class="form__notice">{move || notice.get()}</p>
            </Show>
        </div>
    }
}

/// Doctor profile editor.
#[component]
pub fn DoctorProfileForm(user_id: i64) -> impl IntoView {
    let api = use_api_client();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let specialization = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        let api = api.clone();
        let loaded = RwSignal::new(false);
        Effect::new(move || {
            if loaded.get() {
                return;
            }
            loaded.set(true);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api_users::user_detail(&api, user_id).await {
                    Ok(envelope) => {
                        let account: UserAccount = envelope.data;
                        name.set(account.name);
                        email.set(account.email);
                        specialization.set(account.specialization.unwrap_or_default());
                    }
                    Err(err) => notice.set(format!("Failed to load profile: {err}")),
                }
                loading.set(false);
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_doctor_profile_input(&name.get(), &email.get(), &specialization.get()) {
            Ok(payload) => payload,
            Err(message) => {
                notice.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        notice.set("Saving...".to_owned());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api_users::update_doctor(&api, user_id, &payload).await {
                    Ok(()) => notice.set("Profile updated successfully.".to_owned()),
                    Err(err) => notice.set(format!("Failed to update profile: {err}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, payload);
        }
    };

    view! {
        <div class="profile-form">
            <h2>"My Profile"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading profile..."</p> }>
                <form class="form" on:submit=on_submit.clone()>
                    <label class="form__label">
                        "Name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Specialization"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || specialization.get()
                            on:input=move |ev| specialization.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save Profile" }}
                    </button>
                </form>
            </Show>
            <Show when=move || !notice.get().is_empty()>
                <p class="form__notice">{move || notice.get()}</p>
            </Show>
        </div>
    }
}
