//! Admin panel: patient accounts.
//!
//! Same shape as the doctor panel. Creation goes through the public
//! registration endpoint (the backend has no separate admin-create path);
//! the returned session record is discarded so the admin's own stored
//! session is never overwritten.

#[cfg(test)]
#[path = "patient_table_test.rs"]
mod patient_table_test;

use leptos::prelude::*;

use crate::components::pagination::Pager;
#[cfg(any(test, feature = "csr"))]
use crate::net::api_users::UserQuery;
#[cfg(any(test, feature = "csr"))]
use crate::net::types::Role;
use crate::net::types::{Pagination, UserAccount};
use crate::net::use_api_client;
use crate::util::validate::{validate_patient_profile_input, validate_sign_up_input};

#[cfg(any(test, feature = "csr"))]
pub(crate) const PAGE_SIZE: u32 = 10;

#[cfg(any(test, feature = "csr"))]
pub(crate) fn patient_query(search: &str, page: u32) -> UserQuery {
    UserQuery {
        search: search.to_owned(),
        role: Some(Role::Patient),
        page,
        size: PAGE_SIZE,
    }
}

/// Patient management table with its dialogs.
#[component]
pub fn PatientTable() -> impl IntoView {
    let rows = RwSignal::new(Vec::<UserAccount>::new());
    let pagination = RwSignal::new(Pagination::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let page = RwSignal::new(1u32);
    let refresh = RwSignal::new(0u32);

    let show_create = RwSignal::new(false);
    let editing = RwSignal::new(None::<UserAccount>);
    let deleting = RwSignal::new(None::<UserAccount>);

    #[cfg(feature = "csr")]
    {
        let api = use_api_client();
        Effect::new(move || {
            refresh.track();
            let query = patient_query(&search.get(), page.get());
            let api = api.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_users::list_users(&api, &query).await {
                    Ok(envelope) => {
                        rows.set(envelope.data.users);
                        pagination.set(envelope.data.pagination);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        });
    }

    let reload = Callback::new(move |()| refresh.update(|n| *n += 1));
    let close_create = Callback::new(move |()| show_create.set(false));
    let close_edit = Callback::new(move |()| editing.set(None));
    let close_delete = Callback::new(move |()| deleting.set(None));

    view! {
        <div class="panel">
            <div class="panel__header">
                <h2>"Manage Patients"</h2>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "Add Patient"
                </button>
            </div>

            <div class="panel__filters">
                <input
                    class="form__input panel__search"
                    type="text"
                    placeholder="Search patients..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        search.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
            </div>

            <Show when=move || error.get().is_some()>
                <p class="panel__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading patients..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Contact"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|patient| {
                                    let edit_row = patient.clone();
                                    let delete_row = patient.clone();
                                    view! {
                                        <tr>
                                            <td>{patient.name.clone()}</td>
                                            <td>{patient.email.clone()}</td>
                                            <td>{patient.contact_number.clone().unwrap_or_default()}</td>
                                            <td class="data-table__actions">
                                                <button
                                                    class="btn"
                                                    on:click=move |_| editing.set(Some(edit_row.clone()))
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| deleting.set(Some(delete_row.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <Pager page=page pagination=pagination/>
            </Show>

            <Show when=move || show_create.get()>
                <CreatePatientDialog on_cancel=close_create on_saved=reload/>
            </Show>
            {move || {
                editing.get().map(|patient| {
                    view! { <EditPatientDialog patient=patient on_cancel=close_edit on_saved=reload/> }
                })
            }}
            {move || {
                deleting.get().map(|patient| {
                    view! { <DeletePatientDialog patient=patient on_cancel=close_delete on_saved=reload/> }
                })
            }}
        </div>
    }
}

/// Modal dialog registering a patient on the admin's behalf.
#[component]
fn CreatePatientDialog(on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let contact_number = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(String::new());

    let api = use_api_client();
    let submit = move |_| {
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
                notice.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                // Drop the returned session record: this registration is for
                // someone else, not the admin's own login.
                match crate::net::api_auth::register_patient(&api, &payload).await {
                    Ok(_record) => {
                        on_saved.run(());
                        on_cancel.run(());
                    }
                    Err(err) => {
                        notice.set(format!("Failed to create patient: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, payload);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Patient"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Address"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Birth Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || birth_date.get()
                        on:input=move |ev| birth_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Gender"
                    <select
                        class="dialog__input"
                        prop:value=move || gender.get()
                        on:change=move |ev| gender.set(event_target_value(&ev))
                    >
                        <option value="">"Select gender"</option>
                        <option value="MALE">"Male"</option>
                        <option value="FEMALE">"Female"</option>
                    </select>
                </label>
                <label class="dialog__label">
                    "Contact Number"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || contact_number.get()
                        on:input=move |ev| contact_number.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !notice.get().is_empty()>
                    <p class="dialog__error">{move || notice.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=submit>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Modal dialog editing an existing patient account.
#[component]
fn EditPatientDialog(patient: UserAccount, on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let user_id = patient.user_id;
    let name = RwSignal::new(patient.name);
    let email = RwSignal::new(patient.email);
    let address = RwSignal::new(patient.address.unwrap_or_default());
    let birth_date = RwSignal::new(
        crate::components::profile_form::birth_date_form_value(patient.birth_date.as_deref()),
    );
    let gender = RwSignal::new(
        crate::components::profile_form::gender_form_value(patient.gender).to_owned(),
    );
    let contact_number = RwSignal::new(patient.contact_number.unwrap_or_default());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(String::new());

    let api = use_api_client();
    let submit = move |_| {
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

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api_users::update_patient(&api, user_id, &payload).await {
                    Ok(()) => {
                        on_saved.run(());
                        on_cancel.run(());
                    }
                    Err(err) => {
                        notice.set(format!("Failed to update patient: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, payload);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Patient"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Address"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Birth Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || birth_date.get()
                        on:input=move |ev| birth_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Gender"
                    <select
                        class="dialog__input"
                        prop:value=move || gender.get()
                        on:change=move |ev| gender.set(event_target_value(&ev))
                    >
                        <option value="">"Select gender"</option>
                        <option value="MALE">"Male"</option>
                        <option value="FEMALE">"Female"</option>
                    </select>
                </label>
                <label class="dialog__label">
                    "Contact Number"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || contact_number.get()
                        on:input=move |ev| contact_number.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !notice.get().is_empty()>
                    <p class="dialog__error">{move || notice.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=submit>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog before deleting a patient account.
#[component]
fn DeletePatientDialog(patient: UserAccount, on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let user_id = patient.user_id;
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(String::new());

    let api = use_api_client();
    let submit = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api_users::delete_patient(&api, user_id).await {
                    Ok(()) => {
                        on_saved.run(());
                        on_cancel.run(());
                    }
                    Err(err) => {
                        notice.set(format!("Failed to delete patient: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &api;
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Patient"</h2>
                <p class="dialog__danger">
                    "This will permanently remove " {patient.name.clone()} " and their appointments."
                </p>
                <Show when=move || !notice.get().is_empty()>
                    <p class="dialog__error">{move || notice.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" disabled=move || busy.get() on:click=submit>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
