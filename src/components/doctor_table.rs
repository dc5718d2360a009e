//! Admin panel: doctor accounts.
//!
//! List with search + pagination; create, edit, and delete through modal
//! dialogs. Every mutation reloads the current page.

#[cfg(test)]
#[path = "doctor_table_test.rs"]
mod doctor_table_test;

use leptos::prelude::*;

use crate::components::pagination::Pager;
#[cfg(any(test, feature = "csr"))]
use crate::net::api_users::UserQuery;
#[cfg(any(test, feature = "csr"))]
use crate::net::types::Role;
use crate::net::types::{Pagination, UserAccount};
use crate::net::use_api_client;
use crate::util::validate::{validate_create_doctor_input, validate_doctor_profile_input};

#[cfg(any(test, feature = "csr"))]
pub(crate) const PAGE_SIZE: u32 = 10;

#[cfg(any(test, feature = "csr"))]
pub(crate) fn doctor_query(search: &str, page: u32) -> UserQuery {
    UserQuery {
        search: search.to_owned(),
        role: Some(Role::Doctor),
        page,
        size: PAGE_SIZE,
    }
}

/// Doctor management table with its dialogs.
#[component]
pub fn DoctorTable() -> impl IntoView {
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
            let query = doctor_query(&search.get(), page.get());
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
                <h2>"Manage Doctors"</h2>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "Add Doctor"
                </button>
            </div>

            <div class="panel__filters">
                <input
                    class="form__input panel__search"
                    type="text"
                    placeholder="Search doctors..."
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

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading doctors..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Specialization"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|doctor| {
                                    let edit_row = doctor.clone();
                                    let delete_row = doctor.clone();
                                    view! {
                                        <tr>
                                            <td>{doctor.name.clone()}</td>
                                            <td>{doctor.email.clone()}</td>
                                            <td>{doctor.specialization.clone().unwrap_or_default()}</td>
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
                <CreateDoctorDialog on_cancel=close_create on_saved=reload/>
            </Show>
            {move || {
                editing.get().map(|doctor| {
                    view! { <EditDoctorDialog doctor=doctor on_cancel=close_edit on_saved=reload/> }
                })
            }}
            {move || {
                deleting.get().map(|doctor| {
                    view! { <DeleteDoctorDialog doctor=doctor on_cancel=close_delete on_saved=reload/> }
                })
            }}
        </div>
    }
}

/// Modal dialog creating a doctor account.
#[component]
fn CreateDoctorDialog(on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let specialization = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(String::new());

    let api = use_api_client();
    let submit = move |_| {
        if busy.get() {
            return;
        }
        let payload = match validate_create_doctor_input(
            &name.get(),
            &email.get(),
            &password.get(),
            &specialization.get(),
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
                match crate::net::api_users::create_doctor(&api, &payload).await {
                    Ok(()) => {
                        on_saved.run(());
                        on_cancel.run(());
                    }
                    Err(err) => {
                        notice.set(format!("Failed to create doctor: {err}"));
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
                <h2>"Add Doctor"</h2>
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
                    "Specialization"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || specialization.get()
                        on:input=move |ev| specialization.set(event_target_value(&ev))
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

/// Modal dialog editing an existing doctor account.
#[component]
fn EditDoctorDialog(doctor: UserAccount, on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let user_id = doctor.user_id;
    let name = RwSignal::new(doctor.name);
    let email = RwSignal::new(doctor.email);
    let specialization = RwSignal::new(doctor.specialization.unwrap_or_default());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(String::new());

    let api = use_api_client();
    let submit = move |_| {
        if busy.get() {
            return;
        }
        let payload =
            match validate_doctor_profile_input(&name.get(), &email.get(), &specialization.get()) {
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
                match crate::net::api_users::update_doctor(&api, user_id, &payload).await {
                    Ok(()) => {
                        on_saved.run(());
                        on_cancel.run(());
                    }
                    Err(err) => {
                        notice.set(format!("Failed to update doctor: {err}"));
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
                <h2>"Edit Doctor"</h2>
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
                    "Specialization"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || specialization.get()
                        on:input=move |ev| specialization.set(event_target_value(&ev))
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

/// Confirmation dialog before deleting a doctor account.
#[component]
fn DeleteDoctorDialog(doctor: UserAccount, on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let user_id = doctor.user_id;
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
                match crate::net::api_users::delete_doctor(&api, user_id).await {
                    Ok(()) => {
                        on_saved.run(());
                        on_cancel.run(());
                    }
                    Err(err) => {
                        notice.set(format!("Failed to delete doctor: {err}"));
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
                <h2>"Delete Doctor"</h2>
                <p class="dialog__danger">
                    "This will permanently remove " {doctor.name.clone()} " and their schedule."
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
