//! Appointment list shared by all three dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! One table, three scopes. The backend already restricts rows by the
//! caller's token (doctors see their queue, patients their bookings), so
//! the scope only decides which columns of actions render: admins get full
//! CRUD, doctors approve/reject, patients book and reschedule.

#[cfg(test)]
#[path = "appointment_table_test.rs"]
mod appointment_table_test;

use leptos::prelude::*;

use crate::components::pagination::Pager;
#[cfg(feature = "csr")]
use crate::net::api_appointments::AppointmentQuery;
use crate::net::api_appointments::appointment_datetime;
#[cfg(feature = "csr")]
use crate::net::api_users::UserQuery;
#[cfg(feature = "csr")]
use crate::net::types::Role;
use crate::net::types::{Appointment, AppointmentStatus, Pagination, UserAccount};
use crate::net::use_api_client;
use crate::util::format::{date_only, status_label, time_of_day};
use crate::util::validate::validate_appointment_input;

#[cfg(feature = "csr")]
pub(crate) const PAGE_SIZE: u32 = 10;
/// Page size when loading doctor/patient option lists for the selects.
#[cfg(feature = "csr")]
pub(crate) const OPTION_LIST_SIZE: u32 = 100;

/// Which role's view of the appointment list this table renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppointmentScope {
    Admin,
    Doctor,
    Patient,
}

pub(crate) fn can_edit(scope: AppointmentScope) -> bool {
    matches!(scope, AppointmentScope::Admin | AppointmentScope::Patient)
}

pub(crate) fn can_delete(scope: AppointmentScope) -> bool {
    scope == AppointmentScope::Admin
}

/// Doctors decide on appointments that are still awaiting a decision.
pub(crate) fn can_decide(scope: AppointmentScope, status: AppointmentStatus) -> bool {
    scope == AppointmentScope::Doctor && status == AppointmentStatus::Scheduled
}

pub(crate) fn parse_status_filter(raw: &str) -> Option<AppointmentStatus> {
    AppointmentStatus::ALL.into_iter().find(|status| status.as_str() == raw)
}

/// `<select>` values arrive as strings; empty means nothing chosen.
pub(crate) fn parse_selected_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

pub(crate) fn create_button_label(scope: AppointmentScope) -> Option<&'static str> {
    match scope {
        AppointmentScope::Admin => Some("Add Appointment"),
        AppointmentScope::Patient => Some("Book Appointment"),
        AppointmentScope::Doctor => None,
    }
}

/// Appointment table with filters, pager, and scope-dependent actions.
///
/// `session_user_id` is the booking patient for the patient scope; the
/// admin scope picks a patient in the dialog instead.
#[component]
pub fn AppointmentTable(
    scope: AppointmentScope,
    #[prop(optional, into)] session_user_id: Option<i64>,
) -> impl IntoView {
    let rows = RwSignal::new(Vec::<Appointment>::new());
    let pagination = RwSignal::new(Pagination::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let date_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let page = RwSignal::new(1u32);
    let refresh = RwSignal::new(0u32);
    let notice = RwSignal::new(String::new());

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<Appointment>);
    let deleting = RwSignal::new(None::<Appointment>);

    #[cfg(feature = "csr")]
    {
        let api = use_api_client();
        Effect::new(move || {
            refresh.track();
            let query = AppointmentQuery {
                date: date_filter.get(),
                status: parse_status_filter(&status_filter.get()),
                page: page.get(),
                size: PAGE_SIZE,
            };
            let api = api.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_appointments::list_appointments(&api, &query).await {
                    Ok(envelope) => {
                        rows.set(envelope.data.appointments);
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
    let close_form = Callback::new(move |()| {
        show_form.set(false);
        editing.set(None);
    });
    let close_delete = Callback::new(move |()| deleting.set(None));

    let api_decide = use_api_client();
    let decide = move |appointment_id: i64, status: AppointmentStatus| {
        #[cfg(feature = "csr")]
        {
            let api = api_decide.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api_appointments::update_appointment_status(&api, appointment_id, status)
                    .await
                {
                    Ok(()) => {
                        notice.set(format!("Appointment {}.", status_label(status).to_lowercase()));
                        refresh.update(|n| *n += 1);
                    }
                    Err(err) => notice.set(format!("Failed to update appointment: {err}")),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api_decide, appointment_id, status);
        }
    };

    view! {
        <div class="panel">
            <div class="panel__header">
                <h2>"Manage Appointments"</h2>
                {create_button_label(scope).map(|label| {
                    view! {
                        <button
                            class="btn btn--primary"
                            on:click=move |_| {
                                editing.set(None);
                                show_form.set(true);
                            }
                        >
                            {label}
                        </button>
                    }
                })}
            </div>

            <div class="panel__filters">
                <input
                    class="form__input"
                    type="date"
                    prop:value=move || date_filter.get()
                    on:input=move |ev| {
                        date_filter.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
                <select
                    class="form__input"
                    prop:value=move || status_filter.get()
                    on:change=move |ev| {
                        status_filter.set(event_target_value(&ev));
                        page.set(1);
                    }
                >
                    <option value="">"All statuses"</option>
                    {AppointmentStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! { <option value=status.as_str()>{status_label(status)}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <Show when=move || !date_filter.get().is_empty() || !status_filter.get().is_empty()>
                    <button
                        class="btn"
                        on:click=move |_| {
                            date_filter.set(String::new());
                            status_filter.set(String::new());
                            page.set(1);
                        }
                    >
                        "Clear filters"
                    </button>
                </Show>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="panel__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !notice.get().is_empty()>
                <p class="panel__notice">{move || notice.get()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading appointments..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Patient"</th>
                            <th>"Doctor"</th>
                            <th>"Date"</th>
                            <th>"Time"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            let decide = decide.clone();
                            move || {
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let edit_row = row.clone();
                                    let delete_row = row.clone();
                                    let row_id = row.appointment_id;
                                    let row_status = row.status;
                                    let decide_approve = decide.clone();
                                    let decide_reject = decide.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                {row.patient.as_ref().map(|p| p.name.clone()).unwrap_or_default()}
                                            </td>
                                            <td>
                                                {row.doctor.as_ref().map(|d| d.name.clone()).unwrap_or_default()}
                                            </td>
                                            <td>{date_only(&row.date).to_owned()}</td>
                                            <td>{time_of_day(&row.date).unwrap_or("--:--").to_owned()}</td>
                                            <td class="data-table__status">{status_label(row.status)}</td>
                                            <td class="data-table__actions">
                                                <Show when=move || can_decide(scope, row_status)>
                                                    <button
                                                        class="btn btn--primary"
                                                        on:click={
                                                            let decide = decide_approve.clone();
                                                            move |_| decide(row_id, AppointmentStatus::Approved)
                                                        }
                                                    >
                                                        "Approve"
                                                    </button>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click={
                                                            let decide = decide_reject.clone();
                                                            move |_| decide(row_id, AppointmentStatus::Rejected)
                                                        }
                                                    >
                                                        "Reject"
                                                    </button>
                                                </Show>
                                                <Show when=move || can_edit(scope)>
                                                    <button
                                                        class="btn"
                                                        on:click={
                                                            let row = edit_row.clone();
                                                            move |_| {
                                                                editing.set(Some(row.clone()));
                                                                show_form.set(true);
                                                            }
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                </Show>
                                                <Show when=move || can_delete(scope)>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click={
                                                            let row = delete_row.clone();
                                                            move |_| deleting.set(Some(row.clone()))
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }
                        }
                    </tbody>
                </table>
                <Pager page=page pagination=pagination/>
            </Show>

            <Show when=move || show_form.get()>
                <AppointmentFormDialog
                    scope=scope
                    session_user_id=session_user_id
                    editing=editing
                    on_cancel=close_form
                    on_saved=reload
                />
            </Show>
            {move || {
                deleting.get().map(|row| {
                    view! {
                        <DeleteAppointmentDialog
                            appointment=row
                            on_cancel=close_delete
                            on_saved=reload
                        />
                    }
                })
            }}
        </div>
    }
}

/// Create/edit dialog. Creation needs a patient: the admin picks one, the
/// patient scope books for the signed-in user. Edits keep the patient.
#[component]
fn AppointmentFormDialog(
    scope: AppointmentScope,
    session_user_id: Option<i64>,
    editing: RwSignal<Option<Appointment>>,
    on_cancel: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let initial = editing.get_untracked();
    let is_edit = initial.is_some();
    let appointment_id = initial.as_ref().map(|row| row.appointment_id);
    let current_status = initial.as_ref().map_or(AppointmentStatus::Scheduled, |row| row.status);

    let doctor_choice = RwSignal::new(
        initial
            .as_ref()
            .and_then(|row| row.doctor.as_ref())
            .map(|d| d.user_id.to_string())
            .unwrap_or_default(),
    );
    let patient_choice = RwSignal::new(String::new());
    let date = RwSignal::new(
        initial.as_ref().map(|row| date_only(&row.date).to_owned()).unwrap_or_default(),
    );
    let time = RwSignal::new(
        initial
            .as_ref()
            .and_then(|row| time_of_day(&row.date))
            .unwrap_or_default()
            .to_owned(),
    );
    let status_choice = RwSignal::new(current_status.as_str().to_owned());

    let doctors = RwSignal::new(Vec::<UserAccount>::new());
    let patients = RwSignal::new(Vec::<UserAccount>::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(String::new());

    let needs_patient_select = scope == AppointmentScope::Admin && !is_edit;

    #[cfg(feature = "csr")]
    {
        let api = use_api_client();
        let loaded = RwSignal::new(false);
        Effect::new(move || {
            if loaded.get() {
                return;
            }
            loaded.set(true);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let query = UserQuery {
                    search: String::new(),
                    role: None,
                    page: 1,
                    size: OPTION_LIST_SIZE,
                };
                match crate::net::api_users::list_doctors(&api, &query).await {
                    Ok(envelope) => doctors.set(envelope.data.users),
                    Err(err) => notice.set(format!("Failed to load doctors: {err}")),
                }
                if needs_patient_select {
                    let query = UserQuery {
                        search: String::new(),
                        role: Some(Role::Patient),
                        page: 1,
                        size: OPTION_LIST_SIZE,
                    };
                    match crate::net::api_users::list_users(&api, &query).await {
                        Ok(envelope) => patients.set(envelope.data.users),
                        Err(err) => notice.set(format!("Failed to load patients: {err}")),
                    }
                }
            });
        });
    }

    let api = use_api_client();
    let submit = move |_| {
        if busy.get() {
            return;
        }
        let (doctor_id, date_value, time_value) = match validate_appointment_input(
            parse_selected_id(&doctor_choice.get()),
            &date.get(),
            &time.get(),
        ) {
            Ok(parts) => parts,
            Err(message) => {
                notice.set(message.to_owned());
                return;
            }
        };
        let datetime = appointment_datetime(&date_value, &time_value);

        let patient_id = if needs_patient_select {
            parse_selected_id(&patient_choice.get())
        } else {
            session_user_id
        };
        if appointment_id.is_none() && patient_id.is_none() {
            notice.set("Patient is required".to_owned());
            return;
        }

        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = match appointment_id {
                    None => {
                        // patient_id presence was checked before spawning
                        let patient_id = patient_id.unwrap_or_default();
                        crate::net::api_appointments::create_appointment(
                            &api, patient_id, doctor_id, &datetime,
                        )
                        .await
                    }
                    Some(id) => {
                        let status = parse_status_filter(&status_choice.get_untracked())
                            .unwrap_or(current_status);
                        if scope == AppointmentScope::Admin {
                            crate::net::api_appointments::update_appointment_admin(
                                &api, id, doctor_id, &datetime, status,
                            )
                            .await
                        } else {
                            crate::net::api_appointments::update_appointment(
                                &api, id, doctor_id, &datetime, status,
                            )
                            .await
                        }
                    }
                };
                match result {
                    Ok(()) => {
                        on_saved.run(());
                        on_cancel.run(());
                    }
                    Err(err) => {
                        notice.set(format!("Failed to save appointment: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, doctor_id, datetime, patient_id);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit Appointment" } else { "Make Appointment" }}</h2>
                <Show when=move || needs_patient_select>
                    <label class="dialog__label">
                        "Patient"
                        <select
                            class="dialog__input"
                            prop:value=move || patient_choice.get()
                            on:change=move |ev| patient_choice.set(event_target_value(&ev))
                        >
                            <option value="" disabled hidden>
                                "Select Patient"
                            </option>
                            {move || {
                                patients
                                    .get()
                                    .into_iter()
                                    .map(|p| {
                                        view! {
                                            <option value=p.user_id.to_string()>{p.name.clone()}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                </Show>
                <label class="dialog__label">
                    "Doctor"
                    <select
                        class="dialog__input"
                        prop:value=move || doctor_choice.get()
                        on:change=move |ev| doctor_choice.set(event_target_value(&ev))
                    >
                        <option value="" disabled hidden>
                            "Select Doctor"
                        </option>
                        {move || {
                            doctors
                                .get()
                                .into_iter()
                                .map(|d| {
                                    let label = match &d.specialization {
                                        Some(s) => format!("{} - {s}", d.name),
                                        None => d.name.clone(),
                                    };
                                    view! { <option value=d.user_id.to_string()>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Time"
                    <input
                        class="dialog__input"
                        type="time"
                        prop:value=move || time.get()
                        on:input=move |ev| time.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || is_edit && scope == AppointmentScope::Admin>
                    <label class="dialog__label">
                        "Status"
                        <select
                            class="dialog__input"
                            prop:value=move || status_choice.get()
                            on:change=move |ev| status_choice.set(event_target_value(&ev))
                        >
                            {AppointmentStatus::ALL
                                .into_iter()
                                .map(|status| {
                                    view! {
                                        <option value=status.as_str()>{status_label(status)}</option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </Show>
                <Show when=move || !notice.get().is_empty()>
                    <p class="dialog__error">{move || notice.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=submit>
                        {if is_edit { "Save" } else { "Book" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog before deleting an appointment.
#[component]
fn DeleteAppointmentDialog(
    appointment: Appointment,
    on_cancel: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let appointment_id = appointment.appointment_id;
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
                match crate::net::api_appointments::delete_appointment(&api, appointment_id).await {
                    Ok(()) => {
                        on_saved.run(());
                        on_cancel.run(());
                    }
                    Err(err) => {
                        notice.set(format!("Failed to delete appointment: {err}"));
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
                <h2>"Delete Appointment"</h2>
                <p class="dialog__danger">"This will permanently delete this appointment."</p>
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
