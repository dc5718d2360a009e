//! Patient dashboard: bookings, doctor directory, own profile.
//!
//! Mounted behind `RequireRole([Patient])`. Booking happens from the
//! appointment tab; the directory tab is browse-only.

#[cfg(test)]
#[path = "dashboard_patient_test.rs"]
mod dashboard_patient_test;

use leptos::prelude::*;

use crate::components::appointment_table::{AppointmentScope, AppointmentTable};
use crate::components::pagination::Pager;
use crate::components::profile_form::PatientProfileForm;
use crate::components::toolbar::DashboardToolbar;
#[cfg(feature = "csr")]
use crate::net::api_users::UserQuery;
use crate::net::types::{Pagination, UserAccount};
#[cfg(feature = "csr")]
use crate::net::use_api_client;
use crate::session::reader::read_session;
use crate::session::use_session_store;

#[cfg(feature = "csr")]
pub(crate) const DIRECTORY_PAGE_SIZE: u32 = 12;

/// Tabs on the patient dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatientTab {
    Appointments,
    Doctors,
    Profile,
}

impl PatientTab {
    pub const ALL: [PatientTab; 3] = [PatientTab::Appointments, PatientTab::Doctors, PatientTab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            PatientTab::Appointments => "My Appointments",
            PatientTab::Doctors => "Find a Doctor",
            PatientTab::Profile => "My Profile",
        }
    }
}

/// Patient landing page.
#[component]
pub fn PatientDashboardPage() -> impl IntoView {
    let store = use_session_store();
    // The route guard guarantees a session here.
    let user_id = read_session(&store).user_id.unwrap_or_default();
    let tab = RwSignal::new(PatientTab::Appointments);

    view! {
        <div class="dashboard-page">
            <DashboardToolbar title="Patient Dashboard"/>
            <div class="dashboard-page__body">
                <aside class="sidebar">
                    {PatientTab::ALL
                        .into_iter()
                        .map(|item| {
                            view! {
                                <button
                                    class="sidebar__item"
                                    class=("sidebar__item--active", move || tab.get() == item)
                                    on:click=move |_| tab.set(item)
                                >
                                    {item.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </aside>
                <main class="dashboard-page__content">
                    {move || match tab.get() {
                        PatientTab::Appointments => {
                            view! {
                                <AppointmentTable
                                    scope=AppointmentScope::Patient
                                    session_user_id=user_id
                                />
                            }
                            .into_any()
                        }
                        PatientTab::Doctors => view! { <DoctorDirectory/> }.into_any(),
                        PatientTab::Profile => {
                            view! { <PatientProfileForm user_id=user_id/> }.into_any()
                        }
                    }}
                </main>
            </div>
        </div>
    }
}

/// Browse-only doctor directory with search and paging.
#[component]
fn DoctorDirectory() -> impl IntoView {
    let rows = RwSignal::new(Vec::<UserAccount>::new());
    let pagination = RwSignal::new(Pagination::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let page = RwSignal::new(1u32);

    #[cfg(feature = "csr")]
    {
        let api = use_api_client();
        Effect::new(move || {
            let query = UserQuery {
                search: search.get(),
                role: None,
                page: page.get(),
                size: DIRECTORY_PAGE_SIZE,
            };
            let api = api.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api_users::list_doctors(&api, &query).await {
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

    view! {
        <div class="panel">
            <div class="panel__header">
                <h2>"Find a Doctor"</h2>
            </div>
            <div class="panel__filters">
                <input
                    class="form__input panel__search"
                    type="text"
                    placeholder="Search by name..."
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
                <div class="directory">
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|doctor| {
                                view! {
                                    <div class="directory__card">
                                        <span class="directory__name">{doctor.name.clone()}</span>
                                        <span class="directory__specialization">
                                            {doctor.specialization.clone().unwrap_or_else(|| "General".to_owned())}
                                        </span>
                                        <span class="directory__email">{doctor.email.clone()}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <Pager page=page pagination=pagination/>
            </Show>
        </div>
    }
}
