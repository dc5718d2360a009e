//! Doctor dashboard: appointment queue plus own profile.
//!
//! Mounted behind `RequireRole([Doctor])`.

#[cfg(test)]
#[path = "dashboard_doctor_test.rs"]
mod dashboard_doctor_test;

use leptos::prelude::*;

use crate::components::appointment_table::{AppointmentScope, AppointmentTable};
use crate::components::profile_form::DoctorProfileForm;
use crate::components::toolbar::DashboardToolbar;
use crate::session::reader::read_session;
use crate::session::use_session_store;

/// Tabs on the doctor dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoctorTab {
    Appointments,
    Profile,
}

impl DoctorTab {
    pub const ALL: [DoctorTab; 2] = [DoctorTab::Appointments, DoctorTab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            DoctorTab::Appointments => "Appointments",
            DoctorTab::Profile => "My Profile",
        }
    }
}

/// Doctor landing page.
#[component]
pub fn DoctorDashboardPage() -> impl IntoView {
    let store = use_session_store();
    // The route guard guarantees a session here.
    let user_id = read_session(&store).user_id.unwrap_or_default();
    let tab = RwSignal::new(DoctorTab::Appointments);

    view! {
        <div class="dashboard-page">
            <DashboardToolbar title="Doctor Dashboard"/>
            <div class="dashboard-page__body">
                <aside class="sidebar">
                    {DoctorTab::ALL
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
                        DoctorTab::Appointments => {
                            view! { <AppointmentTable scope=AppointmentScope::Doctor/> }.into_any()
                        }
                        DoctorTab::Profile => view! { <DoctorProfileForm user_id=user_id/> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
