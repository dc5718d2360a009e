//! Admin dashboard: sidebar-switched management panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `RequireRole([Admin])`. The page only arranges panels;
//! each table component owns its own data and dialogs.

#[cfg(test)]
#[path = "dashboard_admin_test.rs"]
mod dashboard_admin_test;

use leptos::prelude::*;

use crate::components::appointment_table::{AppointmentScope, AppointmentTable};
use crate::components::doctor_table::DoctorTable;
use crate::components::patient_table::PatientTable;
use crate::components::toolbar::DashboardToolbar;

/// Panels reachable from the admin sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminPanel {
    Doctors,
    Patients,
    Appointments,
}

impl AdminPanel {
    pub const ALL: [AdminPanel; 3] = [AdminPanel::Doctors, AdminPanel::Patients, AdminPanel::Appointments];

    pub fn label(self) -> &'static str {
        match self {
            AdminPanel::Doctors => "Doctors",
            AdminPanel::Patients => "Patients",
            AdminPanel::Appointments => "Appointments",
        }
    }
}

/// Admin landing page.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let panel = RwSignal::new(AdminPanel::Doctors);

    view! {
        <div class="dashboard-page">
            <DashboardToolbar title="Admin Dashboard"/>
            <div class="dashboard-page__body">
                <aside class="sidebar">
                    {AdminPanel::ALL
                        .into_iter()
                        .map(|item| {
                            view! {
                                <button
                                    class="sidebar__item"
                                    class=("sidebar__item--active", move || panel.get() == item)
                                    on:click=move |_| panel.set(item)
                                >
                                    {item.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </aside>
                <main class="dashboard-page__content">
                    {move || match panel.get() {
                        AdminPanel::Doctors => view! { <DoctorTable/> }.into_any(),
                        AdminPanel::Patients => view! { <PatientTable/> }.into_any(),
                        AdminPanel::Appointments => {
                            view! { <AppointmentTable scope=AppointmentScope::Admin/> }.into_any()
                        }
                    }}
                </main>
            </div>
        </div>
    }
}
