//! Application shell: context provisioning and the route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store and API client are created once here and provided as
//! context, so every guard, page, and dialog below shares the same
//! credential source. Routes mirror the deployed URL surface exactly;
//! the dashboard routes are wrapped in role guards, everything else is
//! public.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::net::config::ApiConfig;
use crate::net::gateway::ApiClient;
use crate::net::provide_api_client;
use crate::net::types::Role;
use crate::pages::dashboard_admin::AdminDashboardPage;
use crate::pages::dashboard_doctor::DoctorDashboardPage;
use crate::pages::dashboard_patient::PatientDashboardPage;
use crate::pages::login::{LoginPage, LoginPortal};
use crate::pages::register::RegisterPage;
use crate::pages::unauthorized::UnauthorizedPage;
use crate::session::guard::RequireRole;
use crate::session::provide_session_store;
use crate::session::redirect::RootRedirect;
use crate::session::store::SessionStore;

/// Root component mounted by the CSR entry point.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::browser();
    provide_session_store(store.clone());
    provide_api_client(ApiClient::new(ApiConfig::from_build_env(), store));

    view! {
        <Title text="Clinic"/>
        <Router>
            <Routes fallback=|| view! { <p class="route-missing">"Page not found."</p> }>
                <Route path=path!("/") view=RootRedirect/>
                <Route
                    path=path!("/login-patient")
                    view=|| view! { <LoginPage portal=LoginPortal::Patient/> }
                />
                <Route
                    path=path!("/login-doctor")
                    view=|| view! { <LoginPage portal=LoginPortal::Doctor/> }
                />
                <Route
                    path=path!("/login-admin")
                    view=|| view! { <LoginPage portal=LoginPortal::Admin/> }
                />
                <Route path=path!("/register-patient") view=RegisterPage/>
                <Route
                    path=path!("/dashboard-admin")
                    view=|| {
                        view! {
                            <RequireRole allowed=vec![Role::Admin]>
                                <AdminDashboardPage/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=path!("/dashboard-doctor")
                    view=|| {
                        view! {
                            <RequireRole allowed=vec![Role::Doctor]>
                                <DoctorDashboardPage/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=path!("/dashboard-patient")
                    view=|| {
                        view! {
                            <RequireRole allowed=vec![Role::Patient]>
                                <PatientDashboardPage/>
                            </RequireRole>
                        }
                    }
                />
                <Route path=path!("/error") view=UnauthorizedPage/>
            </Routes>
        </Router>
    }
}
