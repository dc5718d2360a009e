//! Role-gated clinic management frontend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Client-side rendered Leptos application: patients book appointments,
//! doctors work their queue, admins administer doctors, patients, and
//! appointments. `session` owns who-is-logged-in and every routing decision
//! derived from it; `net` talks to the REST backend; `pages` and
//! `components` render the role dashboards.
//!
//! Browser-only code (localStorage, HTTP, `window.location`) is gated
//! behind the `csr` feature so the default host build compiles every pure
//! decision path and runs the unit suite natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod util;
