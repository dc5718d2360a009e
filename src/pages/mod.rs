//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`. Role gating wraps the dashboard pages at the
//! router, not inside them.

pub mod dashboard_admin;
pub mod dashboard_doctor;
pub mod dashboard_patient;
pub mod login;
pub mod register;
pub mod unauthorized;
