//! Reusable UI components below the page level.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped orchestration (guards, tabs, logout) and
//! delegate list/form rendering to these components. Each table owns its
//! own fetching, filters, and dialogs.

pub mod appointment_table;
pub mod doctor_table;
pub mod pagination;
pub mod patient_table;
pub mod profile_form;
pub mod toolbar;
