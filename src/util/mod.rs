//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure functions only; anything touching the browser lives in `session`
//! or `net` behind the `csr` gate.

pub mod format;
pub mod validate;
