//! Access-denied page for authenticated users outside the allowed roles.
//!
//! Distinct from the login redirect: landing here means a session exists
//! but its role does not open this door.

use leptos::prelude::*;

use crate::routes;

/// Static unauthorized screen mounted at `/error`.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <div class="unauthorized-card">
                <span class="unauthorized-card__icon" aria-hidden="true">
                    "!"
                </span>
                <h1>"Access Denied"</h1>
                <p>"You are not authorized to access this page."</p>
                <a class="btn btn--primary" href=routes::ROOT>
                    "Back to my dashboard"
                </a>
            </div>
        </div>
    }
}
