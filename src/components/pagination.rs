//! Pager strip shared by the list tables.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::net::types::Pagination;

/// Whether a previous page exists.
pub fn has_prev(page: u32) -> bool {
    page > 1
}

/// Whether a next page exists given the last reported pagination block.
pub fn has_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}

/// Label like `Page 2 of 5`. A backend that reports zero pages still reads
/// as one page.
pub fn page_label(page: u32, total_pages: u32) -> String {
    format!("Page {page} of {}", total_pages.max(1))
}

/// Prev / label / next strip driving a shared `page` signal.
#[component]
pub fn Pager(page: RwSignal<u32>, pagination: RwSignal<Pagination>) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                class="btn pager__prev"
                disabled=move || !has_prev(page.get())
                on:click=move |_| page.update(|p| *p = (*p).saturating_sub(1).max(1))
            >
                "Prev"
            </button>
            <span class="pager__label">
                {move || page_label(page.get(), pagination.get().total_pages)}
            </span>
            <button
                class="btn pager__next"
                disabled=move || !has_next(page.get(), pagination.get().total_pages)
                on:click=move |_| page.update(|p| *p += 1)
            >
                "Next"
            </button>
        </div>
    }
}
