//! Connectivity snackbar.

use leptos::prelude::*;

use crate::state::Store;

stylance::import_crate_style!(css, "src/components/snackbar.module.css");

/// Transient notification reporting connectivity changes.
///
/// Visibility is pure state: the store opens it and the store's timer
/// closes it; the component only reflects `snackbar_opened`.
#[component]
pub fn Snackbar() -> impl IntoView {
    let store = use_context::<Store>().expect("Store must be provided at root");
    let active = Signal::derive(move || store.with(|state| state.snackbar_opened));
    let offline = Signal::derive(move || store.with(|state| state.offline.unwrap_or(false)));

    view! {
        <div
            class=css::snackbar
            attr:active=move || active.get()
            role="status"
            aria-live="polite"
        >
            {move || if offline.get() { "You are now offline." } else { "You are now online." }}
        </div>
    }
}
