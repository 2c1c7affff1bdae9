//! Application layout shell.
//!
//! Renders the chrome (header, drawer, page containers, footer, snackbar)
//! and installs the browser hooks that feed the store: router, connectivity
//! watcher, wide-layout watcher, and the document metadata effect.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::drawer::Drawer;
use crate::components::header::Header;
use crate::components::pages::Pages;
use crate::components::snackbar::Snackbar;
use crate::config::{APP_TITLE, WIDE_LAYOUT_QUERY};
use crate::models::route;
use crate::state::Store;
use crate::utils::metadata;

stylance::import_crate_style!(css, "src/components/shell.module.css");

// ============================================================================
// Hook Setup Functions
// ============================================================================

/// Feed browser navigation into the store.
#[cfg(target_arch = "wasm32")]
fn setup_router(store: Store) {
    crate::utils::events::install_router(move |location| {
        store.navigate(&crate::utils::dom::decoded_pathname(&location));
    });
}

/// Feed connectivity changes into the store.
#[cfg(target_arch = "wasm32")]
fn setup_offline_watcher(store: Store) {
    crate::utils::events::install_offline_watcher(move |offline| {
        store.update_offline(offline);
    });
}

/// Watch the wide-layout media query. Fires once with the initial value,
/// then on every crossing of the breakpoint.
fn setup_layout_watcher(store: Store) {
    let is_wide = use_media_query(WIDE_LAYOUT_QUERY);
    Effect::new(move |_| {
        store.update_layout(is_wide.get());
    });
}

/// Keep the document title and description in sync with the current page.
fn setup_metadata_effect(store: Store) {
    Effect::new(move |prev: Option<&'static str>| {
        let page = store.with(|state| state.page);
        if prev != Some(page) && !page.is_empty() {
            let title = metadata::page_title(APP_TITLE, route::resolve(page).title);
            metadata::update_metadata(&title, &title);
        }
        page
    });
}

// ============================================================================
// Shell Component
// ============================================================================

/// Root layout component.
///
/// Installs the browser hooks once on construction; the router hook runs
/// its callback synchronously, so the first navigation lands before the
/// initial render is observable.
#[component]
pub fn Shell() -> impl IntoView {
    let store = use_context::<Store>().expect("Store must be provided at root");

    #[cfg(target_arch = "wasm32")]
    {
        setup_router(store);
        setup_offline_watcher(store);
    }
    setup_layout_watcher(store);
    setup_metadata_effect(store);

    view! {
        <div class=css::app>
            <Header />
            <Drawer />
            <Pages />
            <footer class=css::footer>
                <p>"Made with <3."</p>
            </footer>
            <Snackbar />
        </div>
    }
}
