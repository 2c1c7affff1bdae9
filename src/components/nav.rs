//! Shared navigation list.

use leptos::prelude::*;

use crate::models::route::ROUTES;
use crate::state::Store;

/// Navigation links for every routed page.
///
/// The link matching the current page carries a `selected` attribute; the
/// header and drawer style their anchors through it. `class` sets the layout
/// class of the `<nav>` element itself.
#[component]
pub fn NavList(class: &'static str) -> impl IntoView {
    let store = use_context::<Store>().expect("Store must be provided at root");
    let page = Signal::derive(move || store.with(|state| state.page));

    view! {
        <nav class=class>
            {ROUTES
                .iter()
                .map(|route| {
                    let selected = move || page.get() == route.key;
                    view! {
                        <a
                            href=route.href
                            attr:selected=selected
                            aria-current=move || selected().then_some("page")
                        >
                            {route.title}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
