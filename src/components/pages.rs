//! Routed page containers.

use leptos::prelude::*;

use crate::components::views;
use crate::models::route::{self, Route};
use crate::state::Store;

stylance::import_crate_style!(css, "src/components/pages.module.css");

/// Main content region.
///
/// Every route (the not-found route included) gets a container up front; the
/// one matching the current page carries the `active` attribute and is the
/// only one displayed. A container's body mounts the first time its route is
/// visited and stays mounted afterwards.
#[component]
pub fn Pages() -> impl IntoView {
    let store = use_context::<Store>().expect("Store must be provided at root");
    let page = Signal::derive(move || store.with(|state| state.page));

    view! {
        <main class=css::main>
            {route::all()
                .map(|route| view! { <PageContainer route=route page=page /> })
                .collect_view()}
        </main>
    }
}

/// Container for one route's view.
#[component]
fn PageContainer(route: &'static Route, page: Signal<&'static str>) -> impl IntoView {
    let store = use_context::<Store>().expect("Store must be provided at root");

    view! {
        <section
            id=route.key
            class=format!("{} {}", css::page, route.tag)
            attr:active=move || page.get() == route.key
        >
            <Show when=move || store.view_loaded(route.module)>
                {move || views::render(route.key)}
            </Show>
        </section>
    }
}
