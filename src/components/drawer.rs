//! Navigation drawer.

use leptos::prelude::*;

use crate::components::nav::NavList;
use crate::state::Store;

stylance::import_crate_style!(css, "src/components/drawer.module.css");

/// Side navigation panel with a click-to-close scrim.
///
/// Open state is mirrored in an `opened` attribute on the panel; the CSS
/// slides it in and out through that attribute.
#[component]
pub fn Drawer() -> impl IntoView {
    let store = use_context::<Store>().expect("Store must be provided at root");
    let opened = Signal::derive(move || store.with(|state| state.drawer_opened));

    let close_drawer = move |_: leptos::ev::MouseEvent| {
        store.update_drawer_state(false);
    };

    view! {
        <Show when=move || opened.get()>
            <div class=css::scrim on:click=close_drawer></div>
        </Show>

        <aside
            class=css::drawer
            attr:opened=move || opened.get()
            aria-hidden=move || if opened.get() { "false" } else { "true" }
        >
            <NavList class=css::drawerList />
        </aside>
    }
}
