//! Application header.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::nav::NavList;
use crate::config::APP_TITLE;
use crate::state::Store;

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Fixed top toolbar: menu button, app title, and the navigation links on
/// wide layouts (the CSS hides one or the other around the breakpoint).
#[component]
pub fn Header() -> impl IntoView {
    let store = use_context::<Store>().expect("Store must be provided at root");

    let open_drawer = move |_: leptos::ev::MouseEvent| {
        store.update_drawer_state(true);
    };

    view! {
        <header class=css::header>
            <div class=css::toolbar>
                <button class=css::menuBtn title="Menu" aria-label="Menu" on:click=open_drawer>
                    <Icon icon=ic::MENU />
                </button>
                <div class=css::mainTitle>{APP_TITLE}</div>
            </div>

            // Horizontal variant of the drawer links, wide layouts only
            <NavList class=css::toolbarList />
        </header>
    }
}
