//! Landing page.

use leptos::prelude::*;

/// Default view, served for `/` and `/view1`.
#[component]
pub fn ViewOne() -> impl IntoView {
    view! {
        <h2>"View One"</h2>
        <p>
            "Welcome. This shell renders a header, a navigation drawer, and one
            container per routed page; links move between pages without
            reloading the document."
        </p>
        <p>
            "Each view is built the first time you visit it and stays mounted
            afterwards, so switching back is instant."
        </p>
    }
}
