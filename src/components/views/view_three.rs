//! Third demo page.

use leptos::prelude::*;

#[component]
pub fn ViewThree() -> impl IntoView {
    view! {
        <h2>"View Three"</h2>
        <p>
            "Deep links work too: load any page URL directly and the router
            resolves it before the first paint. Unknown paths land on a
            not-found page instead of a blank screen."
        </p>
        <p>
            "Use the browser's back and forward buttons from here; history
            traversal flows through the same navigation path as link clicks."
        </p>
    }
}
