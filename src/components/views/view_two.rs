//! Second demo page.

use leptos::prelude::*;

#[component]
pub fn ViewTwo() -> impl IntoView {
    view! {
        <h2>"View Two"</h2>
        <p>"A few things the shell keeps track of while you browse:"</p>
        <ul>
            <li>"the current page, reflected in the URL and the document title"</li>
            <li>"whether the drawer is open"</li>
            <li>"your connectivity, reported through the snackbar"</li>
        </ul>
        <p>
            "Try going offline and back online; the snackbar at the bottom of
            the screen announces the change and dismisses itself."
        </p>
    }
}
