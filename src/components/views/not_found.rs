//! Fallback page for unknown paths.

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <h2>"Oops! You hit a 404"</h2>
        <p>
            "The page you're looking for doesn't seem to exist. Head back "
            <a href="/">"home"</a>
            " and try again?"
        </p>
    }
}
