//! Root application component.

use leptos::prelude::*;

use crate::components::Shell;
use crate::state::Store;

/// Application root.
///
/// Creates the global [`Store`], provides it as context, and renders the
/// shell inside an error boundary. The fallback is styled inline so it
/// renders even when the stylesheet is part of what failed.
#[component]
pub fn App() -> impl IntoView {
    let store = Store::new();
    provide_context(store);

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div style="
                    max-width: 600px;
                    margin: 15vh auto 0;
                    padding: 0 24px;
                    font-family: Arial, Helvetica, sans-serif;
                    color: #293237;
                    text-align: center;
                ">
                    <h1 style="color: #e91e63;">"Something went wrong"</h1>
                    <p>"The page failed to render. Reloading usually fixes it."</p>
                    <details style="
                        text-align: left;
                        background: #f5f5f5;
                        border-radius: 4px;
                        padding: 12px 16px;
                        margin-bottom: 24px;
                    ">
                        <summary style="cursor: pointer; color: #78909c;">
                            "Details"
                        </summary>
                        <ul style="color: #c2185b; font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </details>
                    <button
                        style="
                            background: #e91e63;
                            color: white;
                            border: none;
                            border-radius: 4px;
                            padding: 12px 32px;
                            font-size: 1rem;
                            cursor: pointer;
                        "
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload"
                    </button>
                </div>
            }
        }>
            <Shell />
        </ErrorBoundary>
    }
}
