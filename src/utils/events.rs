//! Browser event hooks feeding navigation and connectivity callbacks.
//!
//! Both installers register their listeners once at startup and leak the
//! closures so they stay alive for the lifetime of the app.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlAnchorElement, Location, MouseEvent};

use crate::utils::dom;

/// Install the navigation hook.
///
/// Intercepted link clicks push their URL onto the history stack and invoke
/// `callback`; so does `popstate`. The callback also runs once immediately,
/// so the app renders the page the browser loaded on.
pub fn install_router(callback: impl Fn(Location) + Clone + 'static) {
    let (Some(window), Some(body)) = (dom::window(), dom::document().and_then(|doc| doc.body()))
    else {
        return;
    };

    let click = {
        let callback = callback.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let Some(href) = intercepted_link(&event) else {
                return;
            };
            event.prevent_default();

            if let Some(window) = dom::window() {
                let location = window.location();
                if location.href().ok().as_deref() != Some(href.as_str())
                    && let Ok(history) = window.history()
                {
                    let _ = history.push_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&href),
                    );
                    callback(location);
                }
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let _ = body.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    // Keep the closure alive for the lifetime of the app
    click.forget();

    let popstate = {
        let callback = callback.clone();
        Closure::wrap(Box::new(move || {
            if let Some(window) = dom::window() {
                callback(window.location());
            }
        }) as Box<dyn FnMut()>)
    };
    let _ = window.add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref());
    popstate.forget();

    callback(window.location());
}

/// Link-click filter: only unmodified left clicks on same-origin anchors
/// without a `target`, `download`, or `rel="external"` escape hatch count
/// as in-app navigation. Returns the anchor's resolved href.
fn intercepted_link(event: &MouseEvent) -> Option<String> {
    if event.default_prevented()
        || event.button() != 0
        || event.meta_key()
        || event.ctrl_key()
        || event.shift_key()
    {
        return None;
    }

    let anchor = event
        .composed_path()
        .iter()
        .find_map(|node| node.dyn_into::<HtmlAnchorElement>().ok())?;

    if !anchor.target().is_empty()
        || anchor.has_attribute("download")
        || anchor.get_attribute("rel").as_deref() == Some("external")
    {
        return None;
    }

    let href = anchor.href();
    if href.is_empty() || href.contains("mailto:") {
        return None;
    }

    let origin = dom::window()?.location().origin().ok()?;
    if !href.starts_with(&origin) {
        return None;
    }

    Some(href)
}

/// Install the connectivity watcher: `online`/`offline` window events plus
/// one immediate report of the current status.
pub fn install_offline_watcher(callback: impl Fn(bool) + Clone + 'static) {
    let Some(window) = dom::window() else {
        return;
    };

    for (event_name, offline) in [("online", false), ("offline", true)] {
        let callback = callback.clone();
        let listener = Closure::wrap(Box::new(move || callback(offline)) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref());
        listener.forget();
    }

    callback(!window.navigator().on_line());
}
