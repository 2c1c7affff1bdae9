use appshell::app::App;
use appshell::config::{APP_TITLE, APP_VERSION};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();

    log::info!("{APP_TITLE} v{APP_VERSION} mounted");
}
