//! Fallible accessors for browser globals.

use web_sys::{Document, Location, Window};

/// The browser window, when running in one.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The browser document, when running in one.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Current pathname, percent-decoded.
///
/// Falls back to the raw path when decoding fails (malformed escapes).
pub fn decoded_pathname(location: &Location) -> String {
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    js_sys::decode_uri_component(&path)
        .map(String::from)
        .unwrap_or(path)
}
