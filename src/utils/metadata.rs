//! Document metadata updates.

use crate::utils::dom;

/// Compose the document title for a page.
pub fn page_title(app_title: &str, page_title: &str) -> String {
    format!("{app_title} - {page_title}")
}

/// Update the document title and the description/OpenGraph meta tags.
pub fn update_metadata(title: &str, description: &str) {
    if let Some(document) = dom::document() {
        document.set_title(title);
        set_meta(&document, "property", "og:title", title);
        set_meta(&document, "name", "description", description);
        set_meta(&document, "property", "og:description", description);
    }
}

/// Set a `<meta>` tag's content, creating the tag on first use.
fn set_meta(document: &web_sys::Document, attr: &str, key: &str, content: &str) {
    let selector = format!("meta[{attr}='{key}']");
    if let Ok(Some(element)) = document.query_selector(&selector) {
        let _ = element.set_attribute("content", content);
    } else if let Some(head) = document.head()
        && let Ok(element) = document.create_element("meta")
    {
        let _ = element.set_attribute(attr, key);
        let _ = element.set_attribute("content", content);
        let _ = head.append_child(&element);
    }
}
