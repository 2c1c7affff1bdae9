//! Routed page views.
//!
//! One module per page plus [`render`], which materializes the view for a
//! page key. The views are static components; the page containers in
//! [`crate::components::pages`] decide when to mount them.

mod not_found;
mod view_one;
mod view_three;
mod view_two;

use leptos::prelude::*;

pub use not_found::NotFound;
pub use view_one::ViewOne;
pub use view_three::ViewThree;
pub use view_two::ViewTwo;

/// Materialize the view for a page key.
///
/// Unknown keys get the not-found view, mirroring the route table fallback.
pub fn render(key: &str) -> AnyView {
    match key {
        "view1" => view! { <ViewOne /> }.into_any(),
        "view2" => view! { <ViewTwo /> }.into_any(),
        "view3" => view! { <ViewThree /> }.into_any(),
        _ => view! { <NotFound /> }.into_any(),
    }
}
