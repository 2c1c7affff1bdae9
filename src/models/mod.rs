//! Domain types.
//!
//! - [`Route`] - Static page descriptors and the route table

pub mod route;

pub use route::Route;
