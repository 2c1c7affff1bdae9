//! Browser plumbing shared by the components.
//!
//! - [`dom`] - Fallible Window/Document accessors
//! - [`events`] - Router and connectivity watcher installation
//! - [`metadata`] - Document title and meta tag updates

pub mod dom;
pub mod events;
pub mod metadata;
