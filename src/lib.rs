//! Single-page application shell: header, navigation drawer, routed page
//! views, and a transient snackbar, backed by a centralized,
//! action-dispatching state store.
//!
//! The binary in `main.rs` mounts [`app::App`]; everything else lives here
//! so tests can drive the store directly.

pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod state;
pub mod utils;
