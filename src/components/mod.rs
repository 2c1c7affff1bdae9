//! UI components built with Leptos.
//!
//! - [`Shell`] - Layout root wiring browser hooks to the store
//! - [`header`] - Top toolbar with menu button and wide-layout nav
//! - [`drawer`] - Side navigation panel with scrim
//! - [`nav`] - Navigation list shared by header and drawer
//! - [`pages`] - Routed page containers
//! - [`views`] - The page views themselves
//! - [`snackbar`] - Connectivity notification
//! - [`icons`] - Themed icon constants

pub mod drawer;
pub mod header;
pub mod icons;
pub mod nav;
pub mod pages;
pub mod shell;
pub mod snackbar;
pub mod views;

pub use shell::Shell;
