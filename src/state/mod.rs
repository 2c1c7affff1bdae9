//! Centralized, action-dispatching state.
//!
//! - [`AppState`], [`Store`] - the single state record and its container
//! - [`Action`] - state transitions
//! - [`reduce`] - the pure reducer applying one action

pub mod actions;
pub mod reducer;
pub mod store;

pub use actions::Action;
pub use reducer::reduce;
pub use store::{AppState, Store};
