//! Centralized application state container.
//!
//! A single [`Store`] instance is created by the root component and provided
//! as context. Components read state through [`Store::with`]; every write
//! funnels through [`Store::dispatch`] and the reducer. The compound
//! operations (navigation, connectivity, drawer, snackbar) live in
//! [`crate::state::actions`].

use std::collections::HashSet;

use leptos::prelude::*;

#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;

use crate::state::Action;
use crate::state::reducer::reduce;

// =============================================================================
// Application State
// =============================================================================

/// Application state, mutated only by the reducer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// Key of the current page. Empty until the first navigation, which the
    /// router runs synchronously at startup.
    pub page: &'static str,
    /// Last reported connectivity status, `None` until the first report.
    pub offline: Option<bool>,
    /// Whether the navigation drawer is open.
    pub drawer_opened: bool,
    /// Whether the snackbar is visible.
    pub snackbar_opened: bool,
}

// =============================================================================
// Store
// =============================================================================

/// Process-wide state container. Cheap to copy and hand to closures.
#[derive(Clone, Copy)]
pub struct Store {
    state: RwSignal<AppState>,
    pub(crate) views: ViewRegistry,
    pub(crate) snackbar_timer: SnackbarTimer,
}

impl Store {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AppState::default()),
            views: ViewRegistry::new(),
            snackbar_timer: SnackbarTimer::new(),
        }
    }

    /// Read a slice of the current state. Tracks the state signal when
    /// called from a reactive context.
    pub fn with<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        self.state.with(f)
    }

    /// Apply an action through the reducer.
    pub fn dispatch(&self, action: Action) {
        log::trace!("dispatch: {action:?}");
        self.state.update(|state| *state = reduce(state, action));
    }

    /// Whether a route's view module has been materialized. Reactive.
    pub fn view_loaded(&self, module: &'static str) -> bool {
        self.views.is_loaded(module)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// View Registry
// =============================================================================

/// Tracks which view modules have been materialized.
///
/// The wasm binary ships every view, so "loading" a module means recording
/// its first navigation; page containers watch the registry and mount their
/// body once the mark appears.
#[derive(Clone, Copy)]
pub(crate) struct ViewRegistry {
    loaded: RwSignal<HashSet<&'static str>>,
}

impl ViewRegistry {
    fn new() -> Self {
        Self {
            loaded: RwSignal::new(HashSet::new()),
        }
    }

    /// Mark `module` loaded. Returns `true` only on the first call for it.
    pub(crate) fn ensure_loaded(&self, module: &'static str) -> bool {
        if self.loaded.with_untracked(|set| set.contains(module)) {
            return false;
        }
        self.loaded.update(|set| {
            set.insert(module);
        });
        true
    }

    /// Whether `module` has been materialized. Reactive.
    pub(crate) fn is_loaded(&self, module: &'static str) -> bool {
        self.loaded.with(|set| set.contains(module))
    }
}

// =============================================================================
// Snackbar Timer
// =============================================================================

/// Handle to the pending snackbar auto-close.
///
/// At most one close is outstanding at a time: scheduling replaces the
/// previous handle, and dropping a [`Timeout`] clears its callback.
#[derive(Clone, Copy)]
pub(crate) struct SnackbarTimer {
    #[cfg(target_arch = "wasm32")]
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl SnackbarTimer {
    fn new() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            pending: StoredValue::new_local(None),
        }
    }

    /// Arm the auto-close, replacing (and thereby canceling) any pending one.
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn schedule(&self, store: Store) {
        let timeout = Timeout::new(crate::config::SNACKBAR_DURATION_MS, move || {
            store.dispatch(Action::CloseSnackbar);
        });
        self.pending.set_value(Some(timeout));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_defaults() {
        let state = AppState::default();
        assert_eq!(state.page, "");
        assert_eq!(state.offline, None);
        assert!(!state.drawer_opened);
        assert!(!state.snackbar_opened);
    }

    #[test]
    fn test_dispatch_applies_reducer() {
        let store = Store::new();
        store.dispatch(Action::UpdatePage { page: "view2" });
        assert_eq!(store.with(|state| state.page), "view2");

        store.dispatch(Action::OpenSnackbar);
        assert!(store.with(|state| state.snackbar_opened));
    }

    #[test]
    fn test_registry_marks_each_module_once() {
        let store = Store::new();
        assert!(!store.view_loaded("views::view_one"));

        assert!(store.views.ensure_loaded("views::view_one"));
        assert!(!store.views.ensure_loaded("views::view_one"));
        assert!(store.view_loaded("views::view_one"));
        assert!(!store.view_loaded("views::view_two"));
    }
}
