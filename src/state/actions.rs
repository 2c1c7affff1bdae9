//! Actions and the thunk layer that dispatches them.
//!
//! [`Action`] values describe single state transitions. The methods on
//! [`Store`] implemented here are the compound operations: they inspect
//! current state, run side effects (view materialization, the snackbar
//! timer), and dispatch zero or more actions.

use crate::models::route;
use crate::state::store::{AppState, Store};

/// A requested state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// The routed page changed.
    UpdatePage { page: &'static str },
    /// A connectivity report arrived.
    UpdateOffline { offline: bool },
    /// The drawer was opened or closed.
    UpdateDrawerState { opened: bool },
    /// Show the snackbar.
    OpenSnackbar,
    /// Hide the snackbar.
    CloseSnackbar,
}

impl Store {
    /// Route a URL path to a page.
    ///
    /// Resolves the path to a route key, loads that page, and closes the
    /// drawer since the navigation may have come from a drawer link.
    pub fn navigate(&self, path: &str) {
        let page = route::page_from_path(path);
        log::debug!("navigate: {path} -> {page}");
        self.load_page(page);
        self.update_drawer_state(false);
    }

    fn load_page(&self, page: &str) {
        let route = route::resolve(page);
        if self.views.ensure_loaded(route.module) {
            log::debug!("view module {} loaded", route.module);
        }
        self.dispatch(Action::UpdatePage { page: route.key });
    }

    /// Record a connectivity report.
    ///
    /// Every report after the first one surfaces the snackbar; the startup
    /// report only records the status.
    pub fn update_offline(&self, offline: bool) {
        log::info!("connectivity changed (offline: {offline})");
        if self.with(|state| state.offline.is_some()) {
            self.show_snackbar();
        }
        self.dispatch(Action::UpdateOffline { offline });
    }

    /// React to a layout change. An open drawer never survives one.
    pub fn update_layout(&self, wide: bool) {
        log::debug!("layout changed (wide: {wide})");
        if self.with(|state| state.drawer_opened) {
            self.update_drawer_state(false);
        }
    }

    /// Open or close the drawer. Dispatches only when the requested state
    /// differs from the current one.
    pub fn update_drawer_state(&self, opened: bool) {
        if let Some(action) = self.with(|state| drawer_action(state, opened)) {
            self.dispatch(action);
        }
    }

    /// Show the snackbar and (re)arm its auto-close.
    pub fn show_snackbar(&self) {
        self.dispatch(Action::OpenSnackbar);
        #[cfg(target_arch = "wasm32")]
        self.snackbar_timer.schedule(*self);
    }
}

/// Drawer transition for a requested state, `None` when the store already
/// matches it.
fn drawer_action(state: &AppState, opened: bool) -> Option<Action> {
    (state.drawer_opened != opened).then_some(Action::UpdateDrawerState { opened })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawer_action_guards_repeats() {
        let closed = AppState::default();
        assert_eq!(
            drawer_action(&closed, true),
            Some(Action::UpdateDrawerState { opened: true })
        );
        assert_eq!(drawer_action(&closed, false), None);

        let opened = AppState {
            drawer_opened: true,
            ..AppState::default()
        };
        assert_eq!(drawer_action(&opened, true), None);
        assert_eq!(
            drawer_action(&opened, false),
            Some(Action::UpdateDrawerState { opened: false })
        );
    }

    #[test]
    fn test_navigate_known_path() {
        let store = Store::new();
        store.navigate("/view2");
        assert_eq!(store.with(|state| state.page), "view2");
        assert!(store.view_loaded("views::view_two"));
    }

    #[test]
    fn test_navigate_root_selects_default_route() {
        let store = Store::new();
        store.navigate("/");
        assert_eq!(store.with(|state| state.page), "view1");
    }

    #[test]
    fn test_navigate_unknown_path_resolves_to_not_found() {
        let store = Store::new();
        store.navigate("/no-such-page");
        assert_eq!(store.with(|state| state.page), "view404");
        assert!(store.view_loaded("views::not_found"));

        store.navigate("/view1/nested");
        assert_eq!(store.with(|state| state.page), "view404");
    }

    #[test]
    fn test_navigate_closes_drawer() {
        let store = Store::new();
        store.update_drawer_state(true);
        assert!(store.with(|state| state.drawer_opened));

        store.navigate("/view3");
        assert!(!store.with(|state| state.drawer_opened));
    }

    #[test]
    fn test_repeated_drawer_requests_are_stable() {
        let store = Store::new();
        store.update_drawer_state(true);
        store.update_drawer_state(true);
        assert!(store.with(|state| state.drawer_opened));

        store.update_drawer_state(false);
        store.update_drawer_state(false);
        assert!(!store.with(|state| state.drawer_opened));
    }

    #[test]
    fn test_first_connectivity_report_is_silent() {
        let store = Store::new();
        store.update_offline(true);
        assert_eq!(store.with(|state| state.offline), Some(true));
        assert!(!store.with(|state| state.snackbar_opened));
    }

    #[test]
    fn test_later_connectivity_reports_show_snackbar() {
        let store = Store::new();
        store.update_offline(false);
        store.update_offline(true);
        assert_eq!(store.with(|state| state.offline), Some(true));
        assert!(store.with(|state| state.snackbar_opened));
    }

    #[test]
    fn test_layout_change_closes_open_drawer() {
        let store = Store::new();
        store.update_drawer_state(true);
        store.update_layout(true);
        assert!(!store.with(|state| state.drawer_opened));

        store.update_layout(false);
        assert!(!store.with(|state| state.drawer_opened));
    }
}
