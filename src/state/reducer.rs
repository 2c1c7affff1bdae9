//! Pure state transitions.

use crate::state::Action;
use crate::state::store::AppState;

/// Compute the next state for an action.
///
/// Each arm replaces exactly the field its action names and copies the rest
/// forward unchanged.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    match action {
        Action::UpdatePage { page } => AppState { page, ..*state },
        Action::UpdateOffline { offline } => AppState {
            offline: Some(offline),
            ..*state
        },
        Action::UpdateDrawerState { opened } => AppState {
            drawer_opened: opened,
            ..*state
        },
        Action::OpenSnackbar => AppState {
            snackbar_opened: true,
            ..*state
        },
        Action::CloseSnackbar => AppState {
            snackbar_opened: false,
            ..*state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> AppState {
        AppState {
            page: "view3",
            offline: Some(false),
            drawer_opened: true,
            snackbar_opened: true,
        }
    }

    #[test]
    fn test_update_page() {
        let next = reduce(&AppState::default(), Action::UpdatePage { page: "view2" });
        assert_eq!(next.page, "view2");
        assert_eq!(next.offline, None);
        assert!(!next.drawer_opened);
    }

    #[test]
    fn test_update_offline_records_status() {
        let next = reduce(&AppState::default(), Action::UpdateOffline { offline: true });
        assert_eq!(next.offline, Some(true));

        let next = reduce(&next, Action::UpdateOffline { offline: false });
        assert_eq!(next.offline, Some(false));
    }

    #[test]
    fn test_update_drawer_state() {
        let opened = reduce(
            &AppState::default(),
            Action::UpdateDrawerState { opened: true },
        );
        assert!(opened.drawer_opened);

        let closed = reduce(&opened, Action::UpdateDrawerState { opened: false });
        assert!(!closed.drawer_opened);
    }

    #[test]
    fn test_snackbar_open_close() {
        let open = reduce(&AppState::default(), Action::OpenSnackbar);
        assert!(open.snackbar_opened);

        let closed = reduce(&open, Action::CloseSnackbar);
        assert!(!closed.snackbar_opened);
    }

    #[test]
    fn test_arms_leave_other_fields_alone() {
        let state = populated();

        let next = reduce(&state, Action::UpdatePage { page: "view1" });
        assert_eq!(next.offline, state.offline);
        assert_eq!(next.drawer_opened, state.drawer_opened);
        assert_eq!(next.snackbar_opened, state.snackbar_opened);

        let next = reduce(&state, Action::CloseSnackbar);
        assert_eq!(next.page, state.page);
        assert_eq!(next.drawer_opened, state.drawer_opened);
    }
}
