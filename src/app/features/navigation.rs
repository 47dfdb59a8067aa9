use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    features::palette::close_session,
    state::AppState,
};
use crate::domain::routes::NavigationIntent;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Navigate(intent) => {
            navigate(state, intent);
            UpdateResult::Handled(None)
        }
        Action::NavigateAndClose(intent) => {
            navigate(state, intent);
            if state.palette.is_open {
                close_session(state);
                return UpdateResult::Handled(Some(Command::CancelPending));
            }
            UpdateResult::Handled(None)
        }
        Action::NavigateBack => {
            if state.router.back() {
                state.status_message = Some(format!("Back to {}", state.router.current().route.title()));
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn navigate(state: &mut AppState, intent: &NavigationIntent) {
    match intent.path() {
        Ok(path) => {
            if state.router.navigate(intent.clone()) {
                tracing::debug!(%path, "navigated");
                state.status_message = Some(format!("Opened {path}"));
            }
        }
        Err(e) => state.set_error(format!("Cannot open {}: {e}", intent.route.title())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::domain::models::AlbumId;
    use crate::domain::routes::AppRoute;

    #[test]
    fn test_navigate_records_history() {
        let mut state = AppState::default();
        let album = NavigationIntent::album_detail(&AlbumId("al-9".to_string()));
        reducer::update(&mut state, Action::Navigate(album.clone()));
        assert_eq!(state.router.current(), &album);
        assert_eq!(
            state.status_message.as_deref(),
            Some("Opened /library/albums/al-9")
        );

        reducer::update(&mut state, Action::NavigateBack);
        assert_eq!(state.router.current().route, AppRoute::Home);
    }

    #[test]
    fn test_missing_param_reports_error() {
        let mut state = AppState::default();
        let broken = NavigationIntent::to(AppRoute::LibraryAlbumsDetail);
        reducer::update(&mut state, Action::Navigate(broken));
        assert_eq!(state.router.current().route, AppRoute::Home);
        let error = state.last_error.expect("error should be set");
        assert!(error.message.contains("albumId"));
    }

    #[test]
    fn test_navigate_and_close_without_palette() {
        let mut state = AppState::default();
        let cmd = reducer::update(
            &mut state,
            Action::NavigateAndClose(NavigationIntent::to(AppRoute::Settings)),
        );
        assert_eq!(cmd, None);
        assert_eq!(state.router.current().route, AppRoute::Settings);
    }
}
