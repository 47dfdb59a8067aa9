use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type FeatureUpdate = fn(&mut AppState, &Action) -> UpdateResult;

const FEATURES: [FeatureUpdate; 3] = [
    features::palette::update,
    features::navigation::update,
    features::library::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }

    match action {
        // --- System ---
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
        }
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Resize(width, height) => {
            tracing::trace!(width, height, "terminal resized");
        }
        Action::DismissError => {
            state.last_error = None;
        }
        Action::ErrorOccurred(message) => {
            tracing::error!(%message, "runtime error");
            state.set_error(message);
        }
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_actions() {
        let mut state = AppState::default();
        update(&mut state, Action::Tick);
        update(&mut state, Action::Tick);
        assert_eq!(state.frame_count, 2);

        update(&mut state, Action::ErrorOccurred("Not connected".to_string()));
        let error = state.last_error.clone().expect("error should be set");
        assert_eq!(error.message, "Not connected");
        assert_eq!(
            error.suggestions,
            vec!["Pick a server from the palette: Manage servers".to_string()]
        );

        update(&mut state, Action::DismissError);
        assert!(state.last_error.is_none());

        assert_eq!(update(&mut state, Action::Quit), None);
        assert!(state.should_quit);
    }
}
