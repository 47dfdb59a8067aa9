use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    features::palette::close_session,
    state::{AppState, Connection},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SwitchServer(profile) => {
            if state.palette.is_open {
                close_session(state);
            }
            tracing::info!(server = %profile.name, url = %profile.url, "switching server");
            state.connection = Connection::Connecting(profile.name.clone());
            state.active_server = Some(profile.clone());
            state.status_message = Some(format!("Connecting to {}...", profile.name));
            UpdateResult::Handled(Some(Command::Connect(profile.clone())))
        }
        Action::ServerConnected(requested, result) => {
            let current = state.active_server.as_ref().map(|p| p.name.as_str());
            if current != Some(requested.as_str()) {
                tracing::debug!(server = %requested, active = ?current, "dropping stale login result");
                return UpdateResult::Handled(None);
            }
            match result {
                Ok(name) => {
                    state.connection = Connection::Connected(name.clone());
                    state.status_message = Some(format!("Connected to {name}"));
                    state.last_error = None;
                }
                Err(e) => {
                    state.connection = Connection::Offline;
                    state.status_message = None;
                    state.set_error(format!("Connection failed: {e}"));
                }
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::ServerProfile;
    use crate::app::reducer;
    use crate::app::state::AppMode;

    fn profile() -> ServerProfile {
        ServerProfile {
            name: "attic".to_string(),
            url: "http://attic:4533".to_string(),
            username: "admin".to_string(),
            password: Some("secret".to_string()),
            password_env: None,
        }
    }

    #[test]
    fn test_switch_server_closes_palette_and_connects() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::TogglePalette);

        let cmd = reducer::update(&mut state, Action::SwitchServer(profile()));
        assert_eq!(cmd, Some(Command::Connect(profile())));
        assert!(!state.palette.is_open);
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.connection, Connection::Connecting("attic".to_string()));
        assert_eq!(state.active_server, Some(profile()));
    }

    #[test]
    fn test_connection_result() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::SwitchServer(profile()));
        reducer::update(
            &mut state,
            Action::ServerConnected("attic".to_string(), Ok("attic".to_string())),
        );
        assert_eq!(state.connection, Connection::Connected("attic".to_string()));

        reducer::update(
            &mut state,
            Action::ServerConnected(
                "attic".to_string(),
                Err("Server returned 401 Unauthorized".to_string()),
            ),
        );
        assert_eq!(state.connection, Connection::Offline);
        let error = state.last_error.expect("error should be set");
        assert!(error.message.starts_with("Connection failed"));
        assert!(!error.suggestions.is_empty());
    }

    #[test]
    fn test_result_for_other_server_is_ignored() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::SwitchServer(profile()));

        reducer::update(
            &mut state,
            Action::ServerConnected("cellar".to_string(), Ok("cellar".to_string())),
        );
        assert_eq!(state.connection, Connection::Connecting("attic".to_string()));

        reducer::update(
            &mut state,
            Action::ServerConnected("cellar".to_string(), Err("timed out".to_string())),
        );
        assert_eq!(state.connection, Connection::Connecting("attic".to_string()));
        assert!(state.last_error.is_none());
    }
}
