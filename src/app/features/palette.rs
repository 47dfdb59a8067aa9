use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    command_palette::palette_items,
    search::{Completion, SettleOutcome},
    state::{AppMode, AppState},
};
use crossterm::event::{KeyCode, KeyModifiers};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TogglePalette => {
            if state.palette.is_open {
                UpdateResult::Handled(dismiss(state))
            } else {
                state.palette.open();
                state.mode = AppMode::Palette;
                UpdateResult::Handled(None)
            }
        }
        Action::ClosePalette => {
            if !state.palette.is_open {
                return UpdateResult::Handled(None);
            }
            UpdateResult::Handled(dismiss(state))
        }
        Action::PaletteInput(key) => {
            if !state.palette.is_open {
                return UpdateResult::Handled(None);
            }
            let mut text = state.palette.raw().to_string();
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('u') if ctrl => text.clear(),
                KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                    text.push(c);
                }
                KeyCode::Backspace => {
                    text.pop();
                }
                _ => return UpdateResult::Handled(None),
            }
            let ticket = state.palette.query.set_raw(text);
            if ticket.is_some() {
                state.palette.selected_index = 0;
            }
            UpdateResult::Handled(ticket.map(Command::ScheduleDebounce))
        }
        Action::DebounceElapsed(generation) => {
            if !state.palette.is_open {
                tracing::debug!(?generation, "debounce fired after palette closed");
                return UpdateResult::Handled(None);
            }
            match state.palette.query.settle(*generation) {
                SettleOutcome::Updated => {
                    state.palette.selected_index = 0;
                    let palette = &mut state.palette;
                    let request = palette
                        .search
                        .request(palette.query.raw(), palette.query.debounced());
                    match request {
                        Some(req) => {
                            tracing::debug!(query = %req.query, generation = ?req.generation, "search issued");
                            UpdateResult::Handled(Some(Command::Search(req)))
                        }
                        None => UpdateResult::Handled(Some(Command::CancelSearch)),
                    }
                }
                SettleOutcome::Unchanged | SettleOutcome::Superseded => UpdateResult::Handled(None),
            }
        }
        Action::SearchCompleted(generation, result) => {
            if !state.palette.is_open {
                tracing::debug!(?generation, "search response arrived after palette closed");
                return UpdateResult::Handled(None);
            }
            match state.palette.search.complete(*generation, result.clone()) {
                Completion::Applied => state.palette.selected_index = 0,
                Completion::Failed => {
                    if let Err(e) = result {
                        tracing::warn!(error = %e, "search failed");
                    }
                }
                Completion::Stale => {
                    tracing::debug!(?generation, "discarding stale search response");
                }
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteNext => {
            let count = palette_items(state).len();
            if count > 0 {
                state.palette.selected_index = (state.palette.selected_index + 1) % count;
            }
            UpdateResult::Handled(None)
        }
        Action::PalettePrev => {
            let count = palette_items(state).len();
            if count > 0 {
                if state.palette.selected_index == 0 || state.palette.selected_index >= count {
                    state.palette.selected_index = count - 1;
                } else {
                    state.palette.selected_index -= 1;
                }
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteSelect => {
            let selected = palette_items(state)
                .get(state.palette.selected_index)
                .map(|item| item.action());
            match selected {
                // Re-dispatch through the root reducer
                Some(action) => UpdateResult::Handled(crate::app::reducer::update(state, action)),
                None => UpdateResult::Handled(None),
            }
        }
        Action::PushPage(page) => {
            if !state.palette.is_open {
                return UpdateResult::Handled(None);
            }
            state.palette.pages.push(*page);
            state.palette.clear_query();
            UpdateResult::Handled(Some(Command::CancelPending))
        }
        _ => UpdateResult::NotHandled,
    }
}

/// The close and toggle triggers share this: on the home page the session
/// ends, on a sub-page only that page is popped and the query is kept.
fn dismiss(state: &mut AppState) -> Option<Command> {
    if state.palette.pages.is_home() {
        close_session(state);
        Some(Command::CancelPending)
    } else {
        state.palette.pages.pop();
        state.palette.selected_index = 0;
        None
    }
}

pub fn close_session(state: &mut AppState) {
    state.palette.close();
    state.mode = AppMode::Normal;
}
