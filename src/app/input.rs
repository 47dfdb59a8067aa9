use crate::app::{
    action::Action,
    state::{AppMode, AppState},
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

pub fn map_event_to_action(event: Event, app_state: &AppState) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
    }

    match event {
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        Event::Key(key) => match app_state.mode {
            AppMode::Palette => map_palette_key(key, app_state),
            AppMode::Normal if app_state.last_error.is_some() && key.code == KeyCode::Esc => {
                Some(Action::DismissError)
            }
            AppMode::Normal => app_state.keymap.get_action(key),
        },
        Event::Mouse(mouse) if app_state.mode == AppMode::Palette => match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::PalettePrev),
            MouseEventKind::ScrollDown => Some(Action::PaletteNext),
            _ => None,
        },
        _ => None,
    }
}

fn map_palette_key(key: KeyEvent, app_state: &AppState) -> Option<Action> {
    if app_state.keymap.is_palette_toggle(key) {
        return Some(Action::TogglePalette);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Action::ClosePalette),
        KeyCode::Enter => Some(Action::PaletteSelect),
        KeyCode::Up | KeyCode::BackTab => Some(Action::PalettePrev),
        KeyCode::Down | KeyCode::Tab => Some(Action::PaletteNext),
        KeyCode::Char('p') if ctrl => Some(Action::PalettePrev),
        KeyCode::Char('n') if ctrl => Some(Action::PaletteNext),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char(_) | KeyCode::Backspace => Some(Action::PaletteInput(key)),
        _ => None,
    }
}
