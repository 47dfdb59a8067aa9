use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::main_view::MainView;
use crate::components::modals::{CommandPaletteModal, ErrorModal};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = &app_state.theme;
    let layout = get_layout(f.area());

    if layout.header.height > 0 {
        f.render_widget(
            Header {
                state: app_state,
                theme,
            },
            layout.header,
        );
    }

    if layout.body.width > 0 && layout.body.height > 0 {
        f.render_widget(
            MainView {
                state: app_state,
                theme,
            },
            layout.body,
        );
    }

    if layout.footer.height > 0 {
        f.render_widget(
            Footer {
                state: app_state,
                theme,
            },
            layout.footer,
        );
    }

    // --- Overlays ---
    if app_state.palette.is_open {
        f.render_widget(
            CommandPaletteModal {
                theme,
                state: app_state,
            },
            f.area(),
        );
    } else if let Some(error) = &app_state.last_error {
        f.render_widget(ErrorModal { theme, error }, f.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::reducer;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_home() {
        let state = AppState::default();
        let text = screen(&state, 80, 24);
        assert!(text.contains("TONEARM"));
        assert!(text.contains("offline"));
        assert!(text.contains("READY"));
    }

    #[test]
    fn test_draw_error_modal_with_suggestions() {
        let mut state = AppState::default();
        reducer::update(
            &mut state,
            Action::ErrorOccurred("Server returned 401 Unauthorized".to_string()),
        );
        let text = screen(&state, 100, 40);
        assert!(text.contains("ERROR"));
        assert!(text.contains("Suggestions:"));
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::TogglePalette);
        screen(&state, 3, 2);
        screen(&state, 1, 1);
    }
}
