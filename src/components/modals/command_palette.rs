use crate::app::command_palette::{palette_items, PaletteItem};
use crate::app::state::AppState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow, spinner_frame};

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a AppState,
}

impl CommandPaletteModal<'_> {
    /// Body lines plus the line index of the selected entry.
    fn body_lines(&self) -> (Vec<Line<'static>>, Option<usize>) {
        let theme = self.theme;
        let palette = &self.state.palette;
        let mut lines = Vec::new();
        let mut selected_line = None;
        let mut entry = 0;

        let groups = palette.groups();
        for group in &groups {
            lines.push(Line::from(Span::styled(
                format!(" {}", group.heading),
                theme.group_heading,
            )));
            for row in &group.rows {
                let is_selected = entry == palette.selected_index;
                if is_selected {
                    selected_line = Some(lines.len());
                }
                let style = if is_selected {
                    theme.list_selected
                } else {
                    theme.list_item
                };
                let mut spans = vec![
                    Span::styled(if is_selected { " > " } else { "   " }, style),
                    Span::styled(row.title.clone(), style),
                ];
                if let Some(subtitle) = &row.subtitle {
                    spans.push(Span::styled(format!("  {subtitle}"), theme.subtitle));
                }
                lines.push(Line::from(spans));
                entry += 1;
            }
        }

        let commands: Vec<_> = palette_items(self.state)
            .into_iter()
            .filter_map(|item| match item {
                PaletteItem::Command(cmd) => Some(cmd),
                PaletteItem::Result(_) => None,
            })
            .collect();
        if !commands.is_empty() && !groups.is_empty() {
            lines.push(Line::from(Span::styled(" Commands", theme.group_heading)));
        }
        for cmd in commands {
            let is_selected = entry == palette.selected_index;
            if is_selected {
                selected_line = Some(lines.len());
            }
            let style = if is_selected {
                theme.list_selected
            } else {
                theme.list_item
            };
            lines.push(Line::from(vec![
                Span::styled(if is_selected { " > " } else { "   " }, style),
                Span::styled(format!("{:<18}", cmd.name), style),
                Span::styled(
                    format!(" {}", cmd.description),
                    theme.list_item.add_modifier(Modifier::DIM),
                ),
            ]));
            entry += 1;
        }

        (lines, selected_line)
    }
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(60, 60, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let palette = &self.state.palette;
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!(" {} ", palette.pages.active().title()),
                    self.theme.header_active,
                ),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);
        if inner_area.height < 4 || inner_area.width == 0 {
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Results
                Constraint::Length(1), // Hints
            ])
            .split(inner_area);

        let query_line = Line::from(vec![
            Span::styled(" > ", self.theme.query_prompt),
            Span::styled(palette.raw(), self.theme.query_text),
            Span::styled(
                "_",
                self.theme.query_text.add_modifier(Modifier::SLOW_BLINK),
            ),
        ]);
        buf.set_line(layout[0].x, layout[0].y, &query_line, layout[0].width);

        let separator = "─".repeat(layout[1].width as usize);
        buf.set_string(layout[1].x, layout[1].y, separator, self.theme.border_focus);

        let (lines, selected_line) = self.body_lines();
        if lines.is_empty() {
            let no_results = Line::from(Span::styled(
                "  No results found.",
                self.theme.list_item.add_modifier(Modifier::DIM),
            ));
            if layout[2].height > 1 {
                buf.set_line(layout[2].x, layout[2].y + 1, &no_results, layout[2].width);
            }
        } else {
            // Keep the selection on screen
            let height = layout[2].height as usize;
            let offset = match selected_line {
                Some(line) if line >= height => line + 1 - height,
                _ => 0,
            };
            Paragraph::new(lines)
                .scroll((offset as u16, 0))
                .render(layout[2], buf);
        }

        let mut hints = Vec::new();
        if palette.show_spinner() {
            hints.push(Span::styled(
                format!(" {} searching ", spinner_frame(self.state.frame_count)),
                self.theme.status_info,
            ));
        } else {
            hints.push(Span::raw(" "));
        }
        for (key, label) in [("ESC", "close"), ("↑ ↓", "select"), ("⏎", "open")] {
            hints.push(Span::styled(format!(" {key} "), self.theme.key_binding));
            hints.push(Span::styled(label, self.theme.footer));
        }
        buf.set_line(
            layout[3].x,
            layout[3].y,
            &Line::from(hints),
            layout[3].width,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::reducer;
    use crate::domain::models::{AlbumId, AlbumItem, SearchResultSet};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(
                    CommandPaletteModal {
                        theme: &state.theme,
                        state,
                    },
                    f.area(),
                );
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn search(state: &mut AppState, text: &str, data: SearchResultSet) {
        let mut last = None;
        for c in text.chars() {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            if let Some(crate::app::command::Command::ScheduleDebounce(t)) =
                reducer::update(state, Action::PaletteInput(key))
            {
                last = Some(t.generation);
            }
        }
        if let Some(crate::app::command::Command::Search(req)) =
            reducer::update(state, Action::DebounceElapsed(last.unwrap()))
        {
            reducer::update(state, Action::SearchCompleted(req.generation, Ok(data)));
        }
    }

    #[test]
    fn test_renders_home_commands() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::TogglePalette);
        let screen = render(&state);
        assert!(screen.contains("COMMAND PALETTE"));
        assert!(screen.contains("Go to page"));
        assert!(screen.contains("Manage servers"));
        assert!(screen.contains("ESC"));
    }

    #[test]
    fn test_renders_result_groups() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::TogglePalette);
        let data = SearchResultSet {
            albums: vec![AlbumItem {
                id: AlbumId("al-1".to_string()),
                name: "Meddle".to_string(),
                image_url: None,
                album_artists: vec!["Pink Floyd".to_string()],
            }],
            ..Default::default()
        };
        search(&mut state, "meddle", data);

        let screen = render(&state);
        assert!(screen.contains("Albums"));
        assert!(screen.contains("Meddle"));
        assert!(screen.contains("Pink Floyd"));
        assert!(!screen.contains("Artists"));
    }

    #[test]
    fn test_renders_empty_state() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::TogglePalette);
        search(&mut state, "zzzz", SearchResultSet::default());
        assert!(render(&state).contains("No results found."));
    }
}
