use crate::app::state::AppState;
use crate::domain::routes::AppRoute;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// The routed view. Library pages are placeholders showing the resolved path.
pub struct MainView<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for MainView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let intent = self.state.router.current();
        let path = intent.path().unwrap_or_else(|e| e.to_string());

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(intent.route.title().to_uppercase(), self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(path, self.theme.route_path)),
        ];
        for (name, value) in &intent.params {
            lines.push(Line::from(vec![
                Span::styled(format!("{name}: "), self.theme.subtitle),
                Span::styled(value.as_str(), self.theme.list_item),
            ]));
        }
        if intent.route == AppRoute::Home {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw("Press "),
                Span::styled("ctrl+k", self.theme.key_binding),
                Span::raw(" to search your library"),
            ]));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
