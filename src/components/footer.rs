use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Footer<'_> {
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.mode {
            AppMode::Palette => &[("esc", "close"), ("↑↓", "select"), ("enter", "open")],
            AppMode::Normal if self.state.last_error.is_some() => &[("esc", "dismiss")],
            AppMode::Normal => &[("ctrl+k", "palette"), ("h", "back"), ("q", "quit")],
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let status_span = if let Some(err) = &state.last_error {
            Span::styled(format!("  ERROR: {}  ", err.message), theme.status_error)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_info)
        };

        let mut spans = vec![status_span, Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(format!(" {key} "), theme.key_binding));
            spans.push(Span::styled(format!("{label} "), theme.footer));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
