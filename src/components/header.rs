use crate::app::state::{AppState, Connection};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let server = match &self.state.connection {
            Connection::Offline => Span::styled(" offline ", self.theme.header),
            Connection::Connecting(name) => {
                Span::styled(format!(" connecting to {name}... "), self.theme.header)
            }
            Connection::Connected(name) => {
                Span::styled(format!(" {name} "), self.theme.header_active)
            }
        };

        let spans = vec![
            Span::styled(" TONEARM ", self.theme.header_logo),
            Span::raw(" "),
            server,
            Span::styled(
                format!(" {} ", self.state.router.current().route.title()),
                self.theme.header,
            ),
            Span::styled(" ".repeat(area.width as usize), self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
