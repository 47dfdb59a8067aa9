use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header: Style,
    pub header_active: Style,
    pub footer: Style,
    pub key_binding: Style,
    pub status_info: Style,
    pub status_error: Style,

    pub query_prompt: Style,
    pub query_text: Style,
    pub group_heading: Style,
    pub list_item: Style,
    pub list_selected: Style,
    pub subtitle: Style,

    pub route_path: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Rgb(80, 80, 80)),
            border_focus: Style::default().fg(Color::Cyan),

            header_logo: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(Color::Rgb(40, 40, 40)).fg(Color::White),
            header_active: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            footer: Style::default()
                .bg(Color::Rgb(30, 30, 30))
                .fg(Color::Rgb(150, 150, 150)),
            key_binding: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default().fg(Color::Green),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            query_prompt: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            query_text: Style::default().fg(Color::White),
            group_heading: Style::default()
                .fg(Color::Rgb(200, 150, 100)) // Warm tan
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(Color::Rgb(200, 200, 200)),
            list_selected: Style::default()
                .bg(Color::Rgb(50, 50, 50))
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            subtitle: Style::default()
                .fg(Color::Rgb(130, 130, 130))
                .add_modifier(Modifier::DIM),

            route_path: Style::default().fg(Color::Magenta),
        }
    }
}
