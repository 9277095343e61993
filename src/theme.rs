use ratatui::style::{Color, Modifier, Style};

const MIDNIGHT: Color = Color::Rgb(0x2C, 0x3E, 0x50);
const SLATE: Color = Color::Rgb(0x34, 0x49, 0x5E);
const BLUE: Color = Color::Rgb(0x29, 0x80, 0xB9);
const AMBER: Color = Color::Rgb(0xF3, 0x9C, 0x12);

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header: Style,
    pub footer: Style,
    pub key_binding: Style,

    pub button: Style,
    pub button_selected: Style,
    pub button_loading: Style,

    pub result_text: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Style::default().bg(MIDNIGHT).fg(Color::White),
            border_focus: Style::default().fg(BLUE),

            header_logo: Style::default()
                .bg(BLUE)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(MIDNIGHT).fg(Color::White),
            footer: Style::default().bg(MIDNIGHT).fg(Color::Rgb(150, 160, 170)),
            key_binding: Style::default().fg(AMBER).add_modifier(Modifier::BOLD),

            button: Style::default()
                .bg(SLATE)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            button_selected: Style::default()
                .bg(BLUE)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            button_loading: Style::default()
                .bg(AMBER)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            result_text: Style::default().bg(MIDNIGHT).fg(Color::White),
        }
    }
}
