use crate::app::state::{AppMode, AppState};
use crate::components::menu::{button_rects, spinner_frame, TransformationMenu};
use crate::components::modals::helpers::dim_area;
use crate::components::modals::{ResultPanel, TextInputModal};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub status: Rect,
    pub menu: Rect,
    pub footer: Rect,
}

impl AppLayout {
    #[must_use]
    pub fn buttons(&self, count: usize) -> Vec<Rect> {
        button_rects(self.menu, count)
    }
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(2), // Status label
            Constraint::Min(0),    // Buttons
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let menu = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(main[2])[1];

    AppLayout {
        header: main[0],
        status: main[1],
        menu,
        footer: main[3],
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }
    let theme = &app_state.theme;
    let layout = get_layout(f.area());

    f.render_widget(Block::default().style(theme.background), f.area());

    // --- Header ---
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" GPT WRITER ", theme.header_logo),
        Span::styled(
            format!(" {} chars selected", app_state.captured.as_str().chars().count()),
            theme.header,
        ),
    ]))
    .style(theme.header);
    f.render_widget(header, layout.header);

    // --- Status ---
    let status = match app_state.mode {
        AppMode::Loading => format!("{} Working...", spinner_frame(app_state.frame_count)),
        AppMode::AwaitingSubPrompt => "Waiting for your prompt...".to_string(),
        _ => "Select a transformation:".to_string(),
    };
    f.render_widget(
        Paragraph::new(status)
            .alignment(ratatui::layout::Alignment::Center)
            .style(theme.background),
        layout.status,
    );

    // --- Buttons ---
    f.render_widget(
        TransformationMenu {
            theme,
            menu: &app_state.menu,
            loading_index: app_state.loading_index,
            frame_count: app_state.frame_count,
        },
        layout.menu,
    );

    // --- Footer ---
    let footer = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled("↑/↓", theme.key_binding),
        Span::raw(": move  "),
        Span::styled("Enter", theme.key_binding),
        Span::raw(": run  "),
        Span::styled("1-9", theme.key_binding),
        Span::raw(": quick pick  "),
        Span::styled("Esc", theme.key_binding),
        Span::raw(": close"),
    ]))
    .style(theme.footer);
    f.render_widget(footer, layout.footer);

    // --- Modals ---
    match app_state.mode {
        AppMode::AwaitingSubPrompt => {
            if let Some(input) = &app_state.input {
                let area = f.area();
                dim_area(f.buffer_mut(), area);
                f.render_widget(
                    TextInputModal {
                        theme,
                        title: " CUSTOM AI PROMPT ",
                        text_area: &input.text_area,
                    },
                    f.area(),
                );
            }
        }
        AppMode::Display => {
            if let Some(result) = &app_state.result {
                let area = f.area();
                dim_area(f.buffer_mut(), area);
                f.render_widget(
                    ResultPanel {
                        theme,
                        state: result,
                    },
                    f.area(),
                );
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{InputState, ResultState};
    use crate::domain::models::TransformationKind;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..20)
            .map(|y| {
                (0..60)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_menu_screen() {
        let text = screen(&AppState::default());
        assert!(text.contains("GPT WRITER"));
        assert!(text.contains("Select a transformation:"));
        assert!(text.contains("5. Advanced Search AI"));
    }

    #[test]
    fn test_prompt_screen() {
        let mut state = AppState::default();
        state.mode = AppMode::AwaitingSubPrompt;
        state.input = Some(InputState::new(TransformationKind::CustomPrompt));
        let text = screen(&state);
        assert!(text.contains("CUSTOM AI PROMPT"));
    }

    #[test]
    fn test_result_screen() {
        let mut state = AppState::default();
        state.mode = AppMode::Display;
        state.result = Some(ResultState::new("Search AI", "The answer is 42."));
        let text = screen(&state);
        assert!(text.contains("The answer is 42."));
        assert!(text.contains("Close"));
    }
}
