use crate::app::state::MenuState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget},
};

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// One button per row with a blank row between buttons.
#[must_use]
pub fn button_rects(area: Rect, count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| Rect {
            x: area.x,
            y: area.y.saturating_add((i as u16).saturating_mul(2)),
            width: area.width,
            height: 1,
        })
        .filter(|r| r.y < area.bottom())
        .collect()
}

#[must_use]
pub fn spinner_frame(frame_count: u64) -> &'static str {
    SPINNER[(frame_count % SPINNER.len() as u64) as usize]
}

pub struct TransformationMenu<'a> {
    pub theme: &'a Theme,
    pub menu: &'a MenuState,
    pub loading_index: Option<usize>,
    pub frame_count: u64,
}

impl Widget for TransformationMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rects = button_rects(area, self.menu.len());
        for (i, (entry, rect)) in self.menu.entries().iter().zip(rects).enumerate() {
            let (label, style) = if self.loading_index == Some(i) {
                (
                    format!("{} Loading...", spinner_frame(self.frame_count)),
                    self.theme.button_loading,
                )
            } else if i == self.menu.selected_index() {
                (format!("{}. {}", i + 1, entry.name), self.theme.button_selected)
            } else {
                (format!("{}. {}", i + 1, entry.name), self.theme.button)
            };

            Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(style)
                .render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_button_rects_skip_overflow() {
        let rects = button_rects(Rect::new(2, 3, 20, 5), 5);
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[1], Rect::new(2, 5, 20, 1));
    }

    #[test]
    fn test_loading_label_replaces_entry_name() {
        let theme = Theme::default();
        let menu = MenuState::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(
                    TransformationMenu {
                        theme: &theme,
                        menu: &menu,
                        loading_index: Some(0),
                        frame_count: 0,
                    },
                    f.area(),
                );
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let first_row: String = (0..40).map(|x| buffer[(x, 0)].symbol().to_string()).collect();
        let second_button: String =
            (0..40).map(|x| buffer[(x, 2)].symbol().to_string()).collect();
        assert!(first_row.contains("Loading..."));
        assert!(second_button.contains("2. Custom Prompt"));
    }
}
