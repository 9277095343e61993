use crate::app::state::ResultState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect_fixed, draw_drop_shadow};

const MIN_WIDTH: u16 = 40;
const CLOSE_LABEL: &str = " Close ";

/// Where the result panel and its close button land for a given text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultPanelLayout {
    pub panel: Rect,
    pub body: Rect,
    pub close_button: Rect,
}

impl ResultPanelLayout {
    /// Sizes the panel to the text, capped at 80% of `area`.
    #[must_use]
    pub fn compute(text: &str, area: Rect) -> Self {
        let max_width = (area.width as u32 * 80 / 100) as u16;
        let max_height = (area.height as u32 * 80 / 100) as u16;

        let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let width = ((longest as u16).saturating_add(4))
            .max(MIN_WIDTH)
            .min(max_width.max(MIN_WIDTH.min(area.width)));

        let rows = wrapped_rows(text, width.saturating_sub(4).max(1));
        // Borders, padding row and the close button row.
        let height = u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(max_height.max(5.min(area.height)));

        let panel = centered_rect_fixed(width, height, area);
        let inner = Rect {
            x: panel.x + 1,
            y: panel.y + 1,
            width: panel.width.saturating_sub(2),
            height: panel.height.saturating_sub(2),
        };
        let body = Rect {
            x: inner.x + 1,
            y: inner.y,
            width: inner.width.saturating_sub(2),
            height: inner.height.saturating_sub(2),
        };
        let label_width = (CLOSE_LABEL.len() as u16).min(inner.width);
        let close_button = Rect {
            x: inner.x + (inner.width - label_width) / 2,
            y: inner.bottom().saturating_sub(1),
            width: label_width,
            height: inner.height.min(1),
        };

        Self {
            panel,
            body,
            close_button,
        }
    }

    /// Furthest the body can scroll while its last wrapped row stays visible.
    #[must_use]
    pub fn max_scroll(&self, text: &str) -> u16 {
        u16::try_from(wrapped_rows(text, self.body.width))
            .unwrap_or(u16::MAX)
            .saturating_sub(self.body.height)
    }
}

/// Rows `text` takes up once word-wrapped the way the panel renders it.
#[must_use]
pub fn wrapped_rows(text: &str, width: u16) -> usize {
    if width == 0 {
        return 0;
    }
    Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .line_count(width)
}

pub struct ResultPanel<'a> {
    pub theme: &'a Theme,
    pub state: &'a ResultState,
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = ResultPanelLayout::compute(&self.state.text, area);
        if layout.panel.width == 0 || layout.panel.height == 0 {
            return;
        }

        draw_drop_shadow(buf, layout.panel, area);
        Clear.render(layout.panel, buf);

        Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!(" {} ", self.state.title), self.theme.header_logo),
                Span::raw(" "),
            ]))
            .title_bottom(
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled("j/k", self.theme.key_binding),
                    Span::raw(": scroll "),
                ])
                .alignment(Alignment::Right),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.background)
            .render(layout.panel, buf);

        Paragraph::new(self.state.text.as_str())
            .style(self.theme.result_text)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0))
            .render(layout.body, buf);

        Paragraph::new(CLOSE_LABEL)
            .style(self.theme.button_selected)
            .render(layout.close_button, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_gets_minimum_size() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = ResultPanelLayout::compute("ok", area);
        assert_eq!(layout.panel.width, MIN_WIDTH);
        assert_eq!(layout.panel.height, 5);
        assert!(layout.close_button.y < layout.panel.bottom());
    }

    #[test]
    fn test_long_text_is_capped() {
        let area = Rect::new(0, 0, 100, 40);
        let text = "word ".repeat(2000);
        let layout = ResultPanelLayout::compute(&text, area);
        assert_eq!(layout.panel.width, 80);
        assert_eq!(layout.panel.height, 32);
    }

    #[test]
    fn test_single_long_paragraph_scrolls() {
        let area = Rect::new(0, 0, 100, 40);
        let text = "word ".repeat(2000);
        let layout = ResultPanelLayout::compute(&text, area);

        let rows = wrapped_rows(&text, layout.body.width);
        assert!(rows > layout.body.height as usize);
        assert_eq!(
            layout.max_scroll(&text) as usize,
            rows - layout.body.height as usize
        );
    }

    #[test]
    fn test_short_text_does_not_scroll() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = ResultPanelLayout::compute("one\ntwo", area);
        assert_eq!(layout.max_scroll("one\ntwo"), 0);
    }

    #[test]
    fn test_tiny_terminal() {
        let area = Rect::new(0, 0, 10, 3);
        let layout = ResultPanelLayout::compute("hello\nworld", area);
        assert!(layout.panel.width <= area.width);
        assert!(layout.panel.height <= area.height);
    }
}
