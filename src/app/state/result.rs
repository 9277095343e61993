#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultState {
    pub title: String,
    pub text: String,
    pub scroll: u16,
}

impl ResultState {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            scroll: 0,
        }
    }

    /// `max_scroll` comes from the rendered panel; wrapped rows, not lines.
    pub fn scroll_down(&mut self, amount: u16, max_scroll: u16) {
        self.scroll = self.scroll.saturating_add(amount).min(max_scroll);
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_sub(amount);
    }
}
