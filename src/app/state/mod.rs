use super::keymap::KeyMap;
use crate::domain::models::{CapturedText, SessionOutcome};
use crate::theme::Theme;
use ratatui::layout::Rect;
use std::sync::Arc;

pub mod input;
pub mod menu;
pub mod result;

// Re-exports
pub use input::InputState;
pub use menu::MenuState;
pub use result::ResultState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Open,              // Menu visible, one entry highlighted
    AwaitingSubPrompt, // Asking for a custom instruction
    Loading,           // Transformation in flight
    Display,           // Showing a display-only result
    Closed,            // Terminal: the loop stops
}

#[derive(Debug)]
pub struct AppState<'a> {
    pub mode: AppMode,
    pub captured: CapturedText,
    pub menu: MenuState,

    // --- Modes ---
    pub input: Option<InputState<'a>>,
    pub result: Option<ResultState>,
    pub loading_index: Option<usize>,

    // --- Session End ---
    pub outcome: SessionOutcome,
    pub failure: Option<String>,

    // --- Terminal ---
    pub area: Rect,
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(captured: CapturedText, menu: MenuState) -> Self {
        Self {
            captured,
            menu,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.mode == AppMode::Closed
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            mode: AppMode::Open,
            captured: CapturedText::default(),
            menu: MenuState::default(),
            input: None,
            result: None,
            loading_index: None,
            outcome: SessionOutcome::Closed,
            failure: None,
            area: Rect::default(),
            frame_count: 0,
            keymap: Arc::new(KeyMap::new()),
            theme: Theme::default(),
        }
    }
}
