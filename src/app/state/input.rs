use crate::domain::models::TransformationKind;
use tui_textarea::TextArea;

/// The free-text instruction asked for by custom-prompt transformations.
#[derive(Debug, Clone)]
pub struct InputState<'a> {
    pub kind: TransformationKind,
    pub text_area: TextArea<'a>,
}

impl InputState<'_> {
    #[must_use]
    pub fn new(kind: TransformationKind) -> Self {
        let mut text_area = TextArea::default();
        text_area.set_placeholder_text("Enter your custom prompt:");
        Self { kind, text_area }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text_area.lines().join("\n")
    }
}
