use std::fmt;

/// The text grabbed from the foreground application when the session starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CapturedText(pub String);

impl CapturedText {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CapturedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformationKind {
    AiPrompt,
    CustomPrompt,
    Rephrase,
    SearchAi,
    AdvancedSearchAi,
}

/// Where a transformation's output ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    Replace,
    Display,
}

impl TransformationKind {
    /// Whether activating this kind first asks the user for an instruction.
    #[must_use]
    pub fn needs_instruction(self) -> bool {
        matches!(
            self,
            TransformationKind::CustomPrompt | TransformationKind::AdvancedSearchAi
        )
    }

    #[must_use]
    pub fn target(self) -> OutputTarget {
        match self {
            TransformationKind::SearchAi | TransformationKind::AdvancedSearchAi => {
                OutputTarget::Display
            }
            _ => OutputTarget::Replace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformationEntry {
    pub name: String,
    pub kind: TransformationKind,
}

impl TransformationEntry {
    pub fn new(name: impl Into<String>, kind: TransformationKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[must_use]
pub fn default_entries() -> Vec<TransformationEntry> {
    vec![
        TransformationEntry::new("AI Prompt", TransformationKind::AiPrompt),
        TransformationEntry::new("Custom Prompt", TransformationKind::CustomPrompt),
        TransformationEntry::new("Rephrase", TransformationKind::Rephrase),
        TransformationEntry::new("Search AI", TransformationKind::SearchAi),
        TransformationEntry::new("Advanced Search AI", TransformationKind::AdvancedSearchAi),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRequest {
    pub kind: TransformationKind,
    pub captured: CapturedText,
    pub instruction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformationResult {
    Replacement(String),
    Display(String),
    Empty,
}

/// What the session leaves behind once the menu has closed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionOutcome {
    #[default]
    Closed,
    Replace(String),
}
