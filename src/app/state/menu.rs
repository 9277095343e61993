use crate::domain::models::{default_entries, TransformationEntry};

/// The ordered transformation table and the highlighted row.
///
/// `selected_index` always points at an entry; the table is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    entries: Vec<TransformationEntry>,
    selected_index: usize,
}

impl MenuState {
    /// Returns `None` for an empty table.
    #[must_use]
    pub fn new(entries: Vec<TransformationEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            entries,
            selected_index: 0,
        })
    }

    #[must_use]
    pub fn entries(&self) -> &[TransformationEntry] {
        &self.entries
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub fn selected(&self) -> &TransformationEntry {
        &self.entries[self.selected_index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.entries.len();
    }

    pub fn select_prev(&mut self) {
        if self.selected_index == 0 {
            self.selected_index = self.entries.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves the highlight to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            entries: default_entries(),
            selected_index: 0,
        }
    }
}
