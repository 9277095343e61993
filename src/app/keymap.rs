use super::action::Action;
use super::state::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug)]
pub struct KeyMap {
    pub menu: HashMap<KeyEvent, Action>,
    pub result: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn new() -> Self {
        let mut menu = HashMap::new();
        let mut result = HashMap::new();

        // --- Menu ---
        menu.insert(key(KeyCode::Up), Action::SelectPrev);
        menu.insert(key(KeyCode::Char('k')), Action::SelectPrev);
        menu.insert(key(KeyCode::BackTab), Action::SelectPrev);
        menu.insert(key(KeyCode::Down), Action::SelectNext);
        menu.insert(key(KeyCode::Char('j')), Action::SelectNext);
        menu.insert(key(KeyCode::Tab), Action::SelectNext);
        menu.insert(key(KeyCode::Enter), Action::ActivateSelected);
        menu.insert(key(KeyCode::Char(' ')), Action::ActivateSelected);
        menu.insert(key(KeyCode::Esc), Action::Cancel);
        menu.insert(key(KeyCode::Char('q')), Action::Cancel);
        for (i, c) in ('1'..='9').enumerate() {
            menu.insert(key(KeyCode::Char(c)), Action::ActivateIndex(i));
        }

        // --- Result Panel ---
        result.insert(key(KeyCode::Up), Action::ScrollResultUp(1));
        result.insert(key(KeyCode::Char('k')), Action::ScrollResultUp(1));
        result.insert(key(KeyCode::Down), Action::ScrollResultDown(1));
        result.insert(key(KeyCode::Char('j')), Action::ScrollResultDown(1));
        result.insert(key(KeyCode::PageUp), Action::ScrollResultUp(10));
        result.insert(key(KeyCode::PageDown), Action::ScrollResultDown(10));
        result.insert(key(KeyCode::Esc), Action::CloseResult);
        result.insert(key(KeyCode::Enter), Action::CloseResult);
        result.insert(key(KeyCode::Char('q')), Action::CloseResult);

        Self { menu, result }
    }

    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        // Shift arrives on some terminals for upper-case chars; match on code alone then.
        let event = KeyEvent::new(event.code, event.modifiers - KeyModifiers::SHIFT);
        match mode {
            AppMode::Open => self.menu.get(&event).cloned(),
            AppMode::Display => self.result.get(&event).cloned(),
            _ => None,
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_bindings() {
        let keymap = KeyMap::new();
        assert_eq!(
            keymap.get_action(key(KeyCode::Down), AppMode::Open),
            Some(Action::SelectNext)
        );
        assert_eq!(
            keymap.get_action(key(KeyCode::Char('3')), AppMode::Open),
            Some(Action::ActivateIndex(2))
        );
        assert_eq!(
            keymap.get_action(key(KeyCode::Esc), AppMode::Open),
            Some(Action::Cancel)
        );
    }

    #[test]
    fn test_vim_and_quit_keys() {
        let keymap = KeyMap::new();
        assert_eq!(
            keymap.get_action(key(KeyCode::Char('k')), AppMode::Open),
            Some(Action::SelectPrev)
        );
        assert_eq!(
            keymap.get_action(key(KeyCode::Char('j')), AppMode::Display),
            Some(Action::ScrollResultDown(1))
        );
        assert_eq!(
            keymap.get_action(key(KeyCode::Char('q')), AppMode::Display),
            Some(Action::CloseResult)
        );
        // Shift is dropped before lookup.
        assert_eq!(
            keymap.get_action(
                KeyEvent::new(KeyCode::Char('q'), KeyModifiers::SHIFT),
                AppMode::Open
            ),
            Some(Action::Cancel)
        );
    }

    #[test]
    fn test_bindings_are_mode_specific() {
        let keymap = KeyMap::new();
        assert_eq!(
            keymap.get_action(key(KeyCode::Down), AppMode::Display),
            Some(Action::ScrollResultDown(1))
        );
        assert_eq!(keymap.get_action(key(KeyCode::Down), AppMode::Loading), None);
    }
}
