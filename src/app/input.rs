use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::modals::ResultPanelLayout;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position { x: column, y: row })
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Index of the menu button under the pointer, if any.
pub fn resolve_clicked_button(
    app_state: &AppState<'_>,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<usize> {
    ui::get_layout(area)
        .buttons(app_state.menu.len())
        .into_iter()
        .position(|rect| contains(rect, column, row))
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    match &event {
        Event::Key(key) if key.kind == KeyEventKind::Release => return None,
        Event::Key(key) if is_ctrl_c(key) => return Some(Action::Cancel),
        Event::FocusLost => return Some(Action::FocusLost),
        Event::Resize(w, h) => return Some(Action::Resize(*w, *h)),
        _ => {}
    }

    match app_state.mode {
        AppMode::Open => match event {
            Event::Key(key) => app_state.keymap.get_action(key, app_state.mode),
            Event::Mouse(mouse) => map_menu_mouse(mouse, app_state, area),
            _ => None,
        },
        AppMode::AwaitingSubPrompt => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelInstruction),
                KeyCode::Enter => app_state
                    .input
                    .as_ref()
                    .map(|input| Action::SubmitInstruction(input.text())),
                _ => Some(Action::TextAreaInput(key)),
            },
            _ => None,
        },
        AppMode::Loading => match event {
            Event::Key(key) if key.code == KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
        AppMode::Display => match event {
            Event::Key(key) => app_state.keymap.get_action(key, app_state.mode),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => Some(Action::ScrollResultUp(1)),
                MouseEventKind::ScrollDown => Some(Action::ScrollResultDown(1)),
                MouseEventKind::Down(MouseButton::Left) => {
                    let text = app_state.result.as_ref().map_or("", |r| r.text.as_str());
                    let layout = ResultPanelLayout::compute(text, area);
                    contains(layout.close_button, mouse.column, mouse.row)
                        .then_some(Action::CloseResult)
                }
                _ => None,
            },
            _ => None,
        },
        AppMode::Closed => None,
    }
}

fn map_menu_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Action::SelectPrev),
        MouseEventKind::ScrollDown => Some(Action::SelectNext),
        MouseEventKind::Down(MouseButton::Left) => {
            resolve_clicked_button(app_state, area, mouse.column, mouse.row)
                .map(Action::ActivateIndex)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{InputState, ResultState};
    use crate::domain::models::TransformationKind;

    const SIZE: Size = Size {
        width: 60,
        height: 20,
    };

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_ctrl_c_cancels_in_every_mode() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        for mode in [
            AppMode::Open,
            AppMode::AwaitingSubPrompt,
            AppMode::Loading,
            AppMode::Display,
        ] {
            let mut state = AppState::default();
            state.mode = mode;
            assert_eq!(
                map_event_to_action(ctrl_c.clone(), &state, SIZE),
                Some(Action::Cancel)
            );
        }
    }

    #[test]
    fn test_focus_lost() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(Event::FocusLost, &state, SIZE),
            Some(Action::FocusLost)
        );
        assert_eq!(map_event_to_action(Event::FocusGained, &state, SIZE), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let state = AppState::default();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(key), &state, SIZE), None);
    }

    #[test]
    fn test_menu_keys() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(press(KeyCode::Down), &state, SIZE),
            Some(Action::SelectNext)
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Char('3')), &state, SIZE),
            Some(Action::ActivateIndex(2))
        );
    }

    #[test]
    fn test_click_activates_button_under_pointer() {
        let state = AppState::default();
        let area = Rect::new(0, 0, SIZE.width, SIZE.height);
        let buttons = ui::get_layout(area).buttons(state.menu.len());

        let third = buttons[2];
        assert_eq!(
            map_event_to_action(click(third.x + 1, third.y), &state, SIZE),
            Some(Action::ActivateIndex(2))
        );

        // The gap row between two buttons is not a button.
        assert_eq!(
            map_event_to_action(click(third.x + 1, third.y + 1), &state, SIZE),
            None
        );
    }

    #[test]
    fn test_prompt_keys() {
        let mut state = AppState::default();
        state.mode = AppMode::AwaitingSubPrompt;
        let mut input = InputState::new(TransformationKind::CustomPrompt);
        input.text_area.insert_str("make it formal");
        state.input = Some(input);

        assert_eq!(
            map_event_to_action(press(KeyCode::Enter), &state, SIZE),
            Some(Action::SubmitInstruction("make it formal".to_string()))
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Esc), &state, SIZE),
            Some(Action::CancelInstruction)
        );
        // Menu bindings do not leak into the prompt.
        assert!(matches!(
            map_event_to_action(press(KeyCode::Char('j')), &state, SIZE),
            Some(Action::TextAreaInput(_))
        ));
    }

    #[test]
    fn test_loading_only_allows_cancel() {
        let mut state = AppState::default();
        state.mode = AppMode::Loading;
        assert_eq!(map_event_to_action(press(KeyCode::Down), &state, SIZE), None);
        assert_eq!(
            map_event_to_action(press(KeyCode::Esc), &state, SIZE),
            Some(Action::Cancel)
        );
    }

    #[test]
    fn test_result_close_button_click() {
        let mut state = AppState::default();
        state.mode = AppMode::Display;
        state.result = Some(ResultState::new("Search AI", "42"));

        let area = Rect::new(0, 0, SIZE.width, SIZE.height);
        let button = ResultPanelLayout::compute("42", area).close_button;
        assert_eq!(
            map_event_to_action(click(button.x, button.y), &state, SIZE),
            Some(Action::CloseResult)
        );
        assert_eq!(map_event_to_action(click(0, 0), &state, SIZE), None);
    }
}
