use super::{
    action::Action,
    command::Command,
    state::{AppMode, AppState, InputState, ResultState},
};
use crate::components::modals::ResultPanelLayout;
use crate::domain::models::{
    SessionOutcome, TransformRequest, TransformationKind, TransformationResult,
};
use ratatui::layout::Rect;

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- Lifecycle ---
        Action::FocusLost | Action::Cancel => {
            if state.mode == AppMode::Loading {
                log::info!("Closed while loading; result will be discarded");
            }
            close(state);
        }
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
        }
        Action::Resize(width, height) => {
            state.area = Rect::new(0, 0, width, height);
            if let Some(result) = &mut state.result {
                result.scroll_down(0, max_result_scroll(result, state.area));
            }
        }

        // --- Menu ---
        Action::SelectNext if state.mode == AppMode::Open => state.menu.select_next(),
        Action::SelectPrev if state.mode == AppMode::Open => state.menu.select_prev(),
        Action::ActivateSelected if state.mode == AppMode::Open => {
            return activate(state);
        }
        Action::ActivateIndex(idx) if state.mode == AppMode::Open => {
            if state.menu.select(idx) {
                return activate(state);
            }
        }

        // --- Instruction Prompt ---
        Action::TextAreaInput(key) if state.mode == AppMode::AwaitingSubPrompt => {
            if let Some(input) = &mut state.input {
                input.text_area.input(key);
            }
        }
        Action::SubmitInstruction(text) if state.mode == AppMode::AwaitingSubPrompt => {
            let Some(input) = state.input.take() else {
                state.mode = AppMode::Open;
                return None;
            };
            if text.trim().is_empty() {
                state.mode = AppMode::Open;
                return None;
            }
            return Some(begin_loading(state, input.kind, Some(text)));
        }
        Action::CancelInstruction => {
            state.input = None;
            if state.mode == AppMode::AwaitingSubPrompt {
                state.mode = AppMode::Open;
            }
        }

        // --- Result Panel ---
        Action::ScrollResultUp(amount) => {
            if let Some(result) = &mut state.result {
                result.scroll_up(amount);
            }
        }
        Action::ScrollResultDown(amount) => {
            if let Some(result) = &mut state.result {
                result.scroll_down(amount, max_result_scroll(result, state.area));
            }
        }
        Action::CloseResult if state.mode == AppMode::Display => close(state),

        // --- Async Results ---
        Action::TransformationCompleted(result) if state.mode == AppMode::Loading => {
            state.loading_index = None;
            match result {
                Ok(TransformationResult::Replacement(text)) => {
                    state.outcome = SessionOutcome::Replace(text);
                    close(state);
                }
                Ok(TransformationResult::Display(text)) => {
                    state.result = Some(ResultState::new(state.menu.selected().name.clone(), text));
                    state.mode = AppMode::Display;
                }
                Ok(TransformationResult::Empty) => close(state),
                Err(err) => {
                    state.failure = Some(err);
                    state.outcome = SessionOutcome::Closed;
                    close(state);
                }
            }
        }

        _ => {}
    }
    None
}

fn activate(state: &mut AppState) -> Option<Command> {
    let kind = state.menu.selected().kind;
    if kind.needs_instruction() {
        state.input = Some(InputState::new(kind));
        state.mode = AppMode::AwaitingSubPrompt;
        return None;
    }
    Some(begin_loading(state, kind, None))
}

fn begin_loading(
    state: &mut AppState,
    kind: TransformationKind,
    instruction: Option<String>,
) -> Command {
    log::info!("Running {:?}", kind);
    state.mode = AppMode::Loading;
    state.loading_index = Some(state.menu.selected_index());
    Command::Transform(TransformRequest {
        kind,
        captured: state.captured.clone(),
        instruction,
    })
}

fn max_result_scroll(result: &ResultState, area: Rect) -> u16 {
    ResultPanelLayout::compute(&result.text, area).max_scroll(&result.text)
}

fn close(state: &mut AppState) {
    state.mode = AppMode::Closed;
    state.input = None;
    state.loading_index = None;
}
