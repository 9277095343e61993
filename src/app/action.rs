use crate::domain::models::TransformationResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    FocusLost, // Terminal window lost input focus
    Cancel,    // Esc / q / Ctrl-C: close without applying anything

    // --- Menu ---
    SelectNext,
    SelectPrev,
    ActivateSelected,
    ActivateIndex(usize), // Clicked or numbered entry; its index wins over the highlight

    // --- Instruction Prompt ---
    TextAreaInput(crossterm::event::KeyEvent),
    SubmitInstruction(String),
    CancelInstruction,

    // --- Result Panel ---
    ScrollResultUp(u16),
    ScrollResultDown(u16),
    CloseResult,

    // --- Async Results ---
    TransformationCompleted(Result<TransformationResult, String>),
}
