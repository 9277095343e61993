pub mod helpers;
pub mod result_panel;
pub mod text_input;

pub use result_panel::{wrapped_rows, ResultPanel, ResultPanelLayout};
pub use text_input::TextInputModal;
