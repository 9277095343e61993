use super::models::{CapturedText, TransformationKind};

const RAW_TEXT_NOTE: &str = "N.B: Return response as raw form without any markdown formatting";

/// Builds the prompt sent to the text service.
///
/// Returns `None` when the kind needs a user instruction and none was given,
/// in which case nothing must be sent.
#[must_use]
pub fn build_prompt(
    kind: TransformationKind,
    captured: &CapturedText,
    instruction: Option<&str>,
) -> Option<String> {
    let text = captured.as_str();
    let instruction = instruction.map(str::trim).filter(|i| !i.is_empty());

    match kind {
        TransformationKind::AiPrompt => Some(text.to_string()),
        TransformationKind::Rephrase => Some(format!(
            "Rephrase and improve the following text: \n\"{text}\""
        )),
        TransformationKind::SearchAi => Some(format!("{RAW_TEXT_NOTE}\n\nprompt: {text}")),
        TransformationKind::CustomPrompt => {
            instruction.map(|instruction| format!("{instruction}\n\n{text}"))
        }
        TransformationKind::AdvancedSearchAi => instruction.map(|instruction| {
            format!("{RAW_TEXT_NOTE}\n\ncontext/input: {text}\n\nprompt: {instruction}")
        }),
    }
}
