use crate::app::{action::Action, command::Command};
use crate::domain::models::{OutputTarget, TransformRequest, TransformationResult};
use crate::domain::prompts::build_prompt;
use crate::domain::services::TextService;
use crate::error::ServiceError;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs one transformation against the text service.
///
/// Kinds that need an instruction produce `Empty` without touching the
/// service when none was supplied. Service failures are returned unchanged.
pub async fn dispatch(
    service: &dyn TextService,
    request: &TransformRequest,
) -> Result<TransformationResult, ServiceError> {
    let Some(prompt) = build_prompt(
        request.kind,
        &request.captured,
        request.instruction.as_deref(),
    ) else {
        log::info!("{:?}: no instruction given, nothing to do", request.kind);
        return Ok(TransformationResult::Empty);
    };

    log::info!("{:?}: sending {} byte prompt", request.kind, prompt.len());
    let response = service.generate(&prompt).await?;
    log::info!("{:?}: received {} bytes", request.kind, response.len());

    Ok(match request.kind.target() {
        OutputTarget::Replace => TransformationResult::Replacement(response),
        OutputTarget::Display => TransformationResult::Display(response),
    })
}

pub fn handle_command(command: Command, service: Arc<dyn TextService>, tx: mpsc::Sender<Action>) {
    match command {
        Command::Transform(request) => {
            tokio::spawn(async move {
                let result = dispatch(service.as_ref(), &request)
                    .await
                    .map_err(|e| e.to_string());
                if let Err(err) = &result {
                    log::error!("{:?} failed: {err}", request.kind);
                }
                // The loop may already be gone if the user cancelled.
                let _ = tx.send(Action::TransformationCompleted(result)).await;
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{CapturedText, TransformationKind};
    use crate::domain::services::MockTextService;

    fn request(kind: TransformationKind, instruction: Option<&str>) -> TransformRequest {
        TransformRequest {
            kind,
            captured: CapturedText("hello world".to_string()),
            instruction: instruction.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_rephrase_returns_replacement() {
        let mut service = MockTextService::new();
        service
            .expect_generate()
            .withf(|prompt| prompt.contains("\"hello world\"") && prompt.starts_with("Rephrase"))
            .times(1)
            .returning(|_| Ok("Hello, World!".to_string()));

        let result = dispatch(&service, &request(TransformationKind::Rephrase, None))
            .await
            .unwrap();
        assert_eq!(
            result,
            TransformationResult::Replacement("Hello, World!".to_string())
        );
    }

    #[tokio::test]
    async fn test_cancelled_instruction_never_calls_service() {
        let mut service = MockTextService::new();
        service.expect_generate().never();

        for kind in [
            TransformationKind::CustomPrompt,
            TransformationKind::AdvancedSearchAi,
        ] {
            let result = dispatch(&service, &request(kind, None)).await.unwrap();
            assert_eq!(result, TransformationResult::Empty);
        }
    }

    #[tokio::test]
    async fn test_search_returns_display() {
        let mut service = MockTextService::new();
        service
            .expect_generate()
            .withf(|prompt| prompt.contains("without any markdown"))
            .returning(|_| Ok("An answer".to_string()));

        let result = dispatch(&service, &request(TransformationKind::SearchAi, None))
            .await
            .unwrap();
        assert_eq!(result, TransformationResult::Display("An answer".to_string()));
    }

    #[tokio::test]
    async fn test_custom_prompt_uses_instruction() {
        let mut service = MockTextService::new();
        service
            .expect_generate()
            .withf(|prompt| prompt == "Shout it\n\nhello world")
            .returning(|_| Ok("HELLO WORLD".to_string()));

        let result = dispatch(
            &service,
            &request(TransformationKind::CustomPrompt, Some("Shout it")),
        )
        .await
        .unwrap();
        assert_eq!(
            result,
            TransformationResult::Replacement("HELLO WORLD".to_string())
        );
    }

    #[tokio::test]
    async fn test_service_failure_propagates() {
        let mut service = MockTextService::new();
        service.expect_generate().times(1).returning(|_| {
            Err(ServiceError::Status {
                status: 429,
                message: "quota".to_string(),
            })
        });

        let err = dispatch(&service, &request(TransformationKind::AiPrompt, None))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Status { status: 429, .. }));
    }

    #[tokio::test]
    async fn test_handle_command_reports_failure() {
        let mut service = MockTextService::new();
        service
            .expect_generate()
            .returning(|_| Err(ServiceError::Transport("offline".to_string())));

        let (tx, mut rx) = mpsc::channel(1);
        handle_command(
            Command::Transform(request(TransformationKind::Rephrase, None)),
            Arc::new(service),
            tx,
        );

        let action = rx.recv().await.unwrap();
        if let Action::TransformationCompleted(Err(msg)) = action {
            assert!(msg.contains("offline"));
        } else {
            panic!("Expected failed TransformationCompleted, got {action:?}");
        }
    }
}
