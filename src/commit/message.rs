//! Commit message generation via the completion service.

use tracing::debug;

use crate::claude::{CompletionRequest, CompletionService};
use crate::config::Settings;
use crate::error::CompletionError;

use super::prompt::render_prompt;

/// Generate a commit message from the (already bounded) diff.
///
/// Issues exactly one request; there is no retry.
pub async fn generate_commit_message<C: CompletionService + ?Sized>(
    diff: &str,
    settings: &Settings,
    service: &C,
) -> Result<String, CompletionError> {
    let request = CompletionRequest {
        model: settings.model.clone(),
        max_tokens: settings.max_tokens,
        prompt: render_prompt(&settings.prompt, diff),
    };

    debug!("Commit prompt length: {} chars", request.prompt.len());

    let message = service.complete(&request).await?;
    Ok(message.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claude::service::MockCompletionService;

    #[tokio::test]
    async fn test_generate_sends_resolved_settings() {
        let settings = Settings {
            model: "claude-test".to_string(),
            max_tokens: 321,
            prompt: "Describe:\n{diff}".to_string(),
        };

        let mut mock = MockCompletionService::new();
        mock.expect_complete()
            .withf(|req| {
                req.model == "claude-test"
                    && req.max_tokens == 321
                    && req.prompt == "Describe:\n+line\n"
            })
            .times(1)
            .returning(|_| Ok("  feat: add line\n".to_string()));

        let message = generate_commit_message("+line\n", &settings, &mock)
            .await
            .unwrap();
        assert_eq!(message, "feat: add line");
    }

    #[tokio::test]
    async fn test_generate_with_placeholderless_prompt_still_sends() {
        let settings = Settings {
            prompt: "Write something.".to_string(),
            ..Settings::default()
        };

        let mut mock = MockCompletionService::new();
        mock.expect_complete()
            .withf(|req| req.prompt == "Write something.")
            .times(1)
            .returning(|_| Ok("chore: something".to_string()));

        let message = generate_commit_message("+x\n", &settings, &mock).await.unwrap();
        assert_eq!(message, "chore: something");
    }

    #[tokio::test]
    async fn test_generate_propagates_service_error() {
        let mut mock = MockCompletionService::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Err(CompletionError::MissingApiKey));

        let result = generate_commit_message("+x\n", &Settings::default(), &mock).await;
        assert!(matches!(result, Err(CompletionError::MissingApiKey)));
    }
}
