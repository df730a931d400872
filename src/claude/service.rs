//! The completion capability the message composer depends on.

use async_trait::async_trait;

use crate::error::CompletionError;

/// A single-turn completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: String,
    pub max_tokens: u32,
    /// Sent as the only user-role message.
    pub prompt: String,
}

/// Remote text-completion service.
///
/// This abstraction allows stubbing the API in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Return the text of the first response segment.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
