//! Claude integration via the Anthropic Messages API.

pub mod client;
pub mod service;

pub use client::{API_KEY_ENV_VAR, AnthropicClient, api_key_from_env};
pub use service::{CompletionRequest, CompletionService};
