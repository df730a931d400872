//! commit-msg-generator - a git prepare-commit-msg hook that drafts commit messages with Claude.
//!
//! # Overview
//!
//! The installed hook calls `generate-commit-msg`, which reads the staged diff
//! with `git diff --cached`, bounds it to a character budget, substitutes it into
//! a prompt template, asks the Anthropic Messages API for a message, and writes
//! that message above git's comment template. Settings live in
//! `~/.commit-msg-generator.json` and can be overridden from the environment.

pub mod claude;
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hook;

// Re-export commonly used types
pub use claude::{AnthropicClient, CompletionRequest, CompletionService};
pub use commit::HookOutcome;
pub use config::{Settings, SettingsStore};
pub use error::{CompletionError, ConfigError, GenerateError, GitError, HookError};
pub use git::{GitCli, VersionControlClient};
