//! Error types for commit-msg-generator modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the settings store.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid key '{key}'. Valid keys: model, max_tokens, prompt")]
    UnknownKey { key: String },

    #[error("max_tokens must be a positive integer, got '{0}'")]
    InvalidMaxTokens(String),

    #[error("prompt must include {{diff}} placeholder")]
    MissingPlaceholder,

    #[error("Could not determine the home directory for the configuration file")]
    NoHomeDir,

    #[error("Failed to read configuration file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file {path} is not valid JSON: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    SerializeFailed(#[source] serde_json::Error),

    #[error("Failed to write configuration file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found in PATH")]
    NotInstalled,

    #[error("Failed to run git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git diff --cached exited with {}: {stderr}",
             code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    DiffFailed { code: Option<i32>, stderr: String },
}

/// Errors from the remote completion service.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error(
        "ANTHROPIC_API_KEY environment variable not set. Please set it in your shell profile (e.g., .zshrc or .bashrc)"
    )]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to Claude API failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Claude API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Claude API returned an invalid response: {0}")]
    InvalidResponse(String),

    #[error("Claude API response contained no text")]
    EmptyResponse,
}

/// Errors from installing or removing the git hook.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("{} is not a git repository", .0.display())]
    NotARepository(PathBuf),

    #[error("Failed to create hooks directory {path}: {source}")]
    CreateHooksDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write hook {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to make hook {path} executable: {source}")]
    PermissionsFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove hook {path}: {source}")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from a prepare-commit-msg hook run.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Error getting git diff: {0}")]
    Diff(#[from] GitError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error("Failed to read commit message file {path}: {source}")]
    ReadMessageFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write commit message file {path}: {source}")]
    WriteMessageFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
