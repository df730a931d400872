//! The prepare-commit-msg hook run: diff, generate, rewrite.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::claude::CompletionService;
use crate::config::Settings;
use crate::error::GenerateError;
use crate::git::{VersionControlClient, get_staged_diff};

use super::message::generate_commit_message;
use super::msg_file::{can_prepend, prepend_message};

/// What a hook run did to the commit message file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Nothing staged; the file was not touched.
    NothingStaged,
    /// The generated message was written above the existing content.
    Prepended { message: String },
    /// The file already held a message; the generated one was discarded.
    KeptExisting { message: String },
}

/// Run the hook against `msg_file`.
///
/// Progress goes to stderr since git shows hook output on the terminal.
pub async fn prepare_commit_msg<V, C>(
    msg_file: &Path,
    vcs: &V,
    service: &C,
    settings: &Settings,
) -> Result<HookOutcome, GenerateError>
where
    V: VersionControlClient + ?Sized,
    C: CompletionService + ?Sized,
{
    eprintln!("🤖 Analyzing your staged changes...");

    let diff = get_staged_diff(vcs).await?;
    if diff.trim().is_empty() {
        eprintln!("No staged changes found");
        return Ok(HookOutcome::NothingStaged);
    }

    eprintln!("✨ Generating commit message with AI...");
    let message = generate_commit_message(&diff, settings, service).await?;
    eprintln!("✓ Commit message generated successfully!");

    let existing = fs::read_to_string(msg_file).map_err(|source| GenerateError::ReadMessageFile {
        path: msg_file.to_path_buf(),
        source,
    })?;

    if !can_prepend(&existing) {
        debug!("{} already has a message, leaving it as is", msg_file.display());
        return Ok(HookOutcome::KeptExisting { message });
    }

    fs::write(msg_file, prepend_message(&message, &existing)).map_err(|source| {
        GenerateError::WriteMessageFile {
            path: msg_file.to_path_buf(),
            source,
        }
    })?;

    Ok(HookOutcome::Prepended { message })
}
