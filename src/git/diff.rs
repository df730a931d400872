//! Staged diff collection by shelling out to the system `git` binary.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

/// Character budget for the diff sent to the model (roughly 1000 tokens).
pub const MAX_DIFF_CHARS: usize = 4000;

/// Appended to a diff that was cut at [`MAX_DIFF_CHARS`].
pub const TRUNCATION_MARKER: &str = "\n\n[... diff truncated to fit token limit ...]";

/// Source of the staged change set.
///
/// This abstraction allows faking git in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VersionControlClient: Send + Sync {
    /// Return the full staged diff text.
    async fn staged_diff(&self) -> Result<String, GitError>;
}

/// Runs `git diff --cached`, inheriting the user's git config.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    work_dir: Option<PathBuf>,
}

impl GitCli {
    /// Use the current working directory, as git does when running a hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git inside `dir` instead of the current directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: Some(dir.into()),
        }
    }
}

#[async_trait]
impl VersionControlClient for GitCli {
    async fn staged_diff(&self) -> Result<String, GitError> {
        if which::which("git").is_err() {
            return Err(GitError::NotInstalled);
        }

        let mut command = Command::new("git");
        command
            .args(["diff", "--cached"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.work_dir {
            command.current_dir(dir);
        }

        let output = command.output().await.map_err(GitError::SpawnFailed)?;

        if !output.status.success() {
            return Err(GitError::DiffFailed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Cut a diff to [`MAX_DIFF_CHARS`] characters, appending [`TRUNCATION_MARKER`].
///
/// Counts characters, not bytes or tokens.
pub fn bound_diff(diff: String) -> String {
    let cut = diff.char_indices().nth(MAX_DIFF_CHARS).map(|(idx, _)| idx);
    match cut {
        Some(cut) => {
            debug!("Truncating staged diff at byte {cut} of {}", diff.len());
            let mut bounded = diff;
            bounded.truncate(cut);
            bounded.push_str(TRUNCATION_MARKER);
            bounded
        }
        None => diff,
    }
}

/// Fetch the staged diff and bound its size.
pub async fn get_staged_diff<V: VersionControlClient + ?Sized>(vcs: &V) -> Result<String, GitError> {
    let diff = vcs.staged_diff().await?;
    Ok(bound_diff(diff))
}
