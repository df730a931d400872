//! Git hook installation and removal.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::HookError;

/// Hook type git runs before opening the commit message editor.
pub const HOOK_NAME: &str = "prepare-commit-msg";

/// Hook script content.
///
/// Runs the generator only for plain commits and `-m` messages, never for
/// merge, squash, template or amend sources.
pub const HOOK_SCRIPT: &str = r#"#!/bin/bash
# Auto-generated git hook for commit message generation

COMMIT_MSG_FILE=$1
COMMIT_SOURCE=$2

# Only run for regular commits (not merge, squash, etc.)
if [ -z "$COMMIT_SOURCE" ] || [ "$COMMIT_SOURCE" = "message" ]; then
    generate-commit-msg "$COMMIT_MSG_FILE"
fi
"#;

/// Result of an uninstall attempt. Both cases are informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UninstallOutcome {
    Removed(PathBuf),
    NotInstalled(PathBuf),
}

/// Resolve the repository path from an optional argument, defaulting to the
/// current directory. Canonicalized when the path exists.
pub fn resolve_repo_path(arg: Option<&Path>) -> PathBuf {
    let path = match arg {
        Some(p) => p.to_path_buf(),
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    path.canonicalize().unwrap_or(path)
}

/// Path of the hook inside `repo`.
pub fn hook_path(repo: &Path) -> PathBuf {
    repo.join(".git").join("hooks").join(HOOK_NAME)
}

/// Check that `repo` has a `.git` directory and return it.
pub fn ensure_repository(repo: &Path) -> Result<PathBuf, HookError> {
    let git_dir = repo.join(".git");
    if !git_dir.is_dir() {
        return Err(HookError::NotARepository(repo.to_path_buf()));
    }
    Ok(git_dir)
}

/// Write the hook into `repo/.git/hooks` and make it executable.
///
/// Overwrites an existing hook of the same name. Returns the hook path.
pub fn install_hook(repo: &Path) -> Result<PathBuf, HookError> {
    let git_dir = ensure_repository(repo)?;

    let hooks_dir = git_dir.join("hooks");
    fs::create_dir_all(&hooks_dir).map_err(|source| HookError::CreateHooksDir {
        path: hooks_dir.clone(),
        source,
    })?;

    let path = hooks_dir.join(HOOK_NAME);
    fs::write(&path, HOOK_SCRIPT).map_err(|source| HookError::WriteFailed {
        path: path.clone(),
        source,
    })?;
    make_executable(&path)?;

    info!("Installed {HOOK_NAME} hook at {}", path.display());
    Ok(path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), HookError> {
    use std::os::unix::fs::PermissionsExt;

    let perms_err = |source| HookError::PermissionsFailed {
        path: path.to_path_buf(),
        source,
    };
    let mut perms = fs::metadata(path).map_err(perms_err)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).map_err(perms_err)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), HookError> {
    Ok(())
}

/// Remove the hook from `repo` if present.
pub fn uninstall_hook(repo: &Path) -> Result<UninstallOutcome, HookError> {
    let path = hook_path(repo);
    if !path.exists() {
        return Ok(UninstallOutcome::NotInstalled(path));
    }

    fs::remove_file(&path).map_err(|source| HookError::RemoveFailed {
        path: path.clone(),
        source,
    })?;

    info!("Removed {HOOK_NAME} hook from {}", repo.display());
    Ok(UninstallOutcome::Removed(path))
}
