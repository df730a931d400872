//! `install-commit-msg-hook` and `uninstall-commit-msg-hook`.

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::claude::{API_KEY_ENV_VAR, api_key_from_env};
use crate::hook::{
    UninstallOutcome, ensure_repository, install_hook, resolve_repo_path, uninstall_hook,
};

use super::{init_tracing, parse_args, report};

/// Install the prepare-commit-msg hook into a git repository.
#[derive(Parser, Debug)]
#[command(name = "install-commit-msg-hook")]
#[command(about = "Install the AI commit message hook into a git repository")]
#[command(version)]
pub struct InstallCli {
    /// Path to the git repository (defaults to the current directory)
    pub repo: Option<PathBuf>,
}

/// Remove the prepare-commit-msg hook from a git repository.
#[derive(Parser, Debug)]
#[command(name = "uninstall-commit-msg-hook")]
#[command(about = "Remove the AI commit message hook from a git repository")]
#[command(version)]
pub struct UninstallCli {
    /// Path to the git repository (defaults to the current directory)
    pub repo: Option<PathBuf>,
}

/// Entry point for the `install-commit-msg-hook` binary.
pub fn install_main() -> ExitCode {
    init_tracing();

    let cli: InstallCli = match parse_args(env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    let repo = resolve_repo_path(cli.repo.as_deref());
    let has_key = api_key_from_env().is_some();

    match run_install(&repo, has_key, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

/// Install into `repo`; `has_key` controls the credential warning.
pub fn run_install<O: Write, E: Write>(
    repo: &Path,
    has_key: bool,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    if let Err(e) = ensure_repository(repo) {
        writeln!(err, "Usage: install-commit-msg-hook [path-to-git-repo]")?;
        return Err(e.into());
    }

    // Warn before touching the repository; the hook is installed either way
    if !has_key {
        write_missing_key_warning(err)?;
    }

    let path = install_hook(repo)?;

    writeln!(out, "✓ Git hook installed successfully at: {}", path.display())?;
    writeln!(out)?;
    writeln!(
        out,
        "Now when you run 'git commit', the LLM will auto-generate a commit message."
    )?;
    writeln!(out, "You can edit the message before finalizing the commit.")?;
    Ok(())
}

fn write_missing_key_warning<E: Write>(err: &mut E) -> io::Result<()> {
    writeln!(err, "⚠️  Warning: {API_KEY_ENV_VAR} environment variable is not set")?;
    writeln!(
        err,
        "Please add the following to your shell profile (~/.zshrc or ~/.bashrc):"
    )?;
    writeln!(err)?;
    writeln!(err, "export {API_KEY_ENV_VAR}='your-api-key-here'")?;
    writeln!(err)?;
    writeln!(err, "You can get an API key from: https://console.anthropic.com/")?;
    writeln!(err)
}

/// Entry point for the `uninstall-commit-msg-hook` binary.
pub fn uninstall_main() -> ExitCode {
    init_tracing();

    let cli: UninstallCli = match parse_args(env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    let repo = resolve_repo_path(cli.repo.as_deref());

    match run_uninstall(&repo, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

/// Remove the hook from `repo`; a missing hook is reported, not an error.
pub fn run_uninstall<O: Write>(repo: &Path, out: &mut O) -> Result<()> {
    match uninstall_hook(repo)? {
        UninstallOutcome::Removed(_) => {
            writeln!(out, "✓ Git hook uninstalled from: {}", repo.display())?;
        }
        UninstallOutcome::NotInstalled(path) => {
            writeln!(out, "No hook found at: {}", path.display())?;
        }
    }
    Ok(())
}
