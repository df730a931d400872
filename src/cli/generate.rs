//! `generate-commit-msg`: the entry point the hook script calls.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};

use crate::claude::AnthropicClient;
use crate::commit::{HookOutcome, prepare_commit_msg};
use crate::config::{EnvOverrides, Settings, SettingsStore};
use crate::git::GitCli;

use super::{init_tracing, parse_args, report};

/// Draft a commit message from the staged diff into the given file.
#[derive(Parser, Debug)]
#[command(name = "generate-commit-msg")]
#[command(about = "Generate a commit message for the staged changes (prepare-commit-msg hook)")]
#[command(version)]
pub struct GenerateCli {
    /// Commit message file passed by git
    pub commit_msg_file: PathBuf,
}

/// Effective settings, falling back to defaults and env overrides when the
/// home directory is unknown.
pub fn load_settings() -> Settings {
    match SettingsStore::from_home() {
        Ok(store) => store.load(),
        Err(e) => {
            warn!("{e}, using defaults");
            Settings::resolve(None, &EnvOverrides::from_env())
        }
    }
}

/// Entry point for the `generate-commit-msg` binary.
pub async fn main() -> ExitCode {
    init_tracing();

    let cli: GenerateCli = match parse_args(env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    let service = match AnthropicClient::from_env() {
        Ok(service) => service,
        Err(e) => return report(&anyhow::Error::new(e)),
    };
    let settings = load_settings();

    match prepare_commit_msg(&cli.commit_msg_file, &GitCli::new(), &service, &settings).await {
        Ok(HookOutcome::KeptExisting { .. }) => {
            debug!("Commit message file already had content, generated message discarded");
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => report(&anyhow::Error::new(e)),
    }
}
