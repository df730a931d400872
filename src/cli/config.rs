//! `commit-msg-config`: show, set, and reset the persisted settings.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{SettingKey, SettingsStore};

use super::{init_tracing, parse_args, report};

const SET_HELP: &str = "Available keys:
  model        - Claude model to use (e.g., claude-3-5-haiku-latest)
  max_tokens   - Maximum tokens for response (e.g., 500)
  prompt       - Custom prompt template (must include {diff})";

/// Configure the commit message generator.
#[derive(Parser, Debug)]
#[command(name = "commit-msg-config")]
#[command(about = "Show or change the commit message generator settings")]
#[command(version)]
pub struct ConfigCli {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the configuration file path and the effective settings
    Show,

    /// Set one setting and save the configuration file
    #[command(after_help = SET_HELP)]
    Set {
        /// One of: model, max_tokens, prompt
        key: String,
        value: String,
    },

    /// Restore the built-in defaults
    Reset,
}

/// Entry point for the `commit-msg-config` binary.
pub fn main() -> ExitCode {
    init_tracing();

    let cli: ConfigCli = match parse_args(env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    let result = SettingsStore::from_home()
        .context("Cannot locate the configuration file")
        .and_then(|store| run(cli.command, &store, &mut io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

/// Run one config command against `store`, writing user output to `out`.
pub fn run<W: Write>(command: Option<ConfigCommand>, store: &SettingsStore, out: &mut W) -> Result<()> {
    match command.unwrap_or(ConfigCommand::Show) {
        ConfigCommand::Show => show(store, out),
        ConfigCommand::Set { key, value } => {
            store.set(&key, &value)?;
            writeln!(out, "✓ Set {key} = {value}")?;
            writeln!(out, "Configuration saved to: {}", store.path().display())?;
            Ok(())
        }
        ConfigCommand::Reset => {
            store.reset()?;
            writeln!(out, "✓ Configuration reset to defaults")?;
            writeln!(out, "Configuration file: {}", store.path().display())?;
            Ok(())
        }
    }
}

fn show<W: Write>(store: &SettingsStore, out: &mut W) -> Result<()> {
    let settings = store.load();
    let json = serde_json::to_string_pretty(&settings)?;

    writeln!(out, "Configuration file: {}", store.path().display())?;
    writeln!(out)?;
    writeln!(out, "Current settings:")?;
    writeln!(out, "{json}")?;
    writeln!(out)?;
    writeln!(out, "To modify: commit-msg-config set <key> <value>")?;
    writeln!(out, "To reset: commit-msg-config reset")?;
    writeln!(out)?;
    writeln!(out, "Keys:")?;
    for key in SettingKey::ALL {
        writeln!(out, "  {:<12} - {}", key.as_str(), key.description())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses_to_none() {
        let cli = ConfigCli::try_parse_from(["commit-msg-config"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_set_parses_key_and_value() {
        let cli = ConfigCli::try_parse_from(["commit-msg-config", "set", "max_tokens", "500"]).unwrap();
        assert_eq!(
            cli.command,
            Some(ConfigCommand::Set {
                key: "max_tokens".to_string(),
                value: "500".to_string()
            })
        );
    }

    #[test]
    fn test_set_missing_value_is_usage_error() {
        assert!(ConfigCli::try_parse_from(["commit-msg-config", "set", "model"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_is_usage_error() {
        assert!(ConfigCli::try_parse_from(["commit-msg-config", "frobnicate"]).is_err());
    }

    #[test]
    fn test_set_help_lists_keys() {
        assert!(SET_HELP.contains("max_tokens"));
        for key in SettingKey::ALL {
            assert!(SET_HELP.contains(key.as_str()));
        }
    }
}
