//! Effective settings and their layered resolution.
//!
//! Precedence, highest first: environment overrides, persisted file contents,
//! built-in defaults. Resolution is a pure function of its inputs and is
//! recomputed on every read.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::ConfigError;

/// Placeholder the prompt template must contain.
pub const DIFF_PLACEHOLDER: &str = "{diff}";

/// Environment variable overriding the model identifier.
pub const MODEL_ENV_VAR: &str = "COMMIT_MSG_MODEL";

/// Environment variable overriding the response token budget.
pub const MAX_TOKENS_ENV_VAR: &str = "COMMIT_MSG_MAX_TOKENS";

/// Environment variable overriding the prompt template.
pub const PROMPT_ENV_VAR: &str = "COMMIT_MSG_PROMPT";

pub const DEFAULT_MODEL: &str = "claude-3-5-haiku-latest";

pub const DEFAULT_MAX_TOKENS: u32 = 1000;

pub const DEFAULT_PROMPT: &str = r#"Based on the following git diff, write a concise commit message following conventional commit format.

The format should be: <type>: <description>

Types: feat, fix, docs, style, refactor, test, chore

Keep it concise (one line preferred, max 72 characters for the summary).
If needed, add a blank line and then bullet points for details.

Git diff:
{diff}

Respond with ONLY the commit message, no explanations or additional text."#;

/// The three recognized settings keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Model,
    MaxTokens,
    Prompt,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [SettingKey::Model, SettingKey::MaxTokens, SettingKey::Prompt];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Model => "model",
            SettingKey::MaxTokens => "max_tokens",
            SettingKey::Prompt => "prompt",
        }
    }

    /// One-line description shown in CLI help.
    pub fn description(&self) -> &'static str {
        match self {
            SettingKey::Model => "Claude model to use (e.g., claude-3-5-haiku-latest)",
            SettingKey::MaxTokens => "Maximum tokens for response (e.g., 500)",
            SettingKey::Prompt => "Custom prompt template (must include {diff})",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownKey { key: s.to_string() })
    }
}

/// Fully resolved settings used for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub model: String,
    pub max_tokens: u32,
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Settings as found in the persisted file. Missing keys fall through to
/// the defaults; unknown keys are ignored.
///
/// Keys are read one at a time, so a bad value for one key does not discard
/// the others. The file itself must still be a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSettings {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub prompt: Option<String>,
}

impl FileSettings {
    /// Take each recognized key that holds a usable value; others are
    /// reported and skipped.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            model: string_field(map, SettingKey::Model),
            max_tokens: max_tokens_field(map),
            prompt: string_field(map, SettingKey::Prompt),
        }
    }
}

impl<'de> Deserialize<'de> for FileSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_map(&map))
    }
}

fn string_field(map: &Map<String, Value>, key: SettingKey) -> Option<String> {
    match map.get(key.as_str())? {
        Value::String(s) => Some(s.clone()),
        other => {
            warn!("Ignoring '{key}' in config file: expected a string, found {other}");
            None
        }
    }
}

fn max_tokens_field(map: &Map<String, Value>) -> Option<u32> {
    let value = map.get(SettingKey::MaxTokens.as_str())?;
    let parsed = value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| *n > 0);
    if parsed.is_none() {
        warn!("Ignoring 'max_tokens' in config file: expected a positive integer, found {value}");
    }
    parsed
}

/// Raw override values taken from the environment. Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub model: Option<String>,
    pub max_tokens: Option<String>,
    pub prompt: Option<String>,
}

impl EnvOverrides {
    /// Read the override variables from the process environment.
    pub fn from_env() -> Self {
        Self {
            model: non_empty_var(MODEL_ENV_VAR),
            max_tokens: non_empty_var(MAX_TOKENS_ENV_VAR),
            prompt: non_empty_var(PROMPT_ENV_VAR),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

impl Settings {
    /// Layer file contents and environment overrides over the defaults.
    ///
    /// A `COMMIT_MSG_MAX_TOKENS` that `set` would reject is reported and ignored. A prompt
    /// override is taken as-is, even without the `{diff}` placeholder.
    pub fn resolve(file: Option<&FileSettings>, env: &EnvOverrides) -> Settings {
        let mut settings = Settings::default();

        if let Some(file) = file {
            if let Some(model) = &file.model {
                settings.model = model.clone();
            }
            if let Some(max_tokens) = file.max_tokens {
                settings.max_tokens = max_tokens;
            }
            if let Some(prompt) = &file.prompt {
                settings.prompt = prompt.clone();
            }
        }

        if let Some(model) = &env.model {
            settings.model = model.clone();
        }
        if let Some(raw) = &env.max_tokens {
            match parse_max_tokens(raw) {
                Ok(max_tokens) => settings.max_tokens = max_tokens,
                Err(_) => warn!("{MAX_TOKENS_ENV_VAR} must be a positive integer, ignoring '{raw}'"),
            }
        }
        if let Some(prompt) = &env.prompt {
            settings.prompt = prompt.clone();
        }

        settings
    }

    /// Return a copy with one key changed, validating the new value.
    pub fn with_value(&self, key: SettingKey, value: &str) -> Result<Settings, ConfigError> {
        let mut updated = self.clone();
        match key {
            SettingKey::Model => updated.model = value.to_string(),
            SettingKey::MaxTokens => updated.max_tokens = parse_max_tokens(value)?,
            SettingKey::Prompt => {
                if !value.contains(DIFF_PLACEHOLDER) {
                    return Err(ConfigError::MissingPlaceholder);
                }
                updated.prompt = value.to_string();
            }
        }
        Ok(updated)
    }
}

/// Parse a token budget; zero and negative values are rejected.
pub fn parse_max_tokens(value: &str) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidMaxTokens(value.to_string())),
    }
}
