//! Layered settings: environment overrides, the JSON settings file, and defaults.

pub mod settings;
pub mod store;

pub use settings::{
    DIFF_PLACEHOLDER, EnvOverrides, FileSettings, SettingKey, Settings, parse_max_tokens,
};
pub use store::{CONFIG_FILE_NAME, SettingsStore, default_config_path};
