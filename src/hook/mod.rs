//! The prepare-commit-msg hook script and its installer.

pub mod install;

pub use install::{
    HOOK_NAME, HOOK_SCRIPT, UninstallOutcome, ensure_repository, hook_path, install_hook,
    resolve_repo_path, uninstall_hook,
};
