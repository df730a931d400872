//! AI-generated commit messages for the prepare-commit-msg hook.

pub mod message;
pub mod msg_file;
pub mod prompt;
pub mod runner;

pub use message::generate_commit_message;
pub use msg_file::{can_prepend, prepend_message};
pub use prompt::render_prompt;
pub use runner::{HookOutcome, prepare_commit_msg};
