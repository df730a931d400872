//! Git integration: staged diff extraction.

pub mod diff;

pub use diff::{
    GitCli, MAX_DIFF_CHARS, TRUNCATION_MARKER, VersionControlClient, bound_diff, get_staged_diff,
};
