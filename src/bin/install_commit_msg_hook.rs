//! install-commit-msg-hook - install the hook into a git repository.

use std::process::ExitCode;

fn main() -> ExitCode {
    commit_msg_generator::cli::install::install_main()
}
