//! uninstall-commit-msg-hook - remove the hook from a git repository.

use std::process::ExitCode;

fn main() -> ExitCode {
    commit_msg_generator::cli::install::uninstall_main()
}
