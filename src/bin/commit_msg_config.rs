//! commit-msg-config - show, set, or reset the generator settings.

use std::process::ExitCode;

fn main() -> ExitCode {
    commit_msg_generator::cli::config::main()
}
