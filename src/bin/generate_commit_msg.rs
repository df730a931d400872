//! generate-commit-msg - prepare-commit-msg hook entry point.

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    commit_msg_generator::cli::generate::main().await
}
