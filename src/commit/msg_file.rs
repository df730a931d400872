//! Rewriting the commit message file git hands to the hook.

/// Whether a generated message may be prepended to `existing`.
///
/// Only when the file is empty or every non-blank line is a `#` comment, so a
/// message the user already typed (or a merge message) is never touched.
pub fn can_prepend(existing: &str) -> bool {
    existing
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .all(|line| line.starts_with('#'))
}

/// The generated message, one blank line, then the original content verbatim.
pub fn prepend_message(message: &str, existing: &str) -> String {
    format!("{message}\n\n{existing}")
}
