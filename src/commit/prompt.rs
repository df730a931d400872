//! Prompt construction for AI-generated commit messages.

use crate::config::DIFF_PLACEHOLDER;

/// Insert the diff into the template at the `{diff}` placeholder.
///
/// Every occurrence is replaced literally; other braces are left alone.
/// A template without the placeholder is returned unchanged.
pub fn render_prompt(template: &str, diff: &str) -> String {
    template.replace(DIFF_PLACEHOLDER, diff)
}
