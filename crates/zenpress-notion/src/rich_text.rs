//! Plain-text extraction from rich text runs.
//!
//! Two contracts coexist deliberately. Page titles are read with
//! [`title_text`], which takes the first run only (a title is a single
//! run in practice, and downstream front matter depends on that exact
//! behavior). Captions, callout text, and code bodies are read with
//! [`joined_text`], which concatenates every run.

use crate::types::RichText;

/// Plain text of the **first** run, or the empty string when the
/// sequence is empty.
#[must_use]
pub fn title_text(runs: &[RichText]) -> String {
    runs.first().map(|run| run.plain_text.clone()).unwrap_or_default()
}

/// Concatenated plain text of all runs.
#[must_use]
pub fn joined_text(runs: &[RichText]) -> String {
    runs.iter().map(|run| run.plain_text.as_str()).collect()
}
