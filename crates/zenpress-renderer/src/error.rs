//! Renderer error types.

use zenpress_notion::NotionError;

/// Error while rendering a page.
///
/// Only block fetching can fail; malformed block payloads degrade to
/// empty fragments instead of erroring.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Fetching blocks from the source failed.
    #[error("{0}")]
    Source(#[from] NotionError),
}
