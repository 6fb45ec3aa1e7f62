//! Article pipeline error types.

use zenpress_notion::NotionError;
use zenpress_renderer::RenderError;

/// Error while exporting an article.
#[derive(Debug, thiserror::Error)]
pub enum ArticleError {
    /// Notion API failure (including page-not-found).
    #[error("{0}")]
    Notion(#[from] NotionError),

    /// Body rendering failure.
    #[error("{0}")]
    Render(#[from] RenderError),

    /// A property name configured in the mapping does not exist on the
    /// page.
    #[error("mapped property \"{property}\" not found on page {page_id}")]
    MissingProperty {
        /// The page whose property set was checked.
        page_id: String,
        /// The configured property name that is absent.
        property: String,
    },
}
