//! CLI error types.

use zenpress_article::ArticleError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Article(#[from] ArticleError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
