//! Error types for the Notion client.

/// Error from Notion API operations.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// The requested page does not exist or is not shared with the
    /// integration.
    #[error("page not found: {page_id}")]
    PageNotFound {
        /// The page ID that failed to resolve.
        page_id: String,
    },
}
