//! Page retrieval.

use tracing::debug;

use super::NotionClient;
use crate::error::NotionError;
use crate::types::Page;

impl NotionClient {
    /// Retrieve a page record (properties and icon; no body content).
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::PageNotFound`] when the page does not exist
    /// or is not shared with the integration.
    pub fn page(&self, page_id: &str) -> Result<Page, NotionError> {
        let url = format!("{}/pages/{page_id}", self.base_url);
        let response = self.get(&url)?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status == 404 {
            return Err(NotionError::PageNotFound {
                page_id: page_id.to_owned(),
            });
        }
        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(NotionError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let page: Page = body.read_json()?;
        debug!(page_id = %page.id, "Fetched page");
        Ok(page)
    }
}
