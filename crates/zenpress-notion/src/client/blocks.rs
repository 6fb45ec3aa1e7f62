//! Block children retrieval.

use serde::Deserialize;
use tracing::debug;

use super::NotionClient;
use crate::error::NotionError;
use crate::types::Block;

/// Page size for block children requests (API maximum).
const PAGE_SIZE: u32 = 100;

/// Paginated list response for block children.
#[derive(Debug, Deserialize)]
struct BlockList {
    results: Vec<Block>,
    #[serde(default)]
    next_cursor: Option<String>,
    #[serde(default)]
    has_more: bool,
}

impl NotionClient {
    /// Retrieve the ordered direct children of a block (or page).
    ///
    /// Follows pagination cursors until the full sequence is collected;
    /// source order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::PageNotFound`] when the block does not
    /// exist or is not shared with the integration.
    pub fn block_children(&self, block_id: &str) -> Result<Vec<Block>, NotionError> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut url = format!(
                "{}/blocks/{block_id}/children?page_size={PAGE_SIZE}",
                self.base_url
            );
            if let Some(ref start_cursor) = cursor {
                url.push_str("&start_cursor=");
                url.push_str(start_cursor);
            }

            let response = self.get(&url)?;
            let status = response.status().as_u16();
            let mut body = response.into_body();

            if status == 404 {
                return Err(NotionError::PageNotFound {
                    page_id: block_id.to_owned(),
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

            let list: BlockList = body.read_json()?;
            blocks.extend(list.results);

            match (list.has_more, list.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        debug!(block_id, count = blocks.len(), "Fetched block children");
        Ok(blocks)
    }
}
