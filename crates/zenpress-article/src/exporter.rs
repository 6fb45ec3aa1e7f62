//! Article export pipeline.

use tracing::info;
use zenpress_notion::NotionClient;
use zenpress_renderer::{ZennRenderer, extract_image_urls};

use crate::error::ArticleError;
use crate::front_matter::FrontMatter;
use crate::mapping::PropertyMapping;
use crate::resolver::resolve_front_matter;

/// Article exporter: one Notion client plus the renderer.
///
/// Construct one per export; there is no shared state and no caching, so
/// every call re-reads the page.
pub struct Exporter {
    client: NotionClient,
    renderer: ZennRenderer,
}

impl Exporter {
    /// Create an exporter from a Notion integration token.
    #[must_use]
    pub fn new(token: &str) -> Self {
        Self {
            client: NotionClient::new(token),
            renderer: ZennRenderer::new(),
        }
    }

    /// Create an exporter from an existing client.
    #[must_use]
    pub fn with_client(client: NotionClient) -> Self {
        Self {
            client,
            renderer: ZennRenderer::new(),
        }
    }

    /// Render the page body as Zenn markdown, without front matter.
    pub fn body_markdown(&self, page_id: &str) -> Result<String, ArticleError> {
        Ok(self.renderer.render_page(&self.client, page_id)?)
    }

    /// Resolve the front matter record from the page's properties.
    pub fn front_matter(
        &self,
        page_id: &str,
        mapping: &PropertyMapping,
    ) -> Result<FrontMatter, ArticleError> {
        let page = self.client.page(page_id)?;
        resolve_front_matter(&page, mapping)
    }

    /// Serialize the front matter alone (no body).
    pub fn front_matter_markdown(
        &self,
        page_id: &str,
        mapping: &PropertyMapping,
    ) -> Result<String, ArticleError> {
        Ok(self.front_matter(page_id, mapping)?.serialize(""))
    }

    /// Render the complete article: front matter plus body.
    pub fn render(&self, page_id: &str, mapping: &PropertyMapping) -> Result<String, ArticleError> {
        let body = self.body_markdown(page_id)?;
        let front_matter = self.front_matter(page_id, mapping)?;
        info!(page_id, title = %front_matter.title, "Rendered article");
        Ok(front_matter.serialize(&body))
    }

    /// List the image URLs embedded in the page's rendered body.
    pub fn list_image_urls(&self, page_id: &str) -> Result<Vec<String>, ArticleError> {
        Ok(extract_image_urls(&self.body_markdown(page_id)?))
    }
}
