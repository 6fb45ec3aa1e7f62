//! Notion REST API client.
//!
//! Sync HTTP client for the Notion API with bearer-token authentication.
//! One client is constructed per render request; there is no process-wide
//! state and no caching.

mod blocks;
mod pages;

use std::time::Duration;

use ureq::Agent;

use crate::error::NotionError;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Notion API base URL.
const API_BASE_URL: &str = "https://api.notion.com/v1";

/// Notion API version sent with every request.
const NOTION_VERSION: &str = "2022-06-28";

/// Notion REST API client.
pub struct NotionClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl NotionClient {
    /// Create a client from an integration token.
    #[must_use]
    pub fn new(token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: API_BASE_URL.to_owned(),
            token: token.to_owned(),
        }
    }

    /// Override the API base URL. Used by tests against a local stub.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    /// Issue an authenticated GET and return the raw response.
    fn get(&self, url: &str) -> Result<ureq::http::Response<ureq::Body>, NotionError> {
        let response = self
            .agent
            .get(url)
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("Notion-Version", NOTION_VERSION)
            .header("Accept", "application/json")
            .call()?;
        Ok(response)
    }
}
