//! Notion REST API client and typed content model.
//!
//! Provides a sync HTTP client for the Notion API (bearer-token auth)
//! and the tagged types the rest of the workspace consumes: blocks,
//! rich text runs, pages, and page properties.
//!
//! Block and property records arrive from the API as tagged unions; the
//! `type` field uniquely determines which payload key is populated. The
//! model expresses this as internally tagged enums so that every consumer
//! dispatches with an exhaustive `match` instead of ad-hoc field probing.
//! Unknown tags deserialize into explicit `Unsupported` variants and are
//! never an error.

mod client;
mod error;
pub mod rich_text;
pub mod types;

pub use client::NotionClient;
pub use error::NotionError;
pub use types::{Block, BlockKind, Icon, Page, Property, PropertyValue, RichText};
