//! Block tree to Zenn markdown renderer.
//!
//! The renderer walks a page's block tree depth-first and emits one
//! markdown fragment per block. Zenn's dialect extensions (card embeds,
//! `:::message` callouts, `$$` math blocks, captioned images, filename
//! annotations on code fences) get dedicated rules; everything else uses
//! generic markdown rules.
//!
//! # Architecture
//!
//! Fetching is abstracted behind the [`BlockSource`] trait so the walk
//! can run against the live API client or an in-memory tree in tests:
//!
//! ```no_run
//! use zenpress_notion::NotionClient;
//! use zenpress_renderer::ZennRenderer;
//!
//! let client = NotionClient::new("secret_token");
//! let markdown = ZennRenderer::new()
//!     .render_page(&client, "a1b2c3d4")
//!     .unwrap();
//! ```
//!
//! Rendering itself is pure: each block's fragment is a function of the
//! block's payload and its already-rendered children.

mod error;
mod images;
mod inline;
mod renderer;
mod rules;

pub use error::RenderError;
pub use images::extract_image_urls;
pub use inline::render_rich_text;
pub use renderer::{BlockSource, ZennRenderer};
