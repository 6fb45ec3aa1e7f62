//! Zenn article assembly: front matter resolution and the export
//! pipeline.
//!
//! A Zenn article is a front matter header (title, emoji, type, topics,
//! publication state) followed by the markdown body. This crate reads
//! the header fields from a Notion page's properties through a
//! configurable name [`mapping`](PropertyMapping), renders the body via
//! `zenpress-renderer`, and serializes both into the final article text.

mod emoji;
mod error;
mod exporter;
mod front_matter;
mod mapping;
mod resolver;

pub use emoji::decode_unicode_escapes;
pub use error::ArticleError;
pub use exporter::Exporter;
pub use front_matter::{ArticleType, DEFAULT_EMOJI, FrontMatter};
pub use mapping::PropertyMapping;
pub use resolver::resolve_front_matter;
// Re-exported so callers holding only markdown text don't need the
// renderer crate.
pub use zenpress_renderer::extract_image_urls;
