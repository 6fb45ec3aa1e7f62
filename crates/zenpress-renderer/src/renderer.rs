//! Depth-first tree walk and fragment assembly.

use tracing::debug;
use zenpress_notion::types::{Block, BlockKind};
use zenpress_notion::{NotionClient, NotionError};

use crate::error::RenderError;
use crate::inline::render_rich_text;
use crate::rules;

/// Source of block children, keyed by block ID.
///
/// Implemented by [`NotionClient`] for live rendering; tests use an
/// in-memory tree.
pub trait BlockSource {
    /// Ordered direct children of the given block or page.
    fn children(&self, block_id: &str) -> Result<Vec<Block>, NotionError>;
}

impl BlockSource for NotionClient {
    fn children(&self, block_id: &str) -> Result<Vec<Block>, NotionError> {
        self.block_children(block_id)
    }
}

/// Indent applied to nested child fragments.
const CHILD_INDENT: &str = "  ";

/// Zenn markdown renderer.
///
/// Rendering is deterministic and order-preserving: sibling fragments
/// are emitted in source order and joined with one blank line; children
/// are attached under their parent per that parent's markdown
/// convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZennRenderer;

impl ZennRenderer {
    /// Create a renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Fetch and render a whole page body.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Source`] when fetching any block fails;
    /// a fetch failure aborts the whole render.
    pub fn render_page<S: BlockSource>(
        &self,
        source: &S,
        page_id: &str,
    ) -> Result<String, RenderError> {
        let mut blocks = source.children(page_id)?;
        for block in &mut blocks {
            fetch_children(source, block)?;
        }
        Ok(self.render_blocks(&blocks))
    }

    /// Render an already-fetched block tree (children embedded in
    /// [`Block::children`]). Pure; no I/O.
    #[must_use]
    pub fn render_blocks(&self, blocks: &[Block]) -> String {
        let mut fragments = Vec::with_capacity(blocks.len());
        let mut ordinal = 0usize;

        for block in blocks {
            if block.is_numbered_list_item() {
                ordinal += 1;
            } else {
                ordinal = 0;
            }
            fragments.push(self.render_block_at(block, ordinal.max(1)));
        }

        fragments.join("\n\n")
    }

    /// Render a single block and its subtree.
    #[must_use]
    pub fn render_block(&self, block: &Block) -> String {
        self.render_block_at(block, 1)
    }

    fn render_block_at(&self, block: &Block, ordinal: usize) -> String {
        let own = self.own_fragment(block, ordinal);

        match &block.kind {
            // Rows were already folded into the table fragment.
            BlockKind::Table { .. } => own,
            // Pass-through containers: children only.
            BlockKind::SyncedBlock { .. } | BlockKind::ColumnList | BlockKind::Column => {
                self.render_blocks(&block.children)
            }
            // Quote children stay under the `>` prefix.
            BlockKind::Quote { .. } => {
                if block.children.is_empty() {
                    own
                } else {
                    let nested = rules::quote_lines(&self.render_blocks(&block.children));
                    format!("{own}\n{nested}")
                }
            }
            // Child pages are standalone documents; never descend.
            BlockKind::ChildPage { .. } | BlockKind::ChildDatabase { .. } => own,
            // Everything else nests children indented under the parent.
            _ => {
                if block.children.is_empty() {
                    own
                } else {
                    format!("{own}\n{}", indent(&self.render_blocks(&block.children)))
                }
            }
        }
    }

    /// The block's local fragment, ignoring children (except tables,
    /// which are assembled from their already-rendered rows).
    fn own_fragment(&self, block: &Block, ordinal: usize) -> String {
        match &block.kind {
            BlockKind::Heading1 { heading_1 } => rules::heading(1, heading_1),
            BlockKind::Heading2 { heading_2 } => rules::heading(2, heading_2),
            BlockKind::Heading3 { heading_3 } => rules::heading(3, heading_3),
            BlockKind::Paragraph { paragraph } => render_rich_text(&paragraph.rich_text),
            BlockKind::BulletedListItem { bulleted_list_item } => {
                rules::bulleted_item(&bulleted_list_item.rich_text)
            }
            BlockKind::NumberedListItem { numbered_list_item } => {
                rules::numbered_item(ordinal, &numbered_list_item.rich_text)
            }
            BlockKind::ToDo { to_do } => rules::to_do_item(to_do),
            // No `:::details` rule; toggles render as plain text with
            // nested children (the generic fallback).
            BlockKind::Toggle { toggle } => render_rich_text(&toggle.rich_text),
            BlockKind::Quote { quote } => rules::quote(&quote.rich_text),
            BlockKind::Callout { callout } => rules::callout(callout),
            BlockKind::Code { code } => rules::code(code),
            BlockKind::Equation { equation } => rules::equation(equation),
            BlockKind::Image { image } => rules::image(image),
            BlockKind::Bookmark { bookmark } => rules::bookmark(bookmark),
            BlockKind::Embed { embed } => rules::embed(embed),
            BlockKind::LinkPreview { link_preview } => rules::link_preview(link_preview),
            BlockKind::Table { table } => {
                let row_fragments: Vec<String> = block
                    .children
                    .iter()
                    .map(|row| self.render_block(row))
                    .collect();
                rules::table(table.table_width, &row_fragments)
            }
            BlockKind::TableRow { table_row } => rules::table_row(table_row),
            BlockKind::ChildPage { child_page } => rules::child_title(child_page),
            BlockKind::ChildDatabase { child_database } => rules::child_title(child_database),
            BlockKind::File { file } => rules::file_link("file", file),
            BlockKind::Pdf { pdf } => rules::file_link("pdf", pdf),
            BlockKind::Video { video } => rules::file_link("video", video),
            BlockKind::Divider => "---".to_owned(),
            BlockKind::SyncedBlock { .. }
            | BlockKind::Breadcrumb
            | BlockKind::TableOfContents
            | BlockKind::ColumnList
            | BlockKind::Column => String::new(),
            BlockKind::Unsupported => {
                debug!(block_id = %block.id, "Skipping unsupported block kind");
                String::new()
            }
        }
    }
}

/// Fetch the subtree below one block, in place.
///
/// Synced duplicates resolve to the original block's children. Child
/// pages and databases are standalone documents and are not descended
/// into.
fn fetch_children<S: BlockSource>(source: &S, block: &mut Block) -> Result<(), RenderError> {
    if block.is_child_page() || block.is_child_database() {
        return Ok(());
    }

    let origin = match &block.kind {
        BlockKind::SyncedBlock { synced_block } => synced_block
            .synced_from
            .as_ref()
            .map(|from| from.block_id.clone()),
        _ => None,
    };

    if let Some(origin_id) = origin {
        block.children = source.children(&origin_id)?;
    } else if block.has_children {
        block.children = source.children(&block.id)?;
    } else {
        return Ok(());
    }

    for child in &mut block.children {
        fetch_children(source, child)?;
    }
    Ok(())
}

/// Indent every non-empty line of a rendered fragment one level.
fn indent(markdown: &str) -> String {
    markdown
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{CHILD_INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
