//! Block tree types.
//!
//! A [`Block`] is one node of a page's content tree. The `type` tag of
//! the wire record selects the [`BlockKind`] variant and with it the
//! payload that is populated; no other payload key is present on a
//! well-formed record.

use serde::{Deserialize, Serialize};

use super::text::{FileSource, Icon, RichText};

/// One node of a page's content tree.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Block {
    /// Stable block identifier.
    pub id: String,
    /// Whether the block has child blocks to fetch.
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub archived: bool,
    /// Kind tag plus the payload it selects.
    #[serde(flatten)]
    pub kind: BlockKind,
    /// Child blocks, filled in by the tree walker. Not part of the wire
    /// record (children are fetched through a separate endpoint).
    #[serde(skip)]
    pub children: Vec<Block>,
}

/// Block kind and payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: HeadingPayload },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: HeadingPayload },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: HeadingPayload },
    Paragraph { paragraph: TextPayload },
    BulletedListItem { bulleted_list_item: TextPayload },
    NumberedListItem { numbered_list_item: TextPayload },
    ToDo { to_do: ToDoPayload },
    Toggle { toggle: TextPayload },
    Quote { quote: TextPayload },
    Callout { callout: CalloutPayload },
    Code { code: CodePayload },
    Equation { equation: EquationPayload },
    Image { image: FilePayload },
    Bookmark { bookmark: BookmarkPayload },
    Embed { embed: UrlPayload },
    LinkPreview { link_preview: UrlPayload },
    Table { table: TablePayload },
    TableRow { table_row: TableRowPayload },
    SyncedBlock { synced_block: SyncedPayload },
    ChildPage { child_page: ChildTitle },
    ChildDatabase { child_database: ChildTitle },
    File { file: FilePayload },
    Pdf { pdf: FilePayload },
    Video { video: FilePayload },
    Divider,
    Breadcrumb,
    TableOfContents,
    ColumnList,
    Column,
    /// Block kind not covered by this model. Renders as nothing.
    #[serde(other)]
    Unsupported,
}

/// Heading payload (levels 1-3).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HeadingPayload {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    /// Toggleable headings carry children.
    #[serde(default)]
    pub is_toggleable: bool,
    #[serde(default)]
    pub color: String,
}

/// Payload shared by paragraph, list items, toggle, and quote.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TextPayload {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub color: String,
}

/// To-do item payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToDoPayload {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub color: String,
}

/// Callout payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CalloutPayload {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub color: String,
}

/// Fenced code payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CodePayload {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    /// Caption runs; Zenn rendering reads these as the filename.
    #[serde(default)]
    pub caption: Vec<RichText>,
    #[serde(default)]
    pub language: String,
}

/// Block-level equation payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EquationPayload {
    #[serde(default)]
    pub expression: String,
}

/// Payload for image, file, PDF, and video blocks.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilePayload {
    #[serde(default)]
    pub caption: Vec<RichText>,
    /// External vs Notion-hosted discriminant.
    #[serde(flatten)]
    pub source: FileSource,
    #[serde(default)]
    pub name: Option<String>,
}

/// Bookmark payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BookmarkPayload {
    #[serde(default)]
    pub caption: Vec<RichText>,
    #[serde(default)]
    pub url: String,
}

/// Payload for embed and link preview blocks.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UrlPayload {
    #[serde(default)]
    pub url: String,
}

/// Table payload. Rows arrive as `table_row` children.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TablePayload {
    #[serde(default)]
    pub table_width: usize,
    #[serde(default)]
    pub has_column_header: bool,
    #[serde(default)]
    pub has_row_header: bool,
}

/// One table row; one cell per column, each a rich text sequence.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TableRowPayload {
    #[serde(default)]
    pub cells: Vec<Vec<RichText>>,
}

/// Synced block payload. The original carries `synced_from: null`;
/// duplicates point at the original block.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SyncedPayload {
    #[serde(default)]
    pub synced_from: Option<SyncedFrom>,
}

/// Reference from a duplicate synced block to its original.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncedFrom {
    pub block_id: String,
}

/// Title payload of child page and child database blocks.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChildTitle {
    #[serde(default)]
    pub title: String,
}

impl Block {
    /// The block's type tag as it appears on the wire.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            BlockKind::Heading1 { .. } => "heading_1",
            BlockKind::Heading2 { .. } => "heading_2",
            BlockKind::Heading3 { .. } => "heading_3",
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::BulletedListItem { .. } => "bulleted_list_item",
            BlockKind::NumberedListItem { .. } => "numbered_list_item",
            BlockKind::ToDo { .. } => "to_do",
            BlockKind::Toggle { .. } => "toggle",
            BlockKind::Quote { .. } => "quote",
            BlockKind::Callout { .. } => "callout",
            BlockKind::Code { .. } => "code",
            BlockKind::Equation { .. } => "equation",
            BlockKind::Image { .. } => "image",
            BlockKind::Bookmark { .. } => "bookmark",
            BlockKind::Embed { .. } => "embed",
            BlockKind::LinkPreview { .. } => "link_preview",
            BlockKind::Table { .. } => "table",
            BlockKind::TableRow { .. } => "table_row",
            BlockKind::SyncedBlock { .. } => "synced_block",
            BlockKind::ChildPage { .. } => "child_page",
            BlockKind::ChildDatabase { .. } => "child_database",
            BlockKind::File { .. } => "file",
            BlockKind::Pdf { .. } => "pdf",
            BlockKind::Video { .. } => "video",
            BlockKind::Divider => "divider",
            BlockKind::Breadcrumb => "breadcrumb",
            BlockKind::TableOfContents => "table_of_contents",
            BlockKind::ColumnList => "column_list",
            BlockKind::Column => "column",
            BlockKind::Unsupported => "unsupported",
        }
    }

    /// Whether this block's type tag is `heading_1`.
    #[must_use]
    pub fn is_heading_1(&self) -> bool {
        matches!(self.kind, BlockKind::Heading1 { .. })
    }

    /// Whether this block's type tag is `heading_2`.
    #[must_use]
    pub fn is_heading_2(&self) -> bool {
        matches!(self.kind, BlockKind::Heading2 { .. })
    }

    /// Whether this block's type tag is `heading_3`.
    #[must_use]
    pub fn is_heading_3(&self) -> bool {
        matches!(self.kind, BlockKind::Heading3 { .. })
    }

    /// Whether this block's type tag is `paragraph`.
    #[must_use]
    pub fn is_paragraph(&self) -> bool {
        matches!(self.kind, BlockKind::Paragraph { .. })
    }

    /// Whether this block's type tag is `bulleted_list_item`.
    #[must_use]
    pub fn is_bulleted_list_item(&self) -> bool {
        matches!(self.kind, BlockKind::BulletedListItem { .. })
    }

    /// Whether this block's type tag is `numbered_list_item`.
    #[must_use]
    pub fn is_numbered_list_item(&self) -> bool {
        matches!(self.kind, BlockKind::NumberedListItem { .. })
    }

    /// Whether this block's type tag is `to_do`.
    #[must_use]
    pub fn is_to_do(&self) -> bool {
        matches!(self.kind, BlockKind::ToDo { .. })
    }

    /// Whether this block's type tag is `toggle`.
    #[must_use]
    pub fn is_toggle(&self) -> bool {
        matches!(self.kind, BlockKind::Toggle { .. })
    }

    /// Whether this block's type tag is `quote`.
    #[must_use]
    pub fn is_quote(&self) -> bool {
        matches!(self.kind, BlockKind::Quote { .. })
    }

    /// Whether this block's type tag is `callout`.
    #[must_use]
    pub fn is_callout(&self) -> bool {
        matches!(self.kind, BlockKind::Callout { .. })
    }

    /// Whether this block's type tag is `code`.
    #[must_use]
    pub fn is_code(&self) -> bool {
        matches!(self.kind, BlockKind::Code { .. })
    }

    /// Whether this block's type tag is `equation`.
    #[must_use]
    pub fn is_equation(&self) -> bool {
        matches!(self.kind, BlockKind::Equation { .. })
    }

    /// Whether this block's type tag is `image`.
    #[must_use]
    pub fn is_image(&self) -> bool {
        matches!(self.kind, BlockKind::Image { .. })
    }

    /// Whether this block's type tag is `bookmark`.
    #[must_use]
    pub fn is_bookmark(&self) -> bool {
        matches!(self.kind, BlockKind::Bookmark { .. })
    }

    /// Whether this block's type tag is `embed`.
    #[must_use]
    pub fn is_embed(&self) -> bool {
        matches!(self.kind, BlockKind::Embed { .. })
    }

    /// Whether this block's type tag is `link_preview`.
    #[must_use]
    pub fn is_link_preview(&self) -> bool {
        matches!(self.kind, BlockKind::LinkPreview { .. })
    }

    /// Whether this block's type tag is `table`.
    #[must_use]
    pub fn is_table(&self) -> bool {
        matches!(self.kind, BlockKind::Table { .. })
    }

    /// Whether this block's type tag is `table_row`.
    #[must_use]
    pub fn is_table_row(&self) -> bool {
        matches!(self.kind, BlockKind::TableRow { .. })
    }

    /// Whether this block's type tag is `synced_block`.
    #[must_use]
    pub fn is_synced_block(&self) -> bool {
        matches!(self.kind, BlockKind::SyncedBlock { .. })
    }

    /// Whether this block's type tag is `child_page`.
    #[must_use]
    pub fn is_child_page(&self) -> bool {
        matches!(self.kind, BlockKind::ChildPage { .. })
    }

    /// Whether this block's type tag is `child_database`.
    #[must_use]
    pub fn is_child_database(&self) -> bool {
        matches!(self.kind, BlockKind::ChildDatabase { .. })
    }

    /// Whether this block's type tag is `file`.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self.kind, BlockKind::File { .. })
    }

    /// Whether this block's type tag is `pdf`.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        matches!(self.kind, BlockKind::Pdf { .. })
    }

    /// Whether this block's type tag is `video`.
    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self.kind, BlockKind::Video { .. })
    }

    /// Whether this block's type tag is `divider`.
    #[must_use]
    pub fn is_divider(&self) -> bool {
        matches!(self.kind, BlockKind::Divider)
    }

    /// Whether this block's type tag is `breadcrumb`.
    #[must_use]
    pub fn is_breadcrumb(&self) -> bool {
        matches!(self.kind, BlockKind::Breadcrumb)
    }

    /// Whether this block's type tag is `table_of_contents`.
    #[must_use]
    pub fn is_table_of_contents(&self) -> bool {
        matches!(self.kind, BlockKind::TableOfContents)
    }

    /// Whether this block's type tag is `column_list`.
    #[must_use]
    pub fn is_column_list(&self) -> bool {
        matches!(self.kind, BlockKind::ColumnList)
    }

    /// Whether this block's type tag is `column`.
    #[must_use]
    pub fn is_column(&self) -> bool {
        matches!(self.kind, BlockKind::Column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(json: serde_json::Value) -> Block {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_paragraph_deserializes() {
        let block = block(serde_json::json!({
            "object": "block",
            "id": "e0c2eb47-d4eb-45f7-abc3-004bb369d113",
            "type": "paragraph",
            "has_children": false,
            "paragraph": {
                "rich_text": [{
                    "type": "text",
                    "text": { "content": "Lorem ipsum", "link": null },
                    "plain_text": "Lorem ipsum"
                }],
                "color": "default"
            }
        }));

        assert!(block.is_paragraph());
        match &block.kind {
            BlockKind::Paragraph { paragraph } => {
                assert_eq!(paragraph.rich_text[0].plain_text, "Lorem ipsum");
            }
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        let block = block(serde_json::json!({
            "id": "b1",
            "type": "ai_block",
            "ai_block": {}
        }));

        assert!(matches!(block.kind, BlockKind::Unsupported));
        assert_eq!(block.kind_name(), "unsupported");
    }

    #[test]
    fn test_code_payload_defaults_missing_fields() {
        // Missing caption and rich_text arrays must not fail the parse.
        let block = block(serde_json::json!({
            "id": "c1",
            "type": "code",
            "code": { "language": "rust" }
        }));

        match &block.kind {
            BlockKind::Code { code } => {
                assert!(code.caption.is_empty());
                assert!(code.rich_text.is_empty());
                assert_eq!(code.language, "rust");
            }
            other => panic!("expected code, got {other:?}"),
        }
    }

    #[test]
    fn test_exactly_one_predicate_matches_per_kind() {
        let samples = [
            serde_json::json!({ "id": "b", "type": "heading_1", "heading_1": { "rich_text": [] } }),
            serde_json::json!({ "id": "b", "type": "heading_2", "heading_2": { "rich_text": [] } }),
            serde_json::json!({ "id": "b", "type": "heading_3", "heading_3": { "rich_text": [] } }),
            serde_json::json!({ "id": "b", "type": "paragraph", "paragraph": { "rich_text": [] } }),
            serde_json::json!({ "id": "b", "type": "bulleted_list_item", "bulleted_list_item": { "rich_text": [] } }),
            serde_json::json!({ "id": "b", "type": "numbered_list_item", "numbered_list_item": { "rich_text": [] } }),
            serde_json::json!({ "id": "b", "type": "to_do", "to_do": { "rich_text": [], "checked": true } }),
            serde_json::json!({ "id": "b", "type": "toggle", "toggle": { "rich_text": [] } }),
            serde_json::json!({ "id": "b", "type": "quote", "quote": { "rich_text": [] } }),
            serde_json::json!({ "id": "b", "type": "callout", "callout": { "rich_text": [] } }),
            serde_json::json!({ "id": "b", "type": "code", "code": { "language": "rust" } }),
            serde_json::json!({ "id": "b", "type": "equation", "equation": { "expression": "e=mc^2" } }),
            serde_json::json!({ "id": "b", "type": "image", "image": { "type": "external", "external": { "url": "u" } } }),
            serde_json::json!({ "id": "b", "type": "bookmark", "bookmark": { "url": "u" } }),
            serde_json::json!({ "id": "b", "type": "embed", "embed": { "url": "u" } }),
            serde_json::json!({ "id": "b", "type": "link_preview", "link_preview": { "url": "u" } }),
            serde_json::json!({ "id": "b", "type": "table", "table": { "table_width": 2 } }),
            serde_json::json!({ "id": "b", "type": "table_row", "table_row": { "cells": [] } }),
            serde_json::json!({ "id": "b", "type": "synced_block", "synced_block": { "synced_from": null } }),
            serde_json::json!({ "id": "b", "type": "child_page", "child_page": { "title": "t" } }),
            serde_json::json!({ "id": "b", "type": "child_database", "child_database": { "title": "t" } }),
            serde_json::json!({ "id": "b", "type": "file", "file": { "type": "external", "external": { "url": "u" } } }),
            serde_json::json!({ "id": "b", "type": "pdf", "pdf": { "type": "external", "external": { "url": "u" } } }),
            serde_json::json!({ "id": "b", "type": "video", "video": { "type": "external", "external": { "url": "u" } } }),
            serde_json::json!({ "id": "b", "type": "divider", "divider": {} }),
            serde_json::json!({ "id": "b", "type": "breadcrumb", "breadcrumb": {} }),
            serde_json::json!({ "id": "b", "type": "table_of_contents", "table_of_contents": {} }),
            serde_json::json!({ "id": "b", "type": "column_list", "column_list": {} }),
            serde_json::json!({ "id": "b", "type": "column", "column": {} }),
        ];

        let predicates: &[(&str, fn(&Block) -> bool)] = &[
            ("heading_1", Block::is_heading_1),
            ("heading_2", Block::is_heading_2),
            ("heading_3", Block::is_heading_3),
            ("paragraph", Block::is_paragraph),
            ("bulleted_list_item", Block::is_bulleted_list_item),
            ("numbered_list_item", Block::is_numbered_list_item),
            ("to_do", Block::is_to_do),
            ("toggle", Block::is_toggle),
            ("quote", Block::is_quote),
            ("callout", Block::is_callout),
            ("code", Block::is_code),
            ("equation", Block::is_equation),
            ("image", Block::is_image),
            ("bookmark", Block::is_bookmark),
            ("embed", Block::is_embed),
            ("link_preview", Block::is_link_preview),
            ("table", Block::is_table),
            ("table_row", Block::is_table_row),
            ("synced_block", Block::is_synced_block),
            ("child_page", Block::is_child_page),
            ("child_database", Block::is_child_database),
            ("file", Block::is_file),
            ("pdf", Block::is_pdf),
            ("video", Block::is_video),
            ("divider", Block::is_divider),
            ("breadcrumb", Block::is_breadcrumb),
            ("table_of_contents", Block::is_table_of_contents),
            ("column_list", Block::is_column_list),
            ("column", Block::is_column),
        ];

        for sample in samples {
            let expected = sample["type"].as_str().unwrap().to_owned();
            let block = block(sample);
            assert_eq!(block.kind_name(), expected);
            for (name, predicate) in predicates {
                assert_eq!(
                    predicate(&block),
                    *name == expected,
                    "predicate {name} on a {expected} block"
                );
            }
        }
    }
}
