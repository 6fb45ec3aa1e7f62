//! Per-kind fragment rules.
//!
//! Zenn-specific rules (bookmark cards, message callouts, math blocks,
//! captioned images, filename-annotated code fences) live here next to
//! the generic markdown rules. Each function maps one block payload to
//! its fragment; children are attached by the walker.

use zenpress_notion::rich_text::joined_text;
use zenpress_notion::types::{
    BookmarkPayload, CalloutPayload, ChildTitle, CodePayload, EquationPayload, FilePayload,
    HeadingPayload, Icon, RichText, TableRowPayload, ToDoPayload, UrlPayload,
};

use crate::inline::render_rich_text;

/// Link card: `@[card](url)` on its own line, padded with blank lines.
#[must_use]
pub(crate) fn bookmark(payload: &BookmarkPayload) -> String {
    if payload.url.is_empty() {
        return String::new();
    }
    format!("\n@[card]({})\n", payload.url)
}

/// Image with optional caption line (`*caption*` below the image).
///
/// The alt text falls back to `"image"` when no caption is set. An image
/// without a resolvable URL renders as nothing.
#[must_use]
pub(crate) fn image(payload: &FilePayload) -> String {
    let url = payload.source.url();
    if url.is_empty() {
        return String::new();
    }

    let caption = joined_text(&payload.caption);
    let alt = if caption.is_empty() { "image" } else { &caption };
    let mut fragment = format!("![{alt}]({url})");
    if !caption.is_empty() {
        fragment.push_str(&format!("\n*{caption}*"));
    }
    fragment
}

/// Content embed: the bare URL padded with blank lines. Zenn expands
/// known URLs (tweets, videos) on its own.
#[must_use]
pub(crate) fn embed(payload: &UrlPayload) -> String {
    if payload.url.is_empty() {
        return String::new();
    }
    format!("\n{}\n", payload.url)
}

/// Block-level math: `$$` fenced expression.
#[must_use]
pub(crate) fn equation(payload: &EquationPayload) -> String {
    format!("$$\n{}\n$$", payload.expression)
}

/// Message callout: `:::message` fenced directive with the emoji icon
/// inlined before the text. Non-emoji icons are dropped.
#[must_use]
pub(crate) fn callout(payload: &CalloutPayload) -> String {
    let icon = match &payload.icon {
        Some(Icon::Emoji { emoji }) => emoji.as_str(),
        _ => "",
    };
    let text = joined_text(&payload.rich_text);
    format!("\n:::message\n{icon} {text}\n:::\n")
}

/// Fenced code block with Zenn's filename annotation.
///
/// The caption is read as a filename. Three fence shapes:
/// - `diff` keeps its language and appends the filename (or `text`):
///   ```` ```diff main.rs ````
/// - plain text with a filename drops the language tag: ```` ```notes.txt ````
/// - everything else appends `:filename` when one is set:
///   ```` ```rust:main.rs ````
///
/// Notion's `"plain text"` language is remapped to `text`.
#[must_use]
pub(crate) fn code(payload: &CodePayload) -> String {
    let language = if payload.language == "plain text" {
        "text"
    } else {
        payload.language.as_str()
    };
    let filename = joined_text(&payload.caption);
    let body = joined_text(&payload.rich_text);

    if language == "diff" {
        let target = if filename.is_empty() {
            "text"
        } else {
            filename.as_str()
        };
        return format!("```diff {target}\n{body}\n```");
    }

    if language == "text" && !filename.is_empty() {
        return format!("```{filename}\n{body}\n```");
    }

    let annotation = if filename.is_empty() {
        String::new()
    } else {
        format!(":{filename}")
    };
    format!("```{language}{annotation}\n{body}\n```")
}

/// ATX heading of the given level.
#[must_use]
pub(crate) fn heading(level: usize, payload: &HeadingPayload) -> String {
    format!("{} {}", "#".repeat(level), render_rich_text(&payload.rich_text))
}

/// Bulleted list item.
#[must_use]
pub(crate) fn bulleted_item(rich_text: &[RichText]) -> String {
    format!("- {}", render_rich_text(rich_text))
}

/// Numbered list item with its ordinal within the sibling run.
#[must_use]
pub(crate) fn numbered_item(ordinal: usize, rich_text: &[RichText]) -> String {
    format!("{ordinal}. {}", render_rich_text(rich_text))
}

/// Task list item.
#[must_use]
pub(crate) fn to_do_item(payload: &ToDoPayload) -> String {
    let marker = if payload.checked { "x" } else { " " };
    format!("- [{marker}] {}", render_rich_text(&payload.rich_text))
}

/// Blockquote; every line of the text gets the `>` prefix.
#[must_use]
pub(crate) fn quote(rich_text: &[RichText]) -> String {
    quote_lines(&render_rich_text(rich_text))
}

/// Prefix every line of already-rendered markdown with `>`.
#[must_use]
pub(crate) fn quote_lines(markdown: &str) -> String {
    markdown
        .lines()
        .map(|line| {
            if line.is_empty() {
                ">".to_owned()
            } else {
                format!("> {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Child page / child database reference: the bold title.
#[must_use]
pub(crate) fn child_title(payload: &ChildTitle) -> String {
    if payload.title.is_empty() {
        return String::new();
    }
    format!("**{}**", payload.title)
}

/// File, PDF, or video reference: a link labelled by the caption, the
/// filename, or the kind name, in that order of preference.
#[must_use]
pub(crate) fn file_link(kind: &str, payload: &FilePayload) -> String {
    let url = payload.source.url();
    if url.is_empty() {
        return String::new();
    }

    let caption = joined_text(&payload.caption);
    let label = if caption.is_empty() {
        payload.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(kind)
    } else {
        caption.as_str()
    };
    format!("[{label}]({url})")
}

/// Link preview: the bare URL.
#[must_use]
pub(crate) fn link_preview(payload: &UrlPayload) -> String {
    payload.url.clone()
}

/// One table row: `| cell | cell |`.
#[must_use]
pub(crate) fn table_row(payload: &TableRowPayload) -> String {
    let cells: Vec<String> = payload
        .cells
        .iter()
        .map(|cell| render_rich_text(cell))
        .collect();
    format!("| {} |", cells.join(" | "))
}

/// Assemble a table from rendered row fragments: first row, separator,
/// remaining rows.
#[must_use]
pub(crate) fn table(columns: usize, rows: &[String]) -> String {
    let Some((header, body)) = rows.split_first() else {
        return String::new();
    };

    let width = if columns > 0 {
        columns
    } else {
        header.matches(" | ").count() + 1
    };
    let separator = format!("|{}", " --- |".repeat(width));

    let mut out = vec![header.clone(), separator];
    out.extend(body.iter().cloned());
    out.join("\n")
}
