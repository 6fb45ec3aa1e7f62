//! Rich text runs, icons, and file references.

use serde::{Deserialize, Serialize};

/// One styled span of inline content.
///
/// The `plain_text` projection is always usable without inspecting the
/// variant; an absent value deserializes as the empty string.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RichText {
    /// Flattened text content of the run.
    #[serde(default)]
    pub plain_text: String,
    /// Link target, when the run is a link.
    #[serde(default)]
    pub href: Option<String>,
    /// Inline styling flags.
    #[serde(default)]
    pub annotations: Annotations,
    /// Run variant (text, equation, or mention).
    #[serde(flatten)]
    pub variant: RichTextVariant,
}

/// Inline styling flags for a rich text run.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub color: String,
}

/// Rich text run variants.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextVariant {
    /// Plain text, optionally carrying a link.
    Text { text: TextSpan },
    /// Inline LaTeX equation.
    Equation { equation: InlineEquation },
    /// Mention of a date, user, page, database, or link preview.
    Mention { mention: Mention },
    /// Run kind not covered by this model.
    #[serde(other)]
    Unsupported,
}

/// Content of a plain text run.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TextSpan {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

/// Link target of a text run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Link {
    pub url: String,
}

/// Inline equation expression.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InlineEquation {
    #[serde(default)]
    pub expression: String,
}

/// Mention sub-variants.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mention {
    Date { date: DateValue },
    User { user: User },
    Page { page: PageRef },
    Database { database: DatabaseRef },
    LinkPreview { link_preview: UrlRef },
    TemplateMention { template_mention: TemplateRef },
    #[serde(other)]
    Unsupported,
}

/// A date or date range.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DateValue {
    /// Start instant, ISO 8601.
    pub start: String,
    /// End instant for ranges.
    #[serde(default)]
    pub end: Option<String>,
    /// IANA time zone name, when one was set explicitly.
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// Notion user (person or bot).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Reference to another page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageRef {
    pub id: String,
}

/// Reference to a database.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseRef {
    pub id: String,
}

/// Bare URL reference.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UrlRef {
    #[serde(default)]
    pub url: String,
}

/// Template mention payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TemplateRef {
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// File reference, either externally hosted or Notion-hosted.
///
/// Notion-hosted URLs are signed and expire; callers that persist output
/// should rehost them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileSource {
    External { external: ExternalFile },
    File { file: HostedFile },
    /// Hosting kind not covered by this model.
    #[serde(other)]
    Unsupported,
}

impl FileSource {
    /// The referenced URL regardless of hosting. Empty for unsupported
    /// hosting kinds.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::External { external } => &external.url,
            Self::File { file } => &file.url,
            Self::Unsupported => "",
        }
    }
}

/// Externally hosted file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExternalFile {
    #[serde(default)]
    pub url: String,
}

/// Notion-hosted file with a signed, expiring URL.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HostedFile {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub expiry_time: Option<String>,
}

/// Page or callout icon.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Icon {
    /// Emoji glyph.
    Emoji { emoji: String },
    /// Externally hosted image.
    External { external: ExternalFile },
    /// Notion-hosted image.
    File { file: HostedFile },
    /// Icon kind not covered by this model (e.g. custom emoji).
    #[serde(other)]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_run_deserializes() {
        let run: RichText = serde_json::from_value(serde_json::json!({
            "type": "text",
            "text": { "content": "Hello", "link": null },
            "annotations": {
                "bold": true,
                "italic": false,
                "strikethrough": false,
                "underline": false,
                "code": false,
                "color": "default"
            },
            "plain_text": "Hello",
            "href": null
        }))
        .unwrap();

        assert_eq!(run.plain_text, "Hello");
        assert!(run.annotations.bold);
        match run.variant {
            RichTextVariant::Text { text } => assert_eq!(text.content, "Hello"),
            other => panic!("expected text variant, got {other:?}"),
        }
    }

    #[test]
    fn test_mention_run_deserializes() {
        let run: RichText = serde_json::from_value(serde_json::json!({
            "type": "mention",
            "mention": { "type": "date", "date": { "start": "2023-10-01" } },
            "plain_text": "2023-10-01"
        }))
        .unwrap();

        match run.variant {
            RichTextVariant::Mention {
                mention: Mention::Date { date },
            } => assert_eq!(date.start, "2023-10-01"),
            other => panic!("expected date mention, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_run_kind_falls_back() {
        let run: RichText = serde_json::from_value(serde_json::json!({
            "type": "hologram",
            "plain_text": "?"
        }))
        .unwrap();

        assert!(matches!(run.variant, RichTextVariant::Unsupported));
        assert_eq!(run.plain_text, "?");
    }

    #[test]
    fn test_file_source_url() {
        let external: FileSource = serde_json::from_value(serde_json::json!({
            "type": "external",
            "external": { "url": "https://example.com/a.png" }
        }))
        .unwrap();
        let hosted: FileSource = serde_json::from_value(serde_json::json!({
            "type": "file",
            "file": { "url": "https://files.example.com/b.png", "expiry_time": "2023-10-06T12:04:53.000Z" }
        }))
        .unwrap();

        assert_eq!(external.url(), "https://example.com/a.png");
        assert_eq!(hosted.url(), "https://files.example.com/b.png");
    }
}
