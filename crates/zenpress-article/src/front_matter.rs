//! Front matter record and serialization.

use std::fmt;

use crate::emoji::decode_unicode_escapes;

/// Emoji used when the page has no emoji icon.
pub const DEFAULT_EMOJI: &str = "😀";

/// Article classification.
///
/// Zenn accepts exactly these values in the front matter `type` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArticleType {
    /// Technical article.
    #[default]
    Tech,
    /// Idea / opinion piece.
    Idea,
}

impl ArticleType {
    /// Parse a classification value.
    ///
    /// Returns None for values outside the allowed set.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "tech" => Some(Self::Tech),
            "idea" => Some(Self::Idea),
            _ => None,
        }
    }

    /// The front matter value for this classification.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::Idea => "idea",
        }
    }
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Article metadata emitted as the front matter header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    /// Article title.
    pub title: String,
    /// Emoji shown next to the title. May contain `\UXXXXXXXX` escape
    /// sequences; they are decoded during serialization.
    pub emoji: String,
    /// Article classification.
    pub kind: ArticleType,
    /// Topic tags, in selection order.
    pub topics: Vec<String>,
    /// Whether the article is published.
    pub published: bool,
    /// Publication timestamp (`yyyy-MM-dd HH:mm`), when configured.
    pub published_at: Option<String>,
}

impl FrontMatter {
    /// Serialize the front matter and body into the final article text.
    ///
    /// Field order is fixed; `published_at` is emitted only when set.
    /// An empty body ends the output at the closing `---` marker with no
    /// trailing newline; otherwise the body follows after exactly one
    /// newline.
    #[must_use]
    pub fn serialize(&self, body: &str) -> String {
        let topics = self
            .topics
            .iter()
            .map(|topic| format!("\"{topic}\""))
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = String::with_capacity(128 + body.len());
        out.push_str("---\n");
        out.push_str(&format!("title: \"{}\"\n", self.title));
        out.push_str(&format!(
            "emoji: \"{}\"\n",
            decode_unicode_escapes(&self.emoji)
        ));
        out.push_str(&format!("type: \"{}\"\n", self.kind));
        out.push_str(&format!("topics: [{topics}]\n"));
        out.push_str(&format!("published: {}", self.published));
        if let Some(published_at) = &self.published_at {
            out.push_str(&format!("\npublished_at: {published_at}"));
        }
        out.push_str("\n---");
        if !body.is_empty() {
            out.push('\n');
            out.push_str(body);
        }
        out
    }
}
