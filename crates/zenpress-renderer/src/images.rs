//! Image reference extraction from rendered markdown.

use std::sync::LazyLock;

use regex::Regex;

/// Image syntax with the reference captured: `![alt](ref)` where `ref`
/// is an http(s) URL or any non-parenthesis, non-whitespace token.
static IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[.*?\]\((https?://[^\s)]+|[^)\s]+)\)").expect("invalid image pattern")
});

/// Extract every image reference from markdown text, in order of
/// appearance, duplicates retained.
///
/// This is a textual re-scan rather than a structural pass: callers that
/// only hold the rendered markdown (where block kinds are gone) still
/// need to find embedded images, e.g. to rehost expiring Notion URLs.
/// Plain links (`[text](url)`) are not matched.
#[must_use]
pub fn extract_image_urls(markdown: &str) -> Vec<String> {
    IMAGE_PATTERN
        .captures_iter(markdown)
        .filter_map(|captures| captures.get(1))
        .map(|reference| reference.as_str().to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_urls_in_document_order() {
        let markdown = "\
# Travel

![Eiffel Tower](https://via.placeholder.com/500x300)

Some text in between.

![Bali Beach](https://via.placeholder.com/500x400)

![Tokyo Skyline](https://via.placeholder.com/400x300)
";
        assert_eq!(
            extract_image_urls(markdown),
            [
                "https://via.placeholder.com/500x300",
                "https://via.placeholder.com/500x400",
                "https://via.placeholder.com/400x300",
            ]
        );
    }

    #[test]
    fn test_ignores_plain_links() {
        let markdown = "![a](https://example.com/a.png)\n[doc](https://example.com/doc)\n![b](https://example.com/b.png)";
        assert_eq!(
            extract_image_urls(markdown),
            ["https://example.com/a.png", "https://example.com/b.png"]
        );
    }

    #[test]
    fn test_keeps_duplicates() {
        let markdown = "![a](x.png)\n![b](x.png)";
        assert_eq!(extract_image_urls(markdown), ["x.png", "x.png"]);
    }

    #[test]
    fn test_relative_references_match() {
        let markdown = "![diagram](images/arch.svg)";
        assert_eq!(extract_image_urls(markdown), ["images/arch.svg"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_image_urls(""), Vec::<String>::new());
    }

    #[test]
    fn test_no_matches() {
        assert_eq!(
            extract_image_urls("no images here"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_query_strings_survive() {
        let url = "https://files.example.com/a.png?X-Amz-Signature=abc&x-id=GetObject";
        let markdown = format!("![image]({url})");
        assert_eq!(extract_image_urls(&markdown), [url]);
    }
}
