//! Inline rendering of rich text runs.

use zenpress_notion::types::{RichText, RichTextVariant};

/// Render a rich text sequence to inline markdown.
///
/// Annotations map to markdown emphasis (`**bold**`, `_italic_`,
/// `~~strikethrough~~`, backtick code); underline has no markdown
/// equivalent and is dropped. Runs with a link target become
/// `[text](url)`. Inline equations become `$expr$`; mentions render as
/// their plain text projection.
#[must_use]
pub fn render_rich_text(runs: &[RichText]) -> String {
    runs.iter().map(render_run).collect()
}

fn render_run(run: &RichText) -> String {
    let content = match &run.variant {
        RichTextVariant::Text { text } => text.content.clone(),
        RichTextVariant::Equation { equation } => format!("${}$", equation.expression),
        RichTextVariant::Mention { .. } | RichTextVariant::Unsupported => run.plain_text.clone(),
    };

    if content.is_empty() {
        return content;
    }

    let mut styled = content;
    if run.annotations.code {
        styled = format!("`{styled}`");
    }
    if run.annotations.strikethrough {
        styled = format!("~~{styled}~~");
    }
    if run.annotations.bold {
        styled = format!("**{styled}**");
    }
    if run.annotations.italic {
        styled = format!("_{styled}_");
    }

    match link_target(run) {
        Some(url) => format!("[{styled}]({url})"),
        None => styled,
    }
}

fn link_target(run: &RichText) -> Option<&str> {
    if let RichTextVariant::Text { text } = &run.variant
        && let Some(link) = &text.link
    {
        return Some(&link.url);
    }
    run.href.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use zenpress_notion::types::{Annotations, InlineEquation, Link, TextSpan};

    fn run(text: &str, annotations: Annotations) -> RichText {
        RichText {
            plain_text: text.to_owned(),
            href: None,
            annotations,
            variant: RichTextVariant::Text {
                text: TextSpan {
                    content: text.to_owned(),
                    link: None,
                },
            },
        }
    }

    #[test]
    fn test_plain_run() {
        assert_eq!(render_rich_text(&[run("hello", Annotations::default())]), "hello");
    }

    #[test]
    fn test_bold_run() {
        let annotations = Annotations {
            bold: true,
            ..Annotations::default()
        };
        assert_eq!(render_rich_text(&[run("太字", annotations)]), "**太字**");
    }

    #[test]
    fn test_italic_run() {
        let annotations = Annotations {
            italic: true,
            ..Annotations::default()
        };
        assert_eq!(
            render_rich_text(&[run("イタリック", annotations)]),
            "_イタリック_"
        );
    }

    #[test]
    fn test_strikethrough_run() {
        let annotations = Annotations {
            strikethrough: true,
            ..Annotations::default()
        };
        assert_eq!(
            render_rich_text(&[run("取り消し線", annotations)]),
            "~~取り消し線~~"
        );
    }

    #[test]
    fn test_code_run_inside_sentence() {
        let runs = [
            run("インラインの", Annotations::default()),
            run(
                "code",
                Annotations {
                    code: true,
                    ..Annotations::default()
                },
            ),
            run("の挿入", Annotations::default()),
        ];
        assert_eq!(render_rich_text(&runs), "インラインの`code`の挿入");
    }

    #[test]
    fn test_linked_run() {
        let linked = RichText {
            plain_text: "テキストのリンク".to_owned(),
            href: Some("https://example.com/articles/1".to_owned()),
            annotations: Annotations::default(),
            variant: RichTextVariant::Text {
                text: TextSpan {
                    content: "テキストのリンク".to_owned(),
                    link: Some(Link {
                        url: "https://example.com/articles/1".to_owned(),
                    }),
                },
            },
        };
        assert_eq!(
            render_rich_text(&[linked]),
            "[テキストのリンク](https://example.com/articles/1)"
        );
    }

    #[test]
    fn test_inline_equation() {
        let equation = RichText {
            plain_text: "e=mc^2".to_owned(),
            href: None,
            annotations: Annotations::default(),
            variant: RichTextVariant::Equation {
                equation: InlineEquation {
                    expression: "e=mc^2".to_owned(),
                },
            },
        };
        assert_eq!(render_rich_text(&[equation]), "$e=mc^2$");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(render_rich_text(&[]), "");
    }
}
