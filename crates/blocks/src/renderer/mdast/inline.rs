//! Inline segmentation: phrasing content to rich text spans.

use super::context::InlineContext;
use crate::schema::RichText;
use markdown::mdast::Node;
use notionmark_core::node_kind;

/// Maximum characters per text span produced by segmentation.
pub const SEGMENT_CHARS: usize = 2000;

/// Splits `text` into consecutive slices of at most `max_chars` characters.
///
/// Slices always end on a char boundary. Empty input yields no slices.
pub fn chunks(text: &str, max_chars: usize) -> impl Iterator<Item = &str> {
    let max_chars = max_chars.max(1);
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest
            .char_indices()
            .nth(max_chars)
            .map_or(rest.len(), |(index, _)| index);
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

/// Text spans for `text`, split at [`SEGMENT_CHARS`].
pub fn split_text(text: &str, ctx: InlineContext<'_>) -> Vec<RichText> {
    chunks(text, SEGMENT_CHARS).map(|chunk| ctx.span(chunk)).collect()
}

/// Converts inline nodes to spans with no inherited formatting.
pub fn rich_text(nodes: &[Node]) -> Vec<RichText> {
    let mut spans = Vec::new();
    push_children(nodes, InlineContext::default(), &mut spans);
    spans
}

/// Appends the spans of every node in `nodes`.
pub fn push_children<'a>(nodes: &'a [Node], ctx: InlineContext<'a>, out: &mut Vec<RichText>) {
    for node in nodes {
        push_inline(node, ctx, out);
    }
}

/// Appends the spans for one inline node and its descendants.
pub fn push_inline<'a>(node: &'a Node, ctx: InlineContext<'a>, out: &mut Vec<RichText>) {
    match node {
        Node::Text(text) => out.extend(split_text(&text.value, ctx)),
        Node::Delete(delete) => push_children(&delete.children, ctx.with_strikethrough(), out),
        Node::Emphasis(emphasis) => push_children(&emphasis.children, ctx.with_italic(), out),
        Node::Strong(strong) => push_children(&strong.children, ctx.with_bold(), out),
        Node::Link(link) => push_children(&link.children, ctx.with_link(&link.url), out),
        // Kept whole regardless of length; the limit pass deals with it.
        Node::InlineCode(code) => out.push(ctx.with_code().span(&code.value)),
        Node::InlineMath(math) => out.push(RichText::equation(&math.value)),
        _ => {
            log::debug!("Skipping unsupported inline node: {}", node_kind(node));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Annotations;
    use notionmark_core::{ParseOptions, parse_mdast};

    /// Spans of the first paragraph in `input`.
    fn paragraph_spans(input: &str) -> Vec<RichText> {
        let root = parse_mdast(input, &ParseOptions::notion()).unwrap();
        match root.children().and_then(|children| children.first()) {
            Some(Node::Paragraph(para)) => rich_text(&para.children),
            other => panic!("Expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn test_chunks_respect_char_boundaries() {
        let text = "ééééé";
        let parts: Vec<&str> = chunks(text, 2).collect();
        assert_eq!(parts, vec!["éé", "éé", "é"]);
        assert_eq!(chunks("", 2).count(), 0);
    }

    #[test]
    fn test_long_text_is_split() {
        let text = "a".repeat(SEGMENT_CHARS * 2 + 1);
        let spans = split_text(&text, InlineContext::default());
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].plain_text().len(), SEGMENT_CHARS);
        assert_eq!(spans[2].plain_text(), "a");
    }

    #[test]
    fn test_nested_formatting_composes() {
        let spans = paragraph_spans("*it **both** ~~it-strike~~*");
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].plain_text(), "it ");
        assert_eq!(
            *spans[1].annotations(),
            Annotations {
                bold: true,
                italic: true,
                ..Annotations::default()
            }
        );
        assert!(spans[3].annotations().italic && spans[3].annotations().strikethrough);
        assert!(!spans[3].annotations().bold);
    }

    #[test]
    fn test_link_copied_onto_each_span() {
        let spans = paragraph_spans("[plain **bold**](https://example.com) after");
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].link_url(), Some("https://example.com"));
        assert_eq!(spans[1].link_url(), Some("https://example.com"));
        assert!(spans[1].annotations().bold);
        assert_eq!(spans[2].link_url(), None);
    }

    #[test]
    fn test_inline_code_is_atomic() {
        let code = "x".repeat(SEGMENT_CHARS + 10);
        let spans = paragraph_spans(&format!("`{}`", code));
        assert_eq!(spans.len(), 1);
        assert!(spans[0].annotations().code);
        assert_eq!(spans[0].plain_text(), code);
    }

    #[test]
    fn test_inline_math_is_equation_without_formatting() {
        let spans = paragraph_spans("**bold $x^2$**");
        assert_eq!(spans.len(), 2);
        match &spans[1] {
            RichText::Equation {
                annotations,
                equation,
            } => {
                assert_eq!(equation.expression, "x^2");
                assert_eq!(*annotations, Annotations::default());
            }
            other => panic!("Expected equation span, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_inline_nodes_are_skipped() {
        let spans = paragraph_spans("before ![img](https://example.com/a.png) after");
        let texts: Vec<&str> = spans.iter().map(RichText::plain_text).collect();
        assert_eq!(texts, vec!["before ", " after"]);
    }
}
