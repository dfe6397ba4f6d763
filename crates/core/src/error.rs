use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Location of an mdast node, falling back to the document start for
    /// nodes built without position data.
    pub fn of_node(node: &markdown::mdast::Node) -> Self {
        node.position()
            .map(|position| Self::new(position.start.line, position.start.column))
            .unwrap_or_else(|| Self::new(1, 1))
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that abort a conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotionmarkError {
    /// markdown-rs parser error surfaced through the front-door.
    #[error("Parse error at {location}: {message}")]
    MarkdownAdapter {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// A block-level node reached a conversion that only accepts inline content.
    #[error("Unsupported markdown element at {location}: {kind}")]
    UnsupportedElement {
        /// mdast node kind (e.g. `heading`, `list`)
        kind: String,
        /// Source location
        location: SourceLocation,
    },
}

impl NotionmarkError {
    /// Create a parse error with location
    pub fn parse_error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::MarkdownAdapter {
            message: message.into(),
            location: SourceLocation::new(line, column),
        }
    }

    /// Create an unsupported element error for the given node
    pub fn unsupported_element(node: &markdown::mdast::Node) -> Self {
        Self::UnsupportedElement {
            kind: node_kind(node).to_string(),
            location: SourceLocation::of_node(node),
        }
    }
}

/// A converted payload exceeds one of the Notion API request limits.
///
/// These never abort a conversion; they are handed to the caller's
/// limit callback, which decides whether to log, collect or panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitError {
    /// Too many top-level blocks.
    #[error("Resulting blocks array exceeds Notion limit ({limit})")]
    BlocksExceeded {
        /// The ceiling that was exceeded
        limit: usize,
        /// Actual length
        actual: usize,
    },
    /// Too many rich text spans.
    #[error("Resulting richTexts array exceeds Notion limit ({limit})")]
    RichTextsExceeded {
        /// The ceiling that was exceeded
        limit: usize,
        /// Actual length
        actual: usize,
    },
    /// A single text span carries too many characters.
    #[error("Resulting text content exceeds Notion limit ({limit})")]
    TextContentExceeded {
        /// The ceiling that was exceeded
        limit: usize,
        /// Actual length in characters
        actual: usize,
    },
    /// A link URL is too long. URLs are reported but never truncated.
    #[error("Resulting text URL exceeds Notion limit ({limit})")]
    LinkUrlExceeded {
        /// The ceiling that was exceeded
        limit: usize,
        /// Actual length in characters
        actual: usize,
    },
}

/// Returns the mdast type name of a node (`heading`, `inlineCode`, ...).
pub fn node_kind(node: &markdown::mdast::Node) -> &'static str {
    use markdown::mdast::Node;

    match node {
        Node::Root(_) => "root",
        Node::Blockquote(_) => "blockquote",
        Node::FootnoteDefinition(_) => "footnoteDefinition",
        Node::List(_) => "list",
        Node::Toml(_) => "toml",
        Node::Yaml(_) => "yaml",
        Node::Break(_) => "break",
        Node::InlineCode(_) => "inlineCode",
        Node::InlineMath(_) => "inlineMath",
        Node::Delete(_) => "delete",
        Node::Emphasis(_) => "emphasis",
        Node::FootnoteReference(_) => "footnoteReference",
        Node::Html(_) => "html",
        Node::Image(_) => "image",
        Node::ImageReference(_) => "imageReference",
        Node::Link(_) => "link",
        Node::LinkReference(_) => "linkReference",
        Node::Strong(_) => "strong",
        Node::Text(_) => "text",
        Node::Code(_) => "code",
        Node::Math(_) => "math",
        Node::Heading(_) => "heading",
        Node::ThematicBreak(_) => "thematicBreak",
        Node::Table(_) => "table",
        Node::TableRow(_) => "tableRow",
        Node::TableCell(_) => "tableCell",
        Node::ListItem(_) => "listItem",
        Node::Definition(_) => "definition",
        Node::Paragraph(_) => "paragraph",
        _ => "mdx",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown::mdast::{Node, ThematicBreak};
    use markdown::unist::Position;

    #[test]
    fn test_limit_error_messages() {
        let err = LimitError::BlocksExceeded {
            limit: 1000,
            actual: 1001,
        };
        assert_eq!(
            err.to_string(),
            "Resulting blocks array exceeds Notion limit (1000)"
        );

        let err = LimitError::LinkUrlExceeded {
            limit: 1000,
            actual: 4000,
        };
        assert_eq!(
            err.to_string(),
            "Resulting text URL exceeds Notion limit (1000)"
        );
    }

    #[test]
    fn test_unsupported_element_uses_node_position() {
        let node = Node::ThematicBreak(ThematicBreak {
            position: Some(Position::new(3, 1, 10, 3, 4, 13)),
        });
        let err = NotionmarkError::unsupported_element(&node);
        assert_eq!(
            err,
            NotionmarkError::UnsupportedElement {
                kind: "thematicBreak".to_string(),
                location: SourceLocation::new(3, 1),
            }
        );
        assert_eq!(
            err.to_string(),
            "Unsupported markdown element at 3:1: thematicBreak"
        );
    }

    #[test]
    fn test_parse_error_message() {
        let err = NotionmarkError::parse_error("Unexpected character", 2, 5);
        assert_eq!(
            err,
            NotionmarkError::MarkdownAdapter {
                message: "Unexpected character".to_string(),
                location: SourceLocation::new(2, 5),
            }
        );
        assert_eq!(err.to_string(), "Parse error at 2:5: Unexpected character");
    }

    #[test]
    fn test_location_without_position() {
        let node = Node::ThematicBreak(ThematicBreak { position: None });
        assert_eq!(SourceLocation::of_node(&node), SourceLocation::new(1, 1));
    }
}
