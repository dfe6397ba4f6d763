//! Rich text spans: the smallest styled unit of Notion inline content.

use super::Color;
use serde::Serialize;

/// Formatting flags attached to a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Annotations {
    /// Bold text.
    pub bold: bool,
    /// Italic text.
    pub italic: bool,
    /// Struck-through text.
    pub strikethrough: bool,
    /// Underlined text. Markdown has no underline, so this stays false.
    pub underline: bool,
    /// Inline code.
    pub code: bool,
    /// Text color.
    pub color: Color,
}

/// A link target on a text span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Link {
    /// An external URL.
    Url {
        /// The link target.
        url: String,
    },
}

impl Link {
    /// The target URL.
    pub fn url(&self) -> &str {
        match self {
            Link::Url { url } => url,
        }
    }
}

/// Payload of a `text` span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    /// The literal text.
    pub content: String,
    /// Optional link target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

/// Payload of an `equation` span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equation {
    /// KaTeX expression.
    pub expression: String,
}

/// A single rich text span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichText {
    /// Plain or styled text, optionally linked.
    Text {
        /// Formatting flags.
        annotations: Annotations,
        /// Text payload.
        text: TextContent,
    },
    /// An inline equation.
    Equation {
        /// Formatting flags.
        annotations: Annotations,
        /// Equation payload.
        equation: Equation,
    },
}

impl RichText {
    /// Creates an unstyled text span.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::text(content, Annotations::default(), None)
    }

    /// Creates a text span with the given annotations and link.
    pub fn text(content: impl Into<String>, annotations: Annotations, url: Option<&str>) -> Self {
        RichText::Text {
            annotations,
            text: TextContent {
                content: content.into(),
                link: url.map(|url| Link::Url {
                    url: url.to_string(),
                }),
            },
        }
    }

    /// Creates an equation span with default annotations.
    pub fn equation(expression: impl Into<String>) -> Self {
        RichText::Equation {
            annotations: Annotations::default(),
            equation: Equation {
                expression: expression.into(),
            },
        }
    }

    /// Returns the span's annotations.
    pub fn annotations(&self) -> &Annotations {
        match self {
            RichText::Text { annotations, .. } | RichText::Equation { annotations, .. } => {
                annotations
            }
        }
    }

    /// Returns the span's annotations for in-place editing.
    pub fn annotations_mut(&mut self) -> &mut Annotations {
        match self {
            RichText::Text { annotations, .. } | RichText::Equation { annotations, .. } => {
                annotations
            }
        }
    }

    /// Text content for text spans, the expression for equations.
    pub fn plain_text(&self) -> &str {
        match self {
            RichText::Text { text, .. } => &text.content,
            RichText::Equation { equation, .. } => &equation.expression,
        }
    }

    /// Link URL of a text span, if any.
    pub fn link_url(&self) -> Option<&str> {
        match self {
            RichText::Text { text, .. } => text.link.as_ref().map(Link::url),
            RichText::Equation { .. } => None,
        }
    }
}
