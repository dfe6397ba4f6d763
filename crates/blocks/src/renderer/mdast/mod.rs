//! MDAST to Notion block conversion.
//!
//! This module converts a markdown-rs AST (MDAST) into Notion block objects
//! or, for inline-only targets such as page titles, into a flat rich text
//! array. Both entry points finish with the request-limit pass from
//! [`crate::limits`].
//!
//! # Module Structure
//!
//! - `types` - Option types (heading colors, non-inline policy)
//! - `context` - Inline formatting context and block accumulator
//! - `inline` - Phrasing content to rich text spans
//! - `render` - Block-level node mapping

mod context;
pub mod inline;
pub mod render;
mod types;

pub use context::{Context, InlineContext};
pub use types::{DEFAULT_HEADING_COLORS, HeadingColors, NonInline, default_heading_color};

use crate::limits::{self, LimitOptions};
use crate::schema::{Block, RichText};
use markdown::mdast::Node;
use notionmark_core::{NotionmarkError, ParseOptions, node_kind, parse_mdast};
use render::render_node;
use serde::{Deserialize, Serialize};

/// Options for [`to_blocks`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlocksOptions {
    /// Request-limit behavior.
    #[serde(default)]
    pub notion_limits: LimitOptions,
    /// Whether image URLs must be absolute and end in a supported image
    /// extension. Rejected images are rendered as a paragraph holding the URL.
    #[serde(default = "default_strict_image_urls")]
    pub strict_image_urls: bool,
    /// Per-level heading colors.
    #[serde(default)]
    pub heading_colors: HeadingColors,
    /// Whether headings without an override get the default palette
    /// ([`DEFAULT_HEADING_COLORS`]).
    #[serde(default)]
    pub use_default_heading_colors: bool,
}

fn default_strict_image_urls() -> bool {
    true
}

impl Default for BlocksOptions {
    fn default() -> Self {
        Self {
            notion_limits: LimitOptions::default(),
            strict_image_urls: default_strict_image_urls(),
            heading_colors: HeadingColors::default(),
            use_default_heading_colors: false,
        }
    }
}

/// Options for [`to_rich_text`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RichTextOptions {
    /// Request-limit behavior.
    #[serde(default)]
    pub notion_limits: LimitOptions,
    /// What to do with top-level nodes that are not paragraphs.
    #[serde(default)]
    pub non_inline: NonInline,
}

/// The top-level nodes of a tree: a root's children, or the node itself.
fn top_level(root: &Node) -> &[Node] {
    match root {
        Node::Root(root) => &root.children,
        other => std::slice::from_ref(other),
    }
}

/// Converts an MDAST tree into Notion blocks.
///
/// Never fails: unsupported nodes are skipped, malformed list items are
/// dropped and rejected images degrade to text. Payload size violations go
/// to `options.notion_limits.on_error`.
///
/// # Examples
///
/// ```
/// use notionmark_blocks::renderer::mdast::{BlocksOptions, to_blocks};
/// use notionmark_core::{ParseOptions, parse_mdast};
///
/// let root = parse_mdast("# Hello", &ParseOptions::notion()).unwrap();
/// let blocks = to_blocks(&root, &BlocksOptions::default());
/// assert_eq!(blocks[0].type_name(), "heading_1");
/// ```
pub fn to_blocks(root: &Node, options: &BlocksOptions) -> Vec<Block> {
    log::debug!("Converting MDAST to blocks with options: {:?}", options);

    let mut ctx = Context::new(options);
    for node in top_level(root) {
        render_node(node, &mut ctx);
    }

    limits::enforce_blocks(ctx.finish(), &options.notion_limits)
}

/// Converts the paragraphs of an MDAST tree into one flat rich text array.
///
/// Other top-level nodes are skipped, or rejected with
/// [`NotionmarkError::UnsupportedElement`] under [`NonInline::Raise`].
pub fn to_rich_text(
    root: &Node,
    options: &RichTextOptions,
) -> Result<Vec<RichText>, NotionmarkError> {
    log::debug!("Converting MDAST to rich text with options: {:?}", options);

    let mut spans = Vec::new();
    for node in top_level(root) {
        match node {
            Node::Paragraph(para) => {
                inline::push_children(&para.children, InlineContext::default(), &mut spans);
            }
            other if options.non_inline == NonInline::Raise => {
                return Err(NotionmarkError::unsupported_element(other));
            }
            other => {
                log::debug!("Skipping non-inline node: {}", node_kind(other));
            }
        }
    }

    Ok(limits::enforce_rich_text(spans, &options.notion_limits))
}

/// Parses Markdown (GFM and math enabled) and converts it to blocks.
pub fn markdown_to_blocks(
    input: &str,
    options: &BlocksOptions,
) -> Result<Vec<Block>, NotionmarkError> {
    let root = parse_mdast(input, &ParseOptions::notion())?;
    Ok(to_blocks(&root, options))
}

/// Parses Markdown (GFM and math enabled) and converts it to rich text.
pub fn markdown_to_rich_text(
    input: &str,
    options: &RichTextOptions,
) -> Result<Vec<RichText>, NotionmarkError> {
    let root = parse_mdast(input, &ParseOptions::notion())?;
    to_rich_text(&root, options)
}
