#![deny(missing_docs)]
//! notionmark blocks: converts Markdown (MDAST) into Notion API block objects.

/// Notion request limits and their enforcement.
pub mod limits;
/// MDAST traversal and block mapping.
pub mod renderer;
/// Notion block, rich text and color types.
pub mod schema;

pub use limits::{LimitCallback, LimitOptions};
pub use notionmark_core::{LimitError, NotionmarkError, ParseOptions, parse_mdast};
pub use renderer::mdast::{
    BlocksOptions, HeadingColors, NonInline, RichTextOptions, markdown_to_blocks,
    markdown_to_rich_text, to_blocks, to_rich_text,
};
pub use schema::{Annotations, Block, BlockKind, Color, RichText};
