#![allow(missing_docs)]
pub mod mdast;

pub use mdast::{
    BlocksOptions, HeadingColors, NonInline, RichTextOptions, markdown_to_blocks,
    markdown_to_rich_text, to_blocks, to_rich_text,
};
