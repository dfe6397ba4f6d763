#![deny(missing_docs)]
//! notionmark core: markdown front-door and error types shared by the converters.

/// Core error and limit-violation types.
pub mod error;
/// Markdown parsing front-door.
pub mod parse;

pub use error::{LimitError, NotionmarkError, SourceLocation, node_kind};
pub use parse::{ParseOptions, parse_mdast, parse_mdast_with_options};
