//! Markdown front-door: configures markdown-rs and hands back the mdast root.

use crate::{NotionmarkError, SourceLocation};
use markdown::mdast::Node;
use markdown::message::{Message, Place};

/// Parser options for building markdown-rs parse options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Enable GitHub Flavored Markdown constructs (tables, task lists, ~~strike~~).
    pub gfm: bool,
    /// Enable math constructs ($inline$ and $$block$$).
    pub math: bool,
    /// Enable YAML frontmatter parsing, so a leading `---` block is not read as content.
    pub frontmatter: bool,
}

impl ParseOptions {
    /// Defaults matching what the Notion converter understands: GFM and math on.
    pub const fn notion() -> Self {
        Self {
            gfm: true,
            math: true,
            frontmatter: false,
        }
    }

    /// Plain CommonMark.
    pub const fn commonmark() -> Self {
        Self {
            gfm: false,
            math: false,
            frontmatter: false,
        }
    }

    /// Convert to markdown-rs `ParseOptions`.
    pub fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            frontmatter: self.frontmatter,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_footnote_definition = true;
            constructs.gfm_label_start_footnote = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        if self.math {
            constructs.math_flow = true;
            constructs.math_text = true;
        }

        markdown::ParseOptions {
            constructs,
            math_text_single_dollar: self.math,
            ..markdown::ParseOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::notion()
    }
}

/// Parse markdown into an MDAST tree using core options.
pub fn parse_mdast(input: &str, options: &ParseOptions) -> Result<Node, NotionmarkError> {
    parse_mdast_with_options(input, &options.to_markdown())
}

/// Parse markdown into an MDAST tree using markdown-rs `ParseOptions`.
pub fn parse_mdast_with_options(
    input: &str,
    options: &markdown::ParseOptions,
) -> Result<Node, NotionmarkError> {
    markdown::to_mdast(input, options).map_err(|err| {
        let location = message_location(&err);
        NotionmarkError::parse_error(err.to_string(), location.line, location.column)
    })
}

fn message_location(message: &Message) -> SourceLocation {
    match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::new(1, 1),
    }
}
