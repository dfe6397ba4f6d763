//! Notion block objects.
//!
//! A [`Block`] serializes to the API's block shape: an `object: "block"`
//! marker, a `type` discriminator, and a field named after the type holding
//! the type-specific payload.

use super::RichText;
use serde::Serialize;

/// The `object` marker every block carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    /// `"block"`
    #[default]
    Block,
}

/// A Notion block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    /// Always `"block"`.
    pub object: ObjectType,
    /// Type discriminator and payload.
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl From<BlockKind> for Block {
    fn from(kind: BlockKind) -> Self {
        Self {
            object: ObjectType::Block,
            kind,
        }
    }
}

/// Payload for blocks that only carry rich text (paragraphs, headings).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    /// Inline content.
    pub rich_text: Vec<RichText>,
}

/// Payload for blocks that carry rich text and may nest children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerBlock {
    /// Inline content.
    pub rich_text: Vec<RichText>,
    /// Nested blocks, omitted from the payload when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

/// Payload of a `to_do` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToDoBlock {
    /// Inline content.
    pub rich_text: Vec<RichText>,
    /// Checkbox state.
    pub checked: bool,
    /// Nested blocks, omitted from the payload when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

/// Payload of a `code` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    /// Code content, split into spans.
    pub rich_text: Vec<RichText>,
    /// Notion language name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Payload of a `table` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableBlock {
    /// Number of columns.
    pub table_width: usize,
    /// Markdown tables always have a header row.
    pub has_column_header: bool,
    /// Markdown has no row headers.
    pub has_row_header: bool,
    /// `table_row` blocks.
    pub children: Vec<Block>,
}

/// Payload of a `table_row` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRowBlock {
    /// One rich text array per cell.
    pub cells: Vec<Vec<RichText>>,
}

/// An externally hosted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalFile {
    /// File URL.
    pub url: String,
}

/// Payload of an `image` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageBlock {
    /// Image hosted outside Notion.
    External {
        /// File location.
        external: ExternalFile,
    },
}

/// Payload of an `equation` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquationBlock {
    /// KaTeX expression.
    pub expression: String,
}

/// Payload for blocks without configuration (`{}`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyBlock {}

/// Block type discriminator with its payload.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    Paragraph {
        paragraph: TextBlock,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: TextBlock,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: TextBlock,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: TextBlock,
    },
    Code {
        code: CodeBlock,
    },
    Quote {
        quote: ContainerBlock,
    },
    BulletedListItem {
        bulleted_list_item: ContainerBlock,
    },
    NumberedListItem {
        numbered_list_item: ContainerBlock,
    },
    ToDo {
        to_do: ToDoBlock,
    },
    Table {
        table: TableBlock,
    },
    TableRow {
        table_row: TableRowBlock,
    },
    Image {
        image: ImageBlock,
    },
    Equation {
        equation: EquationBlock,
    },
    Divider {
        divider: EmptyBlock,
    },
    TableOfContents {
        table_of_contents: EmptyBlock,
    },
}

impl Block {
    /// Creates a paragraph block.
    pub fn paragraph(rich_text: Vec<RichText>) -> Self {
        BlockKind::Paragraph {
            paragraph: TextBlock { rich_text },
        }
        .into()
    }

    /// Creates a heading block. Levels above 3 collapse into `heading_3`.
    pub fn heading(level: u8, rich_text: Vec<RichText>) -> Self {
        let payload = TextBlock { rich_text };
        match level {
            1 => BlockKind::Heading1 { heading_1: payload },
            2 => BlockKind::Heading2 { heading_2: payload },
            _ => BlockKind::Heading3 { heading_3: payload },
        }
        .into()
    }

    /// Creates a code block.
    pub fn code(rich_text: Vec<RichText>, language: Option<String>) -> Self {
        BlockKind::Code {
            code: CodeBlock {
                rich_text,
                language,
            },
        }
        .into()
    }

    /// Creates a quote block.
    pub fn quote(rich_text: Vec<RichText>, children: Vec<Block>) -> Self {
        BlockKind::Quote {
            quote: ContainerBlock {
                rich_text,
                children,
            },
        }
        .into()
    }

    /// Creates a bulleted list item.
    pub fn bulleted_list_item(rich_text: Vec<RichText>, children: Vec<Block>) -> Self {
        BlockKind::BulletedListItem {
            bulleted_list_item: ContainerBlock {
                rich_text,
                children,
            },
        }
        .into()
    }

    /// Creates a numbered list item.
    pub fn numbered_list_item(rich_text: Vec<RichText>, children: Vec<Block>) -> Self {
        BlockKind::NumberedListItem {
            numbered_list_item: ContainerBlock {
                rich_text,
                children,
            },
        }
        .into()
    }

    /// Creates a to-do item.
    pub fn to_do(checked: bool, rich_text: Vec<RichText>, children: Vec<Block>) -> Self {
        BlockKind::ToDo {
            to_do: ToDoBlock {
                rich_text,
                checked,
                children,
            },
        }
        .into()
    }

    /// Creates a table from `table_row` blocks.
    pub fn table(rows: Vec<Block>, table_width: usize) -> Self {
        BlockKind::Table {
            table: TableBlock {
                table_width,
                has_column_header: true,
                has_row_header: false,
                children: rows,
            },
        }
        .into()
    }

    /// Creates a table row.
    pub fn table_row(cells: Vec<Vec<RichText>>) -> Self {
        BlockKind::TableRow {
            table_row: TableRowBlock { cells },
        }
        .into()
    }

    /// Creates an external image block.
    pub fn image(url: impl Into<String>) -> Self {
        BlockKind::Image {
            image: ImageBlock::External {
                external: ExternalFile { url: url.into() },
            },
        }
        .into()
    }

    /// Creates an equation block.
    pub fn equation(expression: impl Into<String>) -> Self {
        BlockKind::Equation {
            equation: EquationBlock {
                expression: expression.into(),
            },
        }
        .into()
    }

    /// Creates a divider.
    pub fn divider() -> Self {
        BlockKind::Divider {
            divider: EmptyBlock {},
        }
        .into()
    }

    /// Creates a table of contents block.
    pub fn table_of_contents() -> Self {
        BlockKind::TableOfContents {
            table_of_contents: EmptyBlock {},
        }
        .into()
    }

    /// The wire name of this block's type.
    pub fn type_name(&self) -> &'static str {
        match &self.kind {
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::Heading1 { .. } => "heading_1",
            BlockKind::Heading2 { .. } => "heading_2",
            BlockKind::Heading3 { .. } => "heading_3",
            BlockKind::Code { .. } => "code",
            BlockKind::Quote { .. } => "quote",
            BlockKind::BulletedListItem { .. } => "bulleted_list_item",
            BlockKind::NumberedListItem { .. } => "numbered_list_item",
            BlockKind::ToDo { .. } => "to_do",
            BlockKind::Table { .. } => "table",
            BlockKind::TableRow { .. } => "table_row",
            BlockKind::Image { .. } => "image",
            BlockKind::Equation { .. } => "equation",
            BlockKind::Divider { .. } => "divider",
            BlockKind::TableOfContents { .. } => "table_of_contents",
        }
    }

    /// The block's own rich text, for types that have one.
    pub fn rich_text(&self) -> Option<&[RichText]> {
        match &self.kind {
            BlockKind::Paragraph { paragraph: b }
            | BlockKind::Heading1 { heading_1: b }
            | BlockKind::Heading2 { heading_2: b }
            | BlockKind::Heading3 { heading_3: b } => Some(&b.rich_text),
            BlockKind::Code { code } => Some(&code.rich_text),
            BlockKind::Quote { quote: b }
            | BlockKind::BulletedListItem {
                bulleted_list_item: b,
            }
            | BlockKind::NumberedListItem {
                numbered_list_item: b,
            } => Some(&b.rich_text),
            BlockKind::ToDo { to_do } => Some(&to_do.rich_text),
            BlockKind::Table { .. }
            | BlockKind::TableRow { .. }
            | BlockKind::Image { .. }
            | BlockKind::Equation { .. }
            | BlockKind::Divider { .. }
            | BlockKind::TableOfContents { .. } => None,
        }
    }

    /// Nested child blocks (empty for types without children).
    pub fn children(&self) -> &[Block] {
        match &self.kind {
            BlockKind::Quote { quote: b }
            | BlockKind::BulletedListItem {
                bulleted_list_item: b,
            }
            | BlockKind::NumberedListItem {
                numbered_list_item: b,
            } => &b.children,
            BlockKind::ToDo { to_do } => &to_do.children,
            BlockKind::Table { table } => &table.children,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels_collapse() {
        assert_eq!(Block::heading(1, vec![]).type_name(), "heading_1");
        assert_eq!(Block::heading(2, vec![]).type_name(), "heading_2");
        for level in 3..=6 {
            assert_eq!(Block::heading(level, vec![]).type_name(), "heading_3");
        }
    }

    #[test]
    fn test_accessors() {
        let item = Block::bulleted_list_item(
            vec![RichText::plain("parent")],
            vec![Block::paragraph(vec![RichText::plain("child")])],
        );
        assert_eq!(item.rich_text().map(<[RichText]>::len), Some(1));
        assert_eq!(item.children().len(), 1);
        assert!(Block::divider().rich_text().is_none());
        assert!(Block::divider().children().is_empty());
    }
}
