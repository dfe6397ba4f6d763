//! Output types mirroring the Notion API block and rich text objects.

mod block;
mod color;
pub mod language;
mod rich_text;

pub use block::{
    Block, BlockKind, CodeBlock, ContainerBlock, EmptyBlock, EquationBlock, ExternalFile,
    ImageBlock, ObjectType, TableBlock, TableRowBlock, TextBlock, ToDoBlock,
};
pub use color::{Color, UnknownColor};
pub use rich_text::{Annotations, Equation, Link, RichText, TextContent};
