//! Conversion state for the mdast renderer.

use super::BlocksOptions;
use crate::schema::{Annotations, Block, RichText};
use markdown::mdast::Node;

/// Formatting inherited from ancestor inline nodes.
///
/// This is a small `Copy` value: every recursion level derives its own
/// context from its parent's, so sibling subtrees never observe each
/// other's formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineContext<'a> {
    /// Inside `**strong**`.
    pub bold: bool,
    /// Inside `*emphasis*`.
    pub italic: bool,
    /// Inside `~~delete~~`.
    pub strikethrough: bool,
    /// Inside `` `code` ``.
    pub code: bool,
    /// URL of the closest enclosing link.
    pub link: Option<&'a str>,
}

impl<'a> InlineContext<'a> {
    /// Context for the children of a strong node.
    pub fn with_bold(self) -> Self {
        Self { bold: true, ..self }
    }

    /// Context for the children of an emphasis node.
    pub fn with_italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }

    /// Context for the children of a delete node.
    pub fn with_strikethrough(self) -> Self {
        Self {
            strikethrough: true,
            ..self
        }
    }

    /// Context for inline code content.
    pub fn with_code(self) -> Self {
        Self { code: true, ..self }
    }

    /// Context for the children of a link node. Inner links win.
    pub fn with_link(self, url: &'a str) -> Self {
        Self {
            link: Some(url),
            ..self
        }
    }

    /// The annotation set this context describes.
    pub fn annotations(&self) -> Annotations {
        Annotations {
            bold: self.bold,
            italic: self.italic,
            strikethrough: self.strikethrough,
            code: self.code,
            ..Annotations::default()
        }
    }

    /// Builds a text span carrying this context's formatting and link.
    pub fn span(&self, content: &str) -> RichText {
        RichText::text(content, self.annotations(), self.link)
    }
}

/// Collects blocks while walking the tree.
pub struct Context<'a> {
    /// Completed blocks, in document order.
    pub blocks: Vec<Block>,
    options: &'a BlocksOptions,
}

impl<'a> Context<'a> {
    /// Creates an empty context.
    pub fn new(options: &'a BlocksOptions) -> Self {
        Self {
            blocks: Vec::new(),
            options,
        }
    }

    /// The conversion options.
    pub fn options(&self) -> &'a BlocksOptions {
        self.options
    }

    /// Appends a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Renders child nodes in a fresh context and returns their blocks,
    /// for attaching as nested children.
    pub fn render_children_to_blocks(&self, children: &[Node]) -> Vec<Block> {
        use super::render::render_node;

        let mut child_ctx = Context::new(self.options);
        for child in children {
            render_node(child, &mut child_ctx);
        }
        child_ctx.finish()
    }

    /// Consumes the context and returns the blocks.
    pub fn finish(self) -> Vec<Block> {
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Color;

    #[test]
    fn test_contexts_compose_without_leaking() {
        let root = InlineContext::default();
        let strong = root.with_bold();
        let strong_em = strong.with_italic();

        assert_eq!(root, InlineContext::default());
        assert!(strong.bold && !strong.italic);
        assert!(strong_em.bold && strong_em.italic);
    }

    #[test]
    fn test_inner_link_wins() {
        let ctx = InlineContext::default()
            .with_link("https://outer.example")
            .with_link("https://inner.example");
        assert_eq!(ctx.link, Some("https://inner.example"));
    }

    #[test]
    fn test_span_uses_default_color() {
        let span = InlineContext::default().with_strikethrough().span("gone");
        let annotations = span.annotations();
        assert!(annotations.strikethrough);
        assert!(!annotations.underline);
        assert_eq!(annotations.color, Color::Default);
    }
}
