//! Block-level mapping from mdast nodes to Notion blocks.

use super::context::{Context, InlineContext};
use super::inline::{push_inline, rich_text, split_text};
use super::types::default_heading_color;
use super::BlocksOptions;
use crate::schema::language::code_block_language;
use crate::schema::{Block, Color, RichText};
use markdown::mdast::{self, Node};
use notionmark_core::node_kind;
use url::Url;

/// File extensions Notion accepts for external image blocks.
///
/// See <https://developers.notion.com/reference/block#image>.
pub const IMAGE_EXTENSIONS: [&str; 10] = [
    ".png", ".jpg", ".jpeg", ".gif", ".tif", ".tiff", ".bmp", ".svg", ".heic", ".webp",
];

/// Returns the extension (with its dot) of the last path segment, the way
/// Node's `path.extname` does: dotfiles have no extension.
fn path_extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next()?;
    match name.rfind('.') {
        Some(0) | None => None,
        Some(dot) => Some(&name[dot..]),
    }
}

/// Returns true if `url` is absolute and its path ends in a supported image extension.
fn is_supported_image_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    path_extension(parsed.path()).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

/// Converts an image to an image block, or to a paragraph holding the raw
/// URL when strict URL checking rejects it.
fn render_image(image: &mdast::Image, options: &BlocksOptions) -> Block {
    if !options.strict_image_urls || is_supported_image_url(&image.url) {
        Block::image(&image.url)
    } else {
        log::debug!("Rendering unsupported image URL as text: {}", image.url);
        Block::paragraph(vec![RichText::plain(&image.url)])
    }
}

/// Matches the legacy `[[_TOC_]]` marker: `[[`, then emphasis around `TOC`.
fn is_toc_marker(children: &[Node]) -> bool {
    if children.len() <= 2 {
        return false;
    }
    let (Node::Text(open), Node::Emphasis(emphasis)) = (&children[0], &children[1]) else {
        return false;
    };
    open.value == "[["
        && matches!(emphasis.children.first(), Some(Node::Text(label)) if label.value == "TOC")
}

/// Renders a paragraph. Images are hoisted out into sibling blocks placed
/// after the paragraph, since Notion has no inline images.
fn render_paragraph(para: &mdast::Paragraph, ctx: &mut Context) {
    if is_toc_marker(&para.children) {
        ctx.push(Block::table_of_contents());
        return;
    }

    let mut images = Vec::new();
    let mut spans = Vec::new();
    for child in &para.children {
        match child {
            Node::Image(image) => images.push(render_image(image, ctx.options())),
            _ => push_inline(child, InlineContext::default(), &mut spans),
        }
    }

    if !spans.is_empty() {
        ctx.push(Block::paragraph(spans));
    }
    for image in images {
        ctx.push(image);
    }
}

/// The color for a heading: explicit per-level override first, then the
/// default palette when enabled.
fn heading_color(depth: u8, options: &BlocksOptions) -> Option<Color> {
    if let Some(token) = options.heading_colors.get(depth) {
        return Some(Color::resolve(token));
    }
    options
        .use_default_heading_colors
        .then(|| Color::resolve(default_heading_color(depth)))
}

/// Renders a heading. Depths past 3 collapse into `heading_3`.
fn render_heading(heading: &mdast::Heading, ctx: &mut Context) {
    let mut spans = rich_text(&heading.children);

    if let Some(color) = heading_color(heading.depth, ctx.options()) {
        for span in &mut spans {
            span.annotations_mut().color = color;
        }
    }

    ctx.push(Block::heading(heading.depth, spans));
}

/// Renders a fenced or indented code block.
fn render_code(code: &mdast::Code, ctx: &mut Context) {
    let spans = split_text(&code.value, InlineContext::default());
    ctx.push(Block::code(spans, code_block_language(code.lang.as_deref())));
}

/// Renders a blockquote as a quote block whose content lives in its children.
fn render_blockquote(quote: &mdast::Blockquote, ctx: &mut Context) {
    let children = ctx.render_children_to_blocks(&quote.children);
    ctx.push(Block::quote(Vec::new(), children));
}

/// Renders each list item as a sibling block.
///
/// An item's leading paragraph becomes its text and the remaining children
/// are nested under it. Items that do not start with a paragraph are dropped.
fn render_list(list: &mdast::List, ctx: &mut Context) {
    for child in &list.children {
        let Node::ListItem(item) = child else {
            continue;
        };
        let Some((Node::Paragraph(para), rest)) = item.children.split_first() else {
            log::debug!("Dropping list item without a leading paragraph");
            continue;
        };

        let spans = rich_text(&para.children);
        let children = ctx.render_children_to_blocks(rest);

        let block = if list.start.is_some() {
            Block::numbered_list_item(spans, children)
        } else if let Some(checked) = item.checked {
            Block::to_do(checked, spans, children)
        } else {
            Block::bulleted_list_item(spans, children)
        };
        ctx.push(block);
    }
}

/// Renders a table. The width comes from the first row; cells hold inline
/// content only.
fn render_table(table: &mdast::Table, ctx: &mut Context) {
    let table_width = table
        .children
        .first()
        .and_then(Node::children)
        .map_or(0, Vec::len);

    let rows = table
        .children
        .iter()
        .filter_map(|row| match row {
            Node::TableRow(row) => Some(render_table_row(row)),
            _ => None,
        })
        .collect();

    ctx.push(Block::table(rows, table_width));
}

fn render_table_row(row: &mdast::TableRow) -> Block {
    let cells = row
        .children
        .iter()
        .filter_map(|cell| match cell {
            Node::TableCell(cell) => Some(rich_text(&cell.children)),
            _ => None,
        })
        .collect();
    Block::table_row(cells)
}

/// Renders display math, escaping line breaks for KaTeX.
fn render_math(math: &mdast::Math, ctx: &mut Context) {
    ctx.push(Block::equation(math.value.replace('\n', "\\\\\n")));
}

/// Maps one block-level node to zero or more blocks.
pub fn render_node(node: &Node, ctx: &mut Context) {
    match node {
        Node::Heading(heading) => render_heading(heading, ctx),
        Node::Paragraph(para) => render_paragraph(para, ctx),
        Node::Code(code) => render_code(code, ctx),
        Node::Blockquote(quote) => render_blockquote(quote, ctx),
        Node::List(list) => render_list(list, ctx),
        Node::Table(table) => render_table(table, ctx),
        Node::Math(math) => render_math(math, ctx),
        Node::ThematicBreak(_) => ctx.push(Block::divider()),
        _ => {
            log::debug!("Skipping unsupported node: {}", node_kind(node));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_extension() {
        assert_eq!(path_extension("/images/cat.png"), Some(".png"));
        assert_eq!(path_extension("/archive.tar.gz"), Some(".gz"));
        assert_eq!(path_extension("/.png"), None);
        assert_eq!(path_extension("/images/cat"), None);
        assert_eq!(path_extension(""), None);
    }

    #[test]
    fn test_image_url_validation() {
        assert!(is_supported_image_url("https://example.com/cat.png"));
        assert!(is_supported_image_url("https://example.com/cat.webp?size=large"));
        assert!(!is_supported_image_url("https://example.com/cat.PNG"));
        assert!(!is_supported_image_url("https://x.com/pic.xyz"));
        assert!(!is_supported_image_url("cat.png"));
        assert!(!is_supported_image_url("https://example.com/"));
    }

    #[test]
    fn test_toc_marker() {
        let text = |value: &str| {
            Node::Text(mdast::Text {
                value: value.to_string(),
                position: None,
            })
        };
        let emphasis = |children: Vec<Node>| {
            Node::Emphasis(mdast::Emphasis {
                children,
                position: None,
            })
        };

        assert!(is_toc_marker(&[
            text("[["),
            emphasis(vec![text("TOC")]),
            text("]]"),
        ]));
        assert!(!is_toc_marker(&[text("[["), emphasis(vec![text("TOC")])]));
        assert!(!is_toc_marker(&[
            text("[["),
            emphasis(vec![text("Contents")]),
            text("]]"),
        ]));
        assert!(!is_toc_marker(&[
            text("[["),
            emphasis(Vec::new()),
            text("]]"),
        ]));
    }
}
