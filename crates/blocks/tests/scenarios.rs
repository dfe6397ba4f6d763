use markdown::mdast::{self, Node};
use notionmark_blocks::{
    Block, BlockKind, BlocksOptions, HeadingColors, markdown_to_blocks, to_blocks,
};
use serde_json::json;

/// One line per block, children indented, with the block's plain text.
fn outline(blocks: &[Block]) -> String {
    let mut lines = Vec::new();
    push_outline(blocks, 0, &mut lines);
    lines.join("\n")
}

fn push_outline(blocks: &[Block], depth: usize, lines: &mut Vec<String>) {
    for block in blocks {
        let indent = "  ".repeat(depth);
        let text = match (&block.kind, block.rich_text()) {
            (BlockKind::Equation { equation }, _) => format!(" {:?}", equation.expression),
            (_, Some(spans)) if !spans.is_empty() => {
                let joined: String = spans.iter().map(|span| span.plain_text()).collect();
                format!(" {:?}", joined)
            }
            _ => String::new(),
        };
        lines.push(format!("{}{}{}", indent, block.type_name(), text));
        push_outline(block.children(), depth + 1, lines);
    }
}

fn annotations(bold: bool, color: &str) -> serde_json::Value {
    json!({
        "bold": bold,
        "italic": false,
        "strikethrough": false,
        "underline": false,
        "code": false,
        "color": color
    })
}

#[test]
fn document_outline() {
    let input = "# Guide\n\nIntro with ![logo](https://example.com/logo.svg)\n\n- one\n  - nested\n- two\n\n> quoted\n\n---\n\n$$\nE = mc^2\n$$";
    let blocks = markdown_to_blocks(input, &BlocksOptions::default()).unwrap();

    insta::assert_snapshot!(outline(&blocks), @r#"
    heading_1 "Guide"
    paragraph "Intro with "
    image
    bulleted_list_item "one"
      bulleted_list_item "nested"
    bulleted_list_item "two"
    quote
      paragraph "quoted"
    divider
    equation "E = mc^2"
    "#);
}

#[test]
fn paragraph_wire_shape() {
    let blocks =
        markdown_to_blocks("Some [**link**](https://example.com)", &BlocksOptions::default())
            .unwrap();

    assert_eq!(
        serde_json::to_value(&blocks).unwrap(),
        json!([{
            "object": "block",
            "type": "paragraph",
            "paragraph": {
                "rich_text": [
                    {
                        "type": "text",
                        "text": { "content": "Some " },
                        "annotations": annotations(false, "default")
                    },
                    {
                        "type": "text",
                        "text": {
                            "content": "link",
                            "link": { "type": "url", "url": "https://example.com" }
                        },
                        "annotations": annotations(true, "default")
                    }
                ]
            }
        }])
    );
}

#[test]
fn heading_color_wire_shape() {
    let options = BlocksOptions {
        heading_colors: HeadingColors {
            h3: Some("#4DB8FF".into()),
            ..Default::default()
        },
        ..Default::default()
    };
    let blocks = markdown_to_blocks("### Deep", &options).unwrap();

    assert_eq!(
        serde_json::to_value(&blocks).unwrap(),
        json!([{
            "object": "block",
            "type": "heading_3",
            "heading_3": {
                "rich_text": [{
                    "type": "text",
                    "text": { "content": "Deep" },
                    "annotations": annotations(false, "blue")
                }]
            }
        }])
    );
}

#[test]
fn structural_blocks_wire_shape() {
    let input = "- [x] task\n\n| h |\n| - |\n| v |\n\n![cat](https://example.com/cat.png)\n\n```py\npass\n```";
    let blocks = markdown_to_blocks(input, &BlocksOptions::default()).unwrap();
    let value = serde_json::to_value(&blocks).unwrap();

    assert_eq!(value[0]["type"], "to_do");
    assert_eq!(value[0]["to_do"]["checked"], true);
    assert!(value[0]["to_do"].get("children").is_none());

    assert_eq!(
        value[1],
        json!({
            "object": "block",
            "type": "table",
            "table": {
                "table_width": 1,
                "has_column_header": true,
                "has_row_header": false,
                "children": [
                    {
                        "object": "block",
                        "type": "table_row",
                        "table_row": { "cells": [[{
                            "type": "text",
                            "text": { "content": "h" },
                            "annotations": annotations(false, "default")
                        }]] }
                    },
                    {
                        "object": "block",
                        "type": "table_row",
                        "table_row": { "cells": [[{
                            "type": "text",
                            "text": { "content": "v" },
                            "annotations": annotations(false, "default")
                        }]] }
                    }
                ]
            }
        })
    );

    assert_eq!(
        value[2],
        json!({
            "object": "block",
            "type": "image",
            "image": {
                "type": "external",
                "external": { "url": "https://example.com/cat.png" }
            }
        })
    );

    assert_eq!(value[3]["code"]["language"], "python");
}

#[test]
fn empty_payload_blocks_wire_shape() {
    let blocks = markdown_to_blocks("***", &BlocksOptions::default()).unwrap();
    assert_eq!(
        serde_json::to_value(&blocks).unwrap(),
        json!([{ "object": "block", "type": "divider", "divider": {} }])
    );
}

#[test]
fn table_of_contents_marker() {
    let text = |value: &str| {
        Node::Text(mdast::Text {
            value: value.to_string(),
            position: None,
        })
    };
    let root = Node::Root(mdast::Root {
        children: vec![Node::Paragraph(mdast::Paragraph {
            children: vec![
                text("[["),
                Node::Emphasis(mdast::Emphasis {
                    children: vec![text("TOC")],
                    position: None,
                }),
                text("]]"),
            ],
            position: None,
        })],
        position: None,
    });

    let blocks = to_blocks(&root, &BlocksOptions::default());
    assert_eq!(
        serde_json::to_value(&blocks).unwrap(),
        json!([{
            "object": "block",
            "type": "table_of_contents",
            "table_of_contents": {}
        }])
    );
}
