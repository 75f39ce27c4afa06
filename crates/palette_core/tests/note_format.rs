use palette_core::{format_note, Block, Emphasis, InlineStyle};
use pretty_assertions::assert_eq;

fn paragraph(text: &str) -> Block {
    Block::Paragraph {
        text: text.to_string(),
        style: InlineStyle::detect(text),
    }
}

#[test]
fn mixed_content_keeps_line_order() {
    let content = "# Plan\n- buy paint\n[ ] call supplier\n[x] pick colors\n```let x = 1;```\nplain words";
    assert_eq!(
        format_note(content),
        vec![
            Block::Heading {
                text: "Plan".to_string()
            },
            Block::ListItem {
                text: "buy paint".to_string()
            },
            Block::CheckItem {
                text: "call supplier".to_string(),
                checked: false
            },
            Block::CheckItem {
                text: "pick colors".to_string(),
                checked: true
            },
            Block::CodeBlock {
                text: "let x = 1;".to_string()
            },
            paragraph("plain words"),
        ]
    );
}

#[test]
fn blank_and_whitespace_lines_produce_no_blocks() {
    assert!(format_note("").is_empty());
    assert!(format_note("\n   \n\t\n").is_empty());
    assert_eq!(format_note("one\n\n\ntwo\r\n").len(), 2);
}

#[test]
fn first_matching_prefix_wins() {
    assert_eq!(
        format_note("# - item"),
        vec![Block::Heading {
            text: "- item".to_string()
        }]
    );
    assert_eq!(
        format_note("- [x] nested"),
        vec![Block::ListItem {
            text: "[x] nested".to_string()
        }]
    );
}

#[test]
fn prefixes_require_exact_spacing() {
    let blocks = format_note("#Title\n-item\n[X] upper\n[x]tight");
    assert!(blocks
        .iter()
        .all(|block| matches!(block, Block::Paragraph { .. })));
}

#[test]
fn paragraph_styles_follow_inline_markers() {
    let emphasis = |line: &str| match &format_note(line)[0] {
        Block::Paragraph { style, .. } => style.emphasis(),
        other => panic!("expected paragraph, got {other:?}"),
    };
    assert_eq!(emphasis("a **strong** word"), Emphasis::Bold);
    assert_eq!(emphasis("an *emphasized* word"), Emphasis::Italic);
    assert_eq!(emphasis("run `cargo` here"), Emphasis::Code);
    assert_eq!(emphasis("**bold** and `code`"), Emphasis::Bold);
    assert_eq!(emphasis("nothing special"), Emphasis::Plain);
}

#[test]
fn short_fences_yield_empty_code_blocks() {
    assert_eq!(
        format_note("```"),
        vec![Block::CodeBlock {
            text: String::new()
        }]
    );
    assert_eq!(format_note("``````")[0].text(), "");
}

#[test]
fn formatting_is_deterministic() {
    let content = "# Title\nbody with *style*\n- a\n[ ] b";
    assert_eq!(format_note(content), format_note(content));
}
