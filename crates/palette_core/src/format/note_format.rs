//! Line-based note formatter.
//!
//! Each non-blank line becomes exactly one [`Block`]. Lines are classified by
//! prefix in a fixed priority order, so `"# - item"` is a heading whose text
//! is `"- item"`. Inline markers inside paragraphs only set style flags; the
//! markup characters stay in the text.

use serde::{Deserialize, Serialize};

const HEADING_PREFIX: &str = "# ";
const LIST_PREFIX: &str = "- ";
const UNCHECKED_PREFIX: &str = "[ ] ";
const CHECKED_PREFIX: &str = "[x] ";
const CODE_FENCE: &str = "```";

/// One formatted unit of note content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Heading { text: String },
    ListItem { text: String },
    CheckItem { text: String, checked: bool },
    CodeBlock { text: String },
    Paragraph { text: String, style: InlineStyle },
}

impl Block {
    /// Display text of the block, without its line prefix.
    pub fn text(&self) -> &str {
        match self {
            Self::Heading { text }
            | Self::ListItem { text }
            | Self::CheckItem { text, .. }
            | Self::CodeBlock { text }
            | Self::Paragraph { text, .. } => text,
        }
    }
}

/// Inline style flags detected on a paragraph line.
///
/// Flags are independent and may combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InlineStyle {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

impl InlineStyle {
    /// Detects style flags from inline markers in `line`.
    pub fn detect(line: &str) -> Self {
        let bold = line.contains("**");
        Self {
            bold,
            italic: !bold && line.contains('*'),
            code: line.contains('`'),
        }
    }

    pub fn is_plain(self) -> bool {
        self.emphasis() == Emphasis::Plain
    }

    /// The single emphasis a renderer applies; bold wins, then italic, then code.
    pub fn emphasis(self) -> Emphasis {
        if self.bold {
            Emphasis::Bold
        } else if self.italic {
            Emphasis::Italic
        } else if self.code {
            Emphasis::Code
        } else {
            Emphasis::Plain
        }
    }
}

/// Visual treatment for a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Bold,
    Italic,
    Code,
    Plain,
}

/// Formats raw note content into display blocks, preserving line order.
pub fn format_note(content: &str) -> Vec<Block> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(classify_line)
        .collect()
}

/// Classifies one non-blank line.
pub fn classify_line(line: &str) -> Block {
    if let Some(text) = line.strip_prefix(HEADING_PREFIX) {
        return Block::Heading {
            text: text.to_string(),
        };
    }
    if let Some(text) = line.strip_prefix(LIST_PREFIX) {
        return Block::ListItem {
            text: text.to_string(),
        };
    }
    if let Some(text) = line.strip_prefix(UNCHECKED_PREFIX) {
        return Block::CheckItem {
            text: text.to_string(),
            checked: false,
        };
    }
    if let Some(text) = line.strip_prefix(CHECKED_PREFIX) {
        return Block::CheckItem {
            text: text.to_string(),
            checked: true,
        };
    }
    if line.starts_with(CODE_FENCE) && line.ends_with(CODE_FENCE) {
        return Block::CodeBlock {
            text: fenced_interior(line).to_string(),
        };
    }
    Block::Paragraph {
        text: line.to_string(),
        style: InlineStyle::detect(line),
    }
}

// Fences may overlap on short lines ("```" or "````"); the interior is empty then.
fn fenced_interior(line: &str) -> &str {
    let fence = CODE_FENCE.len();
    if line.len() < fence * 2 {
        return "";
    }
    &line[fence..line.len() - fence]
}
