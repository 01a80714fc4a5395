//! Core block and inline-run types.

use serde::Serialize;

/// One structural unit of parsed markdown.
///
/// A document is an ordered sequence of blocks. Everything except
/// [`Block::CodeBlock`] carries inline runs rather than raw text, so
/// consumers never re-parse emphasis or links themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// Heading with level 1-3.
    Heading { level: u8, inlines: Vec<Inline> },
    /// Normal paragraph text.
    Paragraph(Vec<Inline>),
    /// Fenced code block. The language tag is the text after the opening
    /// fence, `None` when empty. Code content is never inline-parsed.
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    /// Block quote.
    Blockquote(Vec<Inline>),
    /// Ordered or unordered list; one inline-run sequence per item.
    List {
        ordered: bool,
        items: Vec<Vec<Inline>>,
    },
}

/// A styled span of text within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Inline {
    /// Plain text.
    Text(String),
    /// `**bold**`
    Bold(String),
    /// `*italic*`
    Italic(String),
    /// `` `inline code` ``
    Code(String),
    /// `[text](url)`
    Link { text: String, url: String },
}

impl Inline {
    /// The visible text of this run, ignoring styling.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(t) | Self::Bold(t) | Self::Italic(t) | Self::Code(t) => t,
            Self::Link { text, .. } => text,
        }
    }
}
