//! Parser module containing the block and inline parsers.

use std::borrow::Cow;

use crate::syntax::Node;

pub mod block_parser;
pub mod inline_parser;
pub mod scanner;

// Re-export commonly used types
pub use block_parser::{Block, BlockKind, BlockParser};
pub use inline_parser::{DelimiterStack, InlineParser, parse_inline_text};

/// Two-phase Markdown parser.
///
/// The delimiter stack is kept between blocks and between documents, so
/// parsing many documents with one `Parser` reuses its allocation.
#[derive(Debug, Default)]
pub struct Parser {
    delimiters: DelimiterStack,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a document into a tree rooted at [`Node::Root`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parsemd::parser::Parser;
    ///
    /// let mut parser = Parser::new();
    /// let tree = parser.parse("# Heading\n\nParagraph with *emphasis*.");
    /// assert_eq!(tree.children().len(), 2);
    /// ```
    pub fn parse(&mut self, input: &str) -> Node {
        let normalized = normalize_line_endings(input);
        let blocks = BlockParser::new(&normalized).parse();

        let mut inline = InlineParser::new(&mut self.delimiters);
        let children = blocks
            .iter()
            .map(|block| {
                let children = inline.parse(block.text);
                match block.kind {
                    BlockKind::Heading(level) => Node::Heading { level, children },
                    BlockKind::Paragraph => Node::Paragraph { children },
                }
            })
            .collect();

        Node::Root { children }
    }

    /// Runs the block phase only.
    ///
    /// `input` is expected to use `\n` line endings; see
    /// [`normalize_line_endings`].
    pub fn parse_blocks(input: &str) -> Vec<Block<'_>> {
        BlockParser::new(input).parse()
    }
}

/// Parses a Markdown document into a syntax tree.
///
/// This function normalizes line endings and runs both the block parser
/// and the inline parser. It never fails: malformed markup becomes text.
pub fn parse(input: &str) -> Node {
    Parser::new().parse(input)
}

/// Converts `\r\n` line endings to `\n`, borrowing when there is nothing to do.
pub fn normalize_line_endings(input: &str) -> Cow<'_, str> {
    if input.contains("\r\n") {
        Cow::Owned(input.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(input)
    }
}
