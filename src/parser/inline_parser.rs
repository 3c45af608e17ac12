//! Inline parsing: delimiter collection, emphasis resolution and emission.
//!
//! Each block's text goes through three stages:
//! 1. [`collector`] splits the text into tokens and records delimiter runs.
//! 2. [`emphasis`] pairs the runs and rewrites them into open/close markers.
//! 3. [`emitter`] folds the marker sequence into nested nodes.

use crate::syntax::Node;

pub mod collector;
pub mod emitter;
pub mod emphasis;
pub mod tokens;


use collector::collect_tokens;
use emitter::emit_inline_nodes;
pub use emphasis::DelimiterStack;

/// Inline parser borrowing a reusable delimiter stack.
pub struct InlineParser<'s> {
    delimiters: &'s mut DelimiterStack,
}

impl<'s> InlineParser<'s> {
    pub fn new(delimiters: &'s mut DelimiterStack) -> Self {
        Self { delimiters }
    }

    /// Parses the inline content of one block.
    pub fn parse(&mut self, text: &str) -> Vec<Node> {
        let mut tokens = collect_tokens(text, self.delimiters);
        log::trace!(
            "Collected {} token(s), {} delimiter run(s)",
            tokens.len(),
            self.delimiters.len()
        );
        self.delimiters.process_emphasis(&mut tokens);
        emit_inline_nodes(&tokens.into_tokens())
    }
}

/// Parses inline content with a fresh delimiter stack.
pub fn parse_inline_text(text: &str) -> Vec<Node> {
    let mut delimiters = DelimiterStack::new();
    InlineParser::new(&mut delimiters).parse(text)
}
