use crate::parser::scanner::Scanner;
use crate::syntax::{HeadingLevel, NodeKind};

mod headings;
mod paragraphs;
mod utils;

use headings::try_parse_atx_heading;
use paragraphs::collect_paragraph;
use utils::is_blank_line;

#[cfg(test)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Kind of a block produced by the block phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading(HeadingLevel),
    Paragraph,
}

impl From<BlockKind> for NodeKind {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Heading(level) => NodeKind::Heading(level),
            BlockKind::Paragraph => NodeKind::Paragraph,
        }
    }
}

/// A segmented block with its raw, trimmed source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub kind: BlockKind,
    pub text: &'a str,
    /// Set only on the last block, which later input could still continue.
    pub open: bool,
}

/// Splits a document into heading and paragraph blocks.
pub struct BlockParser<'a> {
    scanner: Scanner<'a>,
    blocks: Vec<Block<'a>>,
}

impl<'a> BlockParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            scanner: Scanner::new(input),
            blocks: Vec::new(),
        }
    }

    pub fn parse(mut self) -> Vec<Block<'a>> {
        log::debug!("Starting block parse ({} bytes)", self.scanner.data().len());

        while let Some(line) = self.scanner.next_line() {
            self.parse_line(line);
        }

        if let Some(last) = self.blocks.last_mut() {
            last.open = true;
        }
        log::debug!("Block parse produced {} block(s)", self.blocks.len());
        self.blocks
    }

    fn parse_line(&mut self, line: &'a str) {
        if is_blank_line(line) {
            log::trace!("Skipping blank line");
            return;
        }

        if let Some((level, text)) = try_parse_atx_heading(line) {
            log::debug!("Found {} heading: {:?}", level, text);
            self.push(BlockKind::Heading(level), text);
            return;
        }

        let text = collect_paragraph(&mut self.scanner, line);
        log::debug!("Found paragraph: {:?}", text);
        self.push(BlockKind::Paragraph, text);
    }

    fn push(&mut self, kind: BlockKind, text: &'a str) {
        self.blocks.push(Block {
            kind,
            text,
            open: false,
        });
    }
}
