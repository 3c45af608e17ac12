//! A CommonMark-inspired Markdown parser.
//!
//! Documents are segmented into heading and paragraph blocks, then each
//! block's inline content is resolved with the CommonMark delimiter stack
//! algorithm for `*` and `_` emphasis.

pub mod config;
pub mod parser;
pub mod render;
pub mod syntax;

pub use config::Config;
pub use parser::{Parser, parse};
pub use render::{RenderRules, render};
pub use syntax::{Node, NodeKind, dump_blocks, dump_tree};

/// Parses `input` and returns its tree dump.
///
/// # Examples
///
/// ```rust
/// let dump = parsemd::parse_and_dump("*hi*");
/// assert_eq!(
///     dump,
///     "Token::Root\n  Token::Paragraph\n    Token::Emph\n      Token::Text \"hi\"\n"
/// );
/// ```
pub fn parse_and_dump(input: &str) -> String {
    dump_tree(&parse(input))
}
