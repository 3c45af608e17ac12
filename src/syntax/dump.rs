//! Debug serialization of trees and block lists.
//!
//! One line per node: two spaces of indentation per depth level, the node
//! kind prefixed with `Token::`, and for text leaves the quoted content.
//!
//! ```text
//! Token::Root
//!   Token::Paragraph
//!     Token::Text "This is "
//!     Token::Strong
//!       Token::Text "strong"
//! ```

use std::fmt::Write;

use super::kind::NodeKind;
use super::node::Node;
use super::visit::{Visitor, walk};
use crate::parser::Block;

const INDENT: &str = "  ";
const KIND_PREFIX: &str = "Token::";

/// Dumps a parsed tree.
pub fn dump_tree(node: &Node) -> String {
    let mut dumper = TreeDumper::default();
    walk(node, &mut dumper);
    dumper.out
}

/// Dumps the output of the block phase, before inline analysis.
///
/// Blocks are printed as children of an implicit root with their raw text.
pub fn dump_blocks(blocks: &[Block<'_>]) -> String {
    let mut out = String::new();
    push_line(&mut out, 0, NodeKind::Root, None);
    for block in blocks {
        let text = (!block.text.is_empty()).then_some(block.text);
        push_line(&mut out, 1, block.kind.into(), text);
    }
    out
}

#[derive(Default)]
struct TreeDumper {
    out: String,
    depth: usize,
}

impl Visitor for TreeDumper {
    fn enter(&mut self, node: &Node) {
        push_line(&mut self.out, self.depth, node.kind(), None);
        self.depth += 1;
    }

    fn text(&mut self, text: &str) {
        push_line(&mut self.out, self.depth, NodeKind::Text, Some(text));
    }

    fn leave(&mut self, _node: &Node) {
        self.depth -= 1;
    }
}

fn push_line(out: &mut String, depth: usize, kind: NodeKind, text: Option<&str>) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    // Writing to a String cannot fail.
    let _ = write!(out, "{KIND_PREFIX}{kind}");
    if let Some(text) = text {
        out.push(' ');
        push_quoted(out, text);
    }
    out.push('\n');
}

/// Quotes `text`, escaping embedded quotes and backslashes.
fn push_quoted(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}
