//! Tree emission stage - fold the resolved token sequence into inline nodes.

use super::tokens::{Token, TokenKind};
use crate::syntax::Node;

/// Deepest Emph/Strong nesting kept in the tree. Marker pairs beyond it stay
/// literal text, so recursive traversals of a `Node` (drop, comparison,
/// serialization) stay shallow on any input.
pub const MAX_INLINE_NESTING: usize = 128;

/// An open container while folding.
struct Frame<'a> {
    /// The open marker that started this frame, `None` for the block itself.
    opener: Option<Token<'a>>,
    children: Vec<Node>,
    pending: String,
}

impl<'a> Frame<'a> {
    fn new(opener: Option<Token<'a>>) -> Self {
        Self {
            opener,
            children: Vec::new(),
            pending: String::new(),
        }
    }

    fn push_text(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    /// Appends a node; text nodes coalesce with pending text.
    fn push_node(&mut self, node: Node) {
        match node {
            Node::Text { text } => self.pending.push_str(&text),
            node => {
                self.flush_text();
                self.children.push(node);
            }
        }
    }

    fn flush_text(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.children.push(Node::Text { text });
        }
    }

    fn into_children(mut self) -> Vec<Node> {
        self.flush_text();
        self.children
    }
}

/// Fold a flat token sequence into inline nodes.
///
/// Soft breaks become a single space. Unmatched close markers and
/// unterminated open markers are kept as literal text, as are marker pairs
/// nested deeper than [`MAX_INLINE_NESTING`].
pub fn emit_inline_nodes(tokens: &[Token<'_>]) -> Vec<Node> {
    log::trace!("Emitting {} inline tokens", tokens.len());

    let mut stack = vec![Frame::new(None)];
    // Open markers folded into text because the nesting limit was reached.
    let mut flattened: Vec<TokenKind> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Text | TokenKind::DelimiterRun => top(&mut stack).push_text(token.text),
            TokenKind::Softbreak => top(&mut stack).push_text(" "),
            TokenKind::EmphOpen | TokenKind::StrongOpen => {
                if stack.len() > MAX_INLINE_NESTING {
                    flattened.push(token.kind);
                    top(&mut stack).push_text(token.text);
                } else {
                    stack.push(Frame::new(Some(*token)));
                }
            }
            TokenKind::EmphClose | TokenKind::StrongClose
                if flattened.last().and_then(|kind| kind.closing()) == Some(token.kind) =>
            {
                flattened.pop();
                top(&mut stack).push_text(token.text);
            }
            TokenKind::EmphClose | TokenKind::StrongClose => {
                let closes_top = stack
                    .last()
                    .and_then(|frame| frame.opener)
                    .and_then(|opener| opener.kind.closing())
                    == Some(token.kind);

                if closes_top && let Some(frame) = stack.pop() {
                    let children = frame.into_children();
                    let node = match token.kind {
                        TokenKind::StrongClose => Node::Strong { children },
                        _ => Node::Emph { children },
                    };
                    top(&mut stack).push_node(node);
                } else {
                    log::trace!("Unmatched {:?} kept as text", token.kind);
                    top(&mut stack).push_text(token.text);
                }
            }
        }
    }

    // Unwind unterminated frames into their parents as literal text.
    while stack.len() > 1 {
        let Some(frame) = stack.pop() else { break };
        let parent = top(&mut stack);
        if let Some(opener) = frame.opener {
            parent.push_text(opener.text);
        }
        for child in frame.into_children() {
            parent.push_node(child);
        }
    }

    stack
        .pop()
        .map(Frame::into_children)
        .unwrap_or_default()
}

fn top<'s, 'a>(stack: &'s mut Vec<Frame<'a>>) -> &'s mut Frame<'a> {
    if stack.is_empty() {
        stack.push(Frame::new(None));
    }
    let last = stack.len() - 1;
    &mut stack[last]
}
