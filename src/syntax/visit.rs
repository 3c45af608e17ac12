//! Read-only traversal of a [`Node`] tree.
//!
//! Renderers and debug printers implement [`Visitor`] and hand it to [`walk`].
//! The walk is iterative, so deeply nested emphasis cannot exhaust the call
//! stack.

use super::node::Node;

/// Callbacks invoked by [`walk`].
///
/// `enter` and `leave` fire for containers only; text leaves go to `text`.
pub trait Visitor {
    fn enter(&mut self, _node: &Node) {}

    fn text(&mut self, _text: &str) {}

    fn leave(&mut self, _node: &Node) {}
}

enum Step<'a> {
    Enter(&'a Node),
    Leave(&'a Node),
}

/// Walks `root` in document order.
pub fn walk<V: Visitor + ?Sized>(root: &Node, visitor: &mut V) {
    let mut steps = vec![Step::Enter(root)];

    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(Node::Text { text }) => visitor.text(text),
            Step::Enter(node) => {
                visitor.enter(node);
                steps.push(Step::Leave(node));
                steps.extend(node.children().iter().rev().map(Step::Enter));
            }
            Step::Leave(node) => visitor.leave(node),
        }
    }
}
