use serde::Serialize;

use super::kind::{HeadingLevel, NodeKind};

/// A node of the parsed document tree.
///
/// Every variant except [`Node::Text`] is a container with an ordered list of
/// children. Text leaves carry their content instead of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Root { children: Vec<Node> },
    Heading {
        level: HeadingLevel,
        children: Vec<Node>,
    },
    Paragraph { children: Vec<Node> },
    Emph { children: Vec<Node> },
    Strong { children: Vec<Node> },
    Text { text: String },
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root { .. } => NodeKind::Root,
            Node::Heading { level, .. } => NodeKind::Heading(*level),
            Node::Paragraph { .. } => NodeKind::Paragraph,
            Node::Emph { .. } => NodeKind::Emph,
            Node::Strong { .. } => NodeKind::Strong,
            Node::Text { .. } => NodeKind::Text,
        }
    }

    /// Children of a container node. Text nodes have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children }
            | Node::Heading { children, .. }
            | Node::Paragraph { children }
            | Node::Emph { children }
            | Node::Strong { children } => children,
            Node::Text { .. } => &[],
        }
    }

    /// Literal content of a text node.
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Text { text } => Some(text),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text { .. })
    }

    pub fn is_container(&self) -> bool {
        !self.is_text()
    }

    /// Concatenated content of every text leaf below this node, in order.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Text { text } => out.push_str(text),
                _ => stack.extend(node.children().iter().rev()),
            }
        }
        out
    }
}
