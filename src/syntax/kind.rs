//! Node kinds and heading levels.

use std::fmt;

use serde::Serialize;

/// ATX heading level, `#` through `######`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1 = 1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Maps the length of a `#` run to a heading level.
    ///
    /// Returns `None` for `0` and for runs longer than six markers.
    pub fn from_marker_len(len: usize) -> Option<Self> {
        len.checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.as_u8())
    }
}

/// The type tag of a [`Node`](super::Node).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Heading(HeadingLevel),
    Paragraph,
    Text,
    Emph,
    Strong,
}

impl NodeKind {
    pub fn is_heading(self) -> bool {
        matches!(self, NodeKind::Heading(_))
    }

    /// Block-level kinds, i.e. everything that can sit directly under Root.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            NodeKind::Root | NodeKind::Heading(_) | NodeKind::Paragraph
        )
    }

    pub fn is_inline(self) -> bool {
        matches!(self, NodeKind::Text | NodeKind::Emph | NodeKind::Strong)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Root => f.write_str("Root"),
            NodeKind::Heading(level) => level.fmt(f),
            NodeKind::Paragraph => f.write_str("Paragraph"),
            NodeKind::Text => f.write_str("Text"),
            NodeKind::Emph => f.write_str("Emph"),
            NodeKind::Strong => f.write_str("Strong"),
        }
    }
}
