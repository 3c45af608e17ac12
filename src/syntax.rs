//! Syntax tree produced by the parser.
//!
//! The tree is a plain owned enum ([`Node`]). Containers own their children,
//! text leaves own their content, and nothing in the tree borrows from the
//! input document.

mod dump;
mod kind;
mod node;
pub mod visit;

pub use dump::{dump_blocks, dump_tree};
pub use kind::{HeadingLevel, NodeKind};
pub use node::Node;
pub use visit::{Visitor, walk};
