//! CLI integration tests for parsemd.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand output (tree, blocks, html, ansi, json)
//! - Stdin/stdout handling
//! - Config discovery and errors

mod common;
mod render;
mod tree;
