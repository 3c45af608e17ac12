use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parsemd")]
#[command(author, version)]
#[command(about = "Parse Markdown headings, paragraphs and emphasis into a tree")]
#[command(after_help = "\
EXAMPLES:

    # Show the parsed tree of a file
    parsemd tree document.md

    # Render from stdin to HTML
    echo '# Heading' | parsemd html

    # Render to the terminal with a custom config
    parsemd --config custom.toml ansi document.md

CONFIGURATION:

parsemd looks for configuration files in this order:
  1. Explicit --config path
  2. parsemd.toml or .parsemd.toml in the input's directory and its parents
  3. $XDG_CONFIG_HOME/parsemd/config.toml or the platform config directory
  4. Built-in defaults

Example .parsemd.toml:

    [html]
    strong = [\"<strong>\", \"</strong>\"]
    emph = [\"<em>\", \"</em>\"]

    [ansi]
    emph = [\"\\u001b[4m\", \"\\u001b[24m\"]")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true, env = "PARSEMD_CONFIG")]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, parsemd will \
        search for .parsemd.toml or parsemd.toml in the input's directory and its parents, \
        then fall back to the user configuration directory."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the parsed tree, one node per line
    Tree {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,
    },
    /// Print the blocks found by the block phase, before inline parsing
    Blocks {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,
    },
    /// Render the document as HTML
    Html {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,
    },
    /// Render the document for a terminal using ANSI escape sequences
    Ansi {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,
    },
    /// Print the parsed tree as JSON
    Json {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,
    },
}

impl Commands {
    pub fn file(&self) -> Option<&PathBuf> {
        match self {
            Commands::Tree { file }
            | Commands::Blocks { file }
            | Commands::Html { file }
            | Commands::Ansi { file }
            | Commands::Json { file } => file.as_ref(),
        }
    }
}
