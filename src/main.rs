use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser as _;

use parsemd::parser::{Parser, normalize_line_endings};
use parsemd::{RenderRules, dump_blocks, dump_tree, render};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    let bytes = match path {
        Some(p) => fs::read(p)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn start_dir_for(input_path: Option<&PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let file = cli.command.file();
    let input = read_all(file)?;
    let mut parser = Parser::new();

    let output = match &cli.command {
        Commands::Tree { .. } => dump_tree(&parser.parse(&input)),
        Commands::Blocks { .. } => {
            let normalized = normalize_line_endings(&input);
            dump_blocks(&Parser::parse_blocks(&normalized))
        }
        Commands::Json { .. } => {
            let tree = parser.parse(&input);
            let mut json = serde_json::to_string_pretty(&tree).map_err(io::Error::other)?;
            json.push('\n');
            json
        }
        Commands::Html { .. } | Commands::Ansi { .. } => {
            let start_dir = start_dir_for(file)?;
            let (cfg, cfg_path) = parsemd::config::load(cli.config.as_deref(), &start_dir)?;

            if let Some(path) = &cfg_path {
                log::debug!("Using config from: {}", path.display());
            } else {
                log::debug!("Using default config");
            }

            let rules = match &cli.command {
                Commands::Html { .. } => RenderRules::html().with_overrides(&cfg.html),
                _ => RenderRules::ansi().with_overrides(&cfg.ansi),
            };
            render(&parser.parse(&input), &rules)
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()
}
