use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::syntax::{HeadingLevel, NodeKind};

/// An `[open, close]` string pair emitted around a container.
pub type RulePair = [String; 2];

/// Optional replacements for the built-in render rules of one output format.
///
/// Unset entries keep the built-in pair.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RuleOverrides {
    pub root: Option<RulePair>,
    pub paragraph: Option<RulePair>,
    pub h1: Option<RulePair>,
    pub h2: Option<RulePair>,
    pub h3: Option<RulePair>,
    pub h4: Option<RulePair>,
    pub h5: Option<RulePair>,
    pub h6: Option<RulePair>,
    pub emph: Option<RulePair>,
    pub strong: Option<RulePair>,
}

impl RuleOverrides {
    /// The override for a container kind, if any.
    pub fn get(&self, kind: NodeKind) -> Option<&RulePair> {
        match kind {
            NodeKind::Root => self.root.as_ref(),
            NodeKind::Paragraph => self.paragraph.as_ref(),
            NodeKind::Heading(level) => match level {
                HeadingLevel::H1 => self.h1.as_ref(),
                HeadingLevel::H2 => self.h2.as_ref(),
                HeadingLevel::H3 => self.h3.as_ref(),
                HeadingLevel::H4 => self.h4.as_ref(),
                HeadingLevel::H5 => self.h5.as_ref(),
                HeadingLevel::H6 => self.h6.as_ref(),
            },
            NodeKind::Emph => self.emph.as_ref(),
            NodeKind::Strong => self.strong.as_ref(),
            NodeKind::Text => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Renderer configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub html: RuleOverrides,
    pub ansi: RuleOverrides,
}

const CANDIDATE_NAMES: &[&str] = &[".parsemd.toml", "parsemd.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    let xdg = env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    [xdg, dirs::config_dir()]
        .into_iter()
        .flatten()
        .map(|dir| dir.join("parsemd").join("config.toml"))
        .find(|p| p.is_file())
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .parsemd.toml, parsemd.toml
/// 3) $XDG_CONFIG_HOME/parsemd/config.toml or the platform config directory
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring {}: {e}", p.display()),
        }
    }

    if let Some(p) = xdg_config_path() {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring {}: {e}", p.display()),
        }
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
