//! CLI argument parsing using clap derive

use std::path::{Path, PathBuf};

use autogen_core::RegenerateConfig;
use clap::Parser;

use crate::error::Result;

/// Regenerate the import block of a declaration index file
///
/// With no arguments, lists `mw/` and rewrites the "Export Modules" block of
/// `mw/index.d.ts`. Settings come from the defaults, then `autogen.toml` in
/// the working directory (or --config), then flags.
#[derive(Parser, Debug)]
#[command(name = "update-import-modules")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file to load instead of ./autogen.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory whose entries become imports
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// File holding the generated block
    #[arg(long, value_name = "FILE")]
    pub target: Option<PathBuf>,

    /// Block name shown in the start and end banners
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Entry name to leave out (repeatable; replaces the configured list)
    #[arg(long = "exclude", value_name = "FILE")]
    pub exclude: Vec<String>,

    /// Command quoted in the "do not edit" warning
    #[arg(long = "command", value_name = "CMD")]
    pub regen_command: Option<String>,

    /// Report whether the block is current without writing; exits 1 if not
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    /// Merge defaults, the config file, and flags, resolving relative paths
    /// against `root`.
    pub fn resolve_config(&self, root: &Path) -> Result<RegenerateConfig> {
        let mut config = match &self.config {
            Some(path) => RegenerateConfig::load(&root.join(path))?,
            None => RegenerateConfig::discover(root)?,
        };

        if let Some(dir) = &self.dir {
            config.directory = dir.clone();
        }
        if let Some(target) = &self.target {
            config.target = target.clone();
        }
        if let Some(name) = &self.name {
            config.block_name = name.clone();
        }
        if !self.exclude.is_empty() {
            config.exclude = self.exclude.clone();
        }
        if let Some(command) = &self.regen_command {
            config.command = command.clone();
        }

        Ok(config.rooted_at(root))
    }
}
