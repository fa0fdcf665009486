//! Regeneration settings
//!
//! Every field has a default matching the declaration tree layout
//! (`mw/*.d.ts` re-exported from `mw/index.d.ts`), so running without a
//! config file needs no arguments. An optional `autogen.toml` overrides any
//! subset of fields:
//!
//! ```toml
//! directory = "mw"
//! target = "mw/index.d.ts"
//! block_name = "Export Modules"
//! exclude = ["index.d.ts"]
//! command = "pnpm run update-import-modules"
//! ```

use std::path::{Path, PathBuf};

use autogen_blocks::{BlockMarkers, DEFAULT_COMMAND};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "autogen.toml";

/// Inputs of one regeneration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegenerateConfig {
    /// Directory whose entries become module names
    pub directory: PathBuf,
    /// File holding the generated block
    pub target: PathBuf,
    /// Label embedded in the start and end banners
    pub block_name: String,
    /// Entry names left out of the import list
    pub exclude: Vec<String>,
    /// Command quoted in the "do not edit" warning
    pub command: String,
}

impl Default for RegenerateConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("mw"),
            target: PathBuf::from("mw").join("index.d.ts"),
            block_name: "Export Modules".to_string(),
            exclude: vec!["index.d.ts".to_string()],
            command: DEFAULT_COMMAND.to_string(),
        }
    }
}

impl RegenerateConfig {
    /// Load a config file. Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = autogen_fs::read_text(path)?;
        let config = toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `autogen.toml` from `root` if present, otherwise use defaults.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            debug!(root = %root.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolve relative `directory` and `target` against `root`.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.directory = root.join(&self.directory);
        self.target = root.join(&self.target);
        self
    }

    /// Build the block markers for this config.
    pub fn markers(&self) -> Result<BlockMarkers> {
        Ok(BlockMarkers::new(&self.block_name, &self.command)?)
    }
}
