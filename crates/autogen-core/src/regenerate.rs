//! Regenerating and checking the import block of a target file

use std::path::PathBuf;

use autogen_blocks::{BlockMarkers, UpsertAction, find_block, render_block, upsert_block};
use autogen_fs::sha256_hex;
use tracing::{debug, info};

use crate::config::RegenerateConfig;
use crate::error::Result;
use crate::imports::render_imports;
use crate::modules::collect_module_names;

/// Outcome of [`regenerate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerateReport {
    /// File that was rewritten
    pub target: PathBuf,
    /// Sorted module names in the block
    pub modules: Vec<String>,
    /// Digest written on the checksum line
    pub digest: String,
    /// Whether the block replaced an existing one or was appended
    pub action: UpsertAction,
    /// Whether the written bytes differ from what was on disk
    pub changed: bool,
}

/// Freshness of the import block in a target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockStatus {
    /// The block is byte-identical to what [`regenerate`] would write.
    UpToDate,
    /// The block exists but regenerating would change it.
    Outdated { expected: String, found: String },
    /// The recorded digest does not match the block content.
    Tampered { recorded: String, actual: String },
    /// No block with this name exists.
    Missing,
}

impl BlockStatus {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, Self::UpToDate)
    }
}

/// Outcome of [`check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub target: PathBuf,
    pub modules: Vec<String>,
    pub status: BlockStatus,
}

/// The block a run would write, computed from the directory listing.
struct Plan {
    markers: BlockMarkers,
    modules: Vec<String>,
    code: String,
}

impl Plan {
    fn build(config: &RegenerateConfig) -> Result<Self> {
        let markers = config.markers()?;
        let entries = autogen_fs::list_file_names(&config.directory)?;
        let modules = collect_module_names(entries, &config.exclude);
        let code = render_imports(&modules);

        debug!(
            directory = %config.directory.display(),
            modules = modules.len(),
            "collected module names"
        );

        Ok(Self {
            markers,
            modules,
            code,
        })
    }
}

/// Rewrite the import block in `config.target` from `config.directory`.
///
/// The block is replaced in place if found, otherwise appended after a
/// newline. The file is always rewritten, even when nothing changed; the
/// report says whether the bytes differ.
pub fn regenerate(config: &RegenerateConfig) -> Result<RegenerateReport> {
    let plan = Plan::build(config)?;
    let source = autogen_fs::read_text(&config.target)?;

    let upsert = upsert_block(&source, &plan.markers, &plan.code);
    let changed = upsert.text != source;

    autogen_fs::write_text(&config.target, &upsert.text)?;

    let digest = sha256_hex(&plan.code);
    info!(
        path = %config.target.display(),
        modules = plan.modules.len(),
        %digest,
        changed,
        "regenerated import block"
    );

    Ok(RegenerateReport {
        target: config.target.clone(),
        modules: plan.modules,
        digest,
        action: upsert.action,
        changed,
    })
}

/// Report whether `config.target` holds an up-to-date import block, without
/// writing anything.
pub fn check(config: &RegenerateConfig) -> Result<CheckReport> {
    let plan = Plan::build(config)?;
    let source = autogen_fs::read_text(&config.target)?;

    let status = match find_block(&source, &plan.markers) {
        None => BlockStatus::Missing,
        Some(block) if block.is_tampered() => BlockStatus::Tampered {
            recorded: block.digest.to_ascii_lowercase(),
            actual: sha256_hex(&block.content),
        },
        Some(block) => {
            if source[block.span.clone()] == render_block(&plan.markers, &plan.code) {
                BlockStatus::UpToDate
            } else {
                BlockStatus::Outdated {
                    expected: sha256_hex(&plan.code),
                    found: block.digest.to_ascii_lowercase(),
                }
            }
        }
    };

    debug!(path = %config.target.display(), ?status, "checked import block");

    Ok(CheckReport {
        target: config.target.clone(),
        modules: plan.modules,
        status,
    })
}
