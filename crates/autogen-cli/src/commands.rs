//! Regenerate and check command implementations

use autogen_core::{BlockStatus, RegenerateConfig, check, regenerate};
use colored::Colorize;

use crate::error::{CliError, Result};

/// Summary line printed after listing the declaration directory.
pub fn modules_line(modules: &[String]) -> String {
    format!("Auto generate import modules: {}", modules.join(", "))
}

/// Rewrite the import block.
pub fn run_regenerate(config: &RegenerateConfig) -> Result<()> {
    let report = regenerate(config)?;

    println!("{}", modules_line(&report.modules));
    tracing::debug!(
        action = ?report.action,
        changed = report.changed,
        "target written"
    );

    Ok(())
}

/// Report block freshness without writing; errors unless up to date.
pub fn run_check(config: &RegenerateConfig) -> Result<()> {
    let report = check(config)?;
    let target = report.target.display().to_string();

    println!("{}", modules_line(&report.modules));

    match report.status {
        BlockStatus::UpToDate => {
            println!("{} {} is up to date.", "OK".green().bold(), target.cyan());
            Ok(())
        }
        BlockStatus::Outdated { expected, found } => {
            println!(
                "{} {}: block is stale.",
                "OUTDATED".yellow().bold(),
                target.cyan()
            );
            println!("   expected {}", expected.dimmed());
            println!("   found    {}", found.dimmed());
            Err(CliError::user(format!("import block in {target} is out of date")))
        }
        BlockStatus::Tampered { recorded, actual } => {
            println!(
                "{} {}: block was edited by hand.",
                "TAMPERED".red().bold(),
                target.cyan()
            );
            println!("   recorded {}", recorded.dimmed());
            println!("   actual   {}", actual.dimmed());
            Err(CliError::user(format!(
                "import block in {target} does not match its checksum"
            )))
        }
        BlockStatus::Missing => {
            println!(
                "{} {}: no \"{}\" block.",
                "MISSING".yellow().bold(),
                target.cyan(),
                config.block_name
            );
            Err(CliError::user(format!("import block missing from {target}")))
        }
    }
}
