//! Import-block regenerator CLI
//!
//! Rewrites the generated `import './<module>';` block of a declaration
//! index file from the contents of its directory.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let cwd = std::env::current_dir()?;
    let config = cli.resolve_config(&cwd)?;
    tracing::debug!(?config, "resolved config");

    if cli.check {
        commands::run_check(&config)
    } else {
        commands::run_regenerate(&config)
    }
}
