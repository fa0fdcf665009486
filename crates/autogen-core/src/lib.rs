//! Import-block regeneration
//!
//! Keeps a block of `import './<module>';` statements in a target file in
//! sync with the declaration files of a directory:
//!
//! 1. [`modules`] turns a directory listing into a sorted, deduplicated list
//!    of module names.
//! 2. [`imports`] renders one import statement per module.
//! 3. [`regenerate`] wraps the statements in a checksummed marker block and
//!    replaces or appends it in the target file, or [`check`]s whether the
//!    file is current without writing.

pub mod config;
pub mod error;
pub mod imports;
pub mod modules;
pub mod regenerate;

pub use config::{CONFIG_FILE_NAME, RegenerateConfig};
pub use error::{Error, Result};
pub use imports::render_imports;
pub use modules::{collect_module_names, compare_case_insensitive, module_name};
pub use regenerate::{BlockStatus, CheckReport, RegenerateReport, check, regenerate};
