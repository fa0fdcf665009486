//! Checksummed marker blocks.
//!
//! A marker block is a generated region embedded in an otherwise hand-written
//! file. It is bounded by six parts:
//!
//! ```text
//! //!AGS! ------------------- Auto Start: Export Modules --------------------------
//! //!AGS! Do NOT edit text between auto start and auto end. It is auto generated.
//! //!AGS! run "pnpm run update-import-modules" to update it.
//! import './Api';
//! //!AGE! SHA256: <sha256 of the content lines>
//! //!AGE! Auto generated end.
//! //!AGE! -------------------- Auto End: Export Modules ---------------------------
//! ```
//!
//! [`markers`] builds the banner and warning lines for a block name,
//! [`parser`] locates an existing block, and [`writer`] renders a fresh block
//! and replaces or appends it. All functions work on strings; file I/O lives
//! in `autogen-fs`.

pub mod error;
pub mod markers;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use markers::{BlockMarkers, DEFAULT_COMMAND};
pub use parser::{Block, find_block};
pub use writer::{Upsert, UpsertAction, append_block, render_block, upsert_block};
