//! Filesystem primitives for the import-block regenerator
//!
//! Provides directory listing, whole-file text I/O with in-place overwrite,
//! and the SHA-256 digest used by checksum lines.

pub mod checksum;
pub mod error;
pub mod io;

pub use checksum::{SHA256_HEX_LEN, sha256_hex};
pub use error::{Error, Result};
pub use io::{list_file_names, read_text, write_text};
