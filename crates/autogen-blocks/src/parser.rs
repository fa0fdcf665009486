//! Locating an existing marker block.
//!
//! Matching is case-insensitive and tolerates a missing end banner, so a
//! block whose last line was truncated is still found and replaced whole.

use std::ops::Range;

use autogen_fs::sha256_hex;
use tracing::debug;

use crate::markers::BlockMarkers;

/// A marker block found in a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Byte range of the whole block, banners included.
    pub span: Range<usize>,
    /// Generated text between the start warning and the checksum line.
    pub content: String,
    /// Digest recorded on the checksum line, as written.
    pub digest: String,
    /// Whether the end banner was present.
    pub has_end_line: bool,
}

impl Block {
    /// Check whether the recorded digest disagrees with the content, i.e.
    /// the block was edited by hand since it was generated.
    pub fn is_tampered(&self) -> bool {
        sha256_hex(&self.content) != self.digest.to_ascii_lowercase()
    }
}

/// Find the first block delimited by `markers` in `source`.
///
/// # Example
/// ```
/// use autogen_blocks::{BlockMarkers, find_block, render_block};
///
/// let markers = BlockMarkers::with_default_command("Export Modules").unwrap();
/// let source = format!("header\n{}", render_block(&markers, "import './Api';\n"));
///
/// let block = find_block(&source, &markers).unwrap();
/// assert_eq!(block.content, "import './Api';\n");
/// assert_eq!(block.span.start, "header\n".len());
/// ```
pub fn find_block(source: &str, markers: &BlockMarkers) -> Option<Block> {
    let caps = markers.pattern().captures(source)?;

    let whole = caps.get(0)?;
    let content = caps.name("content").map_or("", |m| m.as_str());
    let digest = caps.name("digest").map_or("", |m| m.as_str());
    let has_end_line = caps.name("end").is_some_and(|m| !m.is_empty());

    debug!(
        name = markers.name(),
        start = whole.start(),
        end = whole.end(),
        has_end_line,
        "found marker block"
    );

    Some(Block {
        span: whole.range(),
        content: content.to_string(),
        digest: digest.to_string(),
        has_end_line,
    })
}
