//! Rendering marker blocks and writing them into source text.

use std::ops::Range;

use autogen_fs::sha256_hex;
use tracing::debug;

use crate::markers::{BlockMarkers, END_WARNING};
use crate::parser::find_block;

/// How [`upsert_block`] placed the block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertAction {
    /// An existing block occupying `span` of the original source was replaced.
    Replaced { span: Range<usize> },
    /// No block existed; a new one was appended.
    Appended,
}

/// Result of [`upsert_block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upsert {
    pub text: String,
    pub action: UpsertAction,
}

/// Render a complete block around `content`.
///
/// The checksum line follows `content` directly, so `content` should end
/// with a newline.
///
/// # Example
/// ```
/// use autogen_blocks::{BlockMarkers, render_block};
///
/// let markers = BlockMarkers::with_default_command("Export Modules").unwrap();
/// let block = render_block(&markers, "import './Api';\n");
/// assert!(block.starts_with(markers.start_line()));
/// assert!(block.ends_with(markers.end_line()));
/// ```
pub fn render_block(markers: &BlockMarkers, content: &str) -> String {
    let checksum_line = BlockMarkers::checksum_line(&sha256_hex(content));

    let mut block = String::with_capacity(
        markers.start_line().len()
            + markers.start_warning().len()
            + content.len()
            + checksum_line.len()
            + END_WARNING.len()
            + markers.end_line().len(),
    );
    block.push_str(markers.start_line());
    block.push_str(markers.start_warning());
    block.push_str(content);
    block.push_str(&checksum_line);
    block.push_str(END_WARNING);
    block.push_str(markers.end_line());
    block
}

/// Append a new block to the end of `source`, separated by a newline.
pub fn append_block(source: &str, markers: &BlockMarkers, content: &str) -> String {
    format!("{}\n{}", source, render_block(markers, content))
}

/// Replace the existing block, or append a new one if none is found.
///
/// Everything outside the replaced span is left untouched.
///
/// # Example
/// ```
/// use autogen_blocks::{BlockMarkers, UpsertAction, upsert_block};
///
/// let markers = BlockMarkers::with_default_command("Export Modules").unwrap();
///
/// let first = upsert_block("header\n", &markers, "import './a';\n");
/// assert_eq!(first.action, UpsertAction::Appended);
///
/// let second = upsert_block(&first.text, &markers, "import './b';\n");
/// assert!(matches!(second.action, UpsertAction::Replaced { .. }));
/// assert!(second.text.contains("import './b';"));
/// assert!(!second.text.contains("import './a';"));
/// ```
pub fn upsert_block(source: &str, markers: &BlockMarkers, content: &str) -> Upsert {
    match find_block(source, markers) {
        Some(existing) => {
            let span = existing.span;
            let rendered = render_block(markers, content);

            let mut text =
                String::with_capacity(source.len() - span.len() + rendered.len());
            text.push_str(&source[..span.start]);
            text.push_str(&rendered);
            text.push_str(&source[span.end..]);

            debug!(name = markers.name(), ?span, "replaced marker block");
            Upsert {
                text,
                action: UpsertAction::Replaced { span },
            }
        }
        None => {
            debug!(name = markers.name(), "appending marker block");
            Upsert {
                text: append_block(source, markers, content),
                action: UpsertAction::Appended,
            }
        }
    }
}
