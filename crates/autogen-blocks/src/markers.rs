//! Banner, warning, and checksum lines that delimit a marker block.

use autogen_fs::SHA256_HEX_LEN;
use regex::Regex;

use crate::error::{Error, Result};

/// Prefix shared by every marker line
pub const SIGNATURE: &str = "//!AG";

/// Command named in the start warning when none is configured
pub const DEFAULT_COMMAND: &str = "pnpm run update-import-modules";

/// Text preceding the digest on the checksum line
pub const CHECKSUM_PREFIX: &str = "//!AGE! SHA256: ";

/// Warning line closing the generated region
pub const END_WARNING: &str = "//!AGE! Auto generated end.\n";

const START_WIDTH: usize = 60;
const END_WIDTH: usize = 62;

/// The fixed lines of one named marker block.
///
/// Construction validates that `name` fits the banner widths and compiles
/// the pattern used by [`crate::find_block`], so a `BlockMarkers` value is
/// always usable.
#[derive(Debug, Clone)]
pub struct BlockMarkers {
    name: String,
    start_line: String,
    start_warning: String,
    end_line: String,
    pattern: Regex,
}

impl BlockMarkers {
    /// Build the markers for a block called `name` whose start warning tells
    /// readers to run `command`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BlockNameTooLong`] if `name` does not fit between the
    /// banner dashes.
    pub fn new(name: impl Into<String>, command: impl AsRef<str>) -> Result<Self> {
        let name = name.into();
        let start_line = banner('S', "Start", &name, START_WIDTH)?;
        let end_line = banner('E', "End", &name, END_WIDTH)?;
        let start_warning = format!(
            "{SIGNATURE}S! Do NOT edit text between auto start and auto end. It is auto generated.\n\
             {SIGNATURE}S! run \"{}\" to update it.\n",
            command.as_ref()
        );

        let pattern = Regex::new(&format!(
            "(?i)(?P<start>{})(?P<warning>{})(?P<content>(?s:.*?))(?P<checksum>{}(?P<digest>[a-f0-9]{{{}}})\n)(?P<end_warning>{})(?P<end>(?:{})?)",
            regex::escape(&start_line),
            regex::escape(&start_warning),
            regex::escape(CHECKSUM_PREFIX),
            SHA256_HEX_LEN,
            regex::escape(END_WARNING),
            regex::escape(&end_line),
        ))?;

        Ok(Self {
            name,
            start_line,
            start_warning,
            end_line,
            pattern,
        })
    }

    /// Build the markers with [`DEFAULT_COMMAND`] in the start warning.
    pub fn with_default_command(name: impl Into<String>) -> Result<Self> {
        Self::new(name, DEFAULT_COMMAND)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `//!AGS! --- Auto Start: <name> ---\n`
    pub fn start_line(&self) -> &str {
        &self.start_line
    }

    /// The two "do not edit" lines following the start banner.
    pub fn start_warning(&self) -> &str {
        &self.start_warning
    }

    /// `//!AGE! --- Auto End: <name> ---\n`
    pub fn end_line(&self) -> &str {
        &self.end_line
    }

    /// `//!AGE! SHA256: <digest>\n`
    pub fn checksum_line(digest: &str) -> String {
        format!("{CHECKSUM_PREFIX}{digest}\n")
    }

    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// Center `name` between dash runs inside a banner of `width` units.
///
/// The name is measured in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice. Banners produced by the JavaScript
/// tooling that shares these files line up byte for byte.
///
/// Each run has one dash fewer than its computed slot, and a slot of zero
/// yields no dashes. A negative slot means the name is too long.
fn banner(tag: char, label: &str, name: &str, width: usize) -> Result<String> {
    let length = name.encode_utf16().count();
    let too_long = || Error::BlockNameTooLong {
        name: name.to_string(),
        length,
        max: width - 6,
    };

    let width = width as i64;
    let len = length as i64;

    let pre_slot = (width - len).div_euclid(2) - 3;
    if pre_slot < 0 {
        return Err(too_long());
    }
    let pre = dashes(pre_slot);

    let post_slot = width - pre.len() as i64 - len;
    if post_slot < 0 {
        return Err(too_long());
    }
    let post = dashes(post_slot);

    Ok(format!("{SIGNATURE}{tag}! {pre} Auto {label}: {name} {post}\n"))
}

fn dashes(slot: i64) -> String {
    "-".repeat((slot - 1).max(0) as usize)
}
