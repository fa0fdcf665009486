//! Directory listing and whole-file text I/O

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// List the names of every entry in `dir`, in the order the OS returns them.
///
/// Entries of every kind (files, directories, symlinks) are included.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| Error::NonUtf8FileName { path: entry.path() })?;
        names.push(name);
    }

    debug!(dir = %dir.display(), count = names.len(), "listed directory");
    Ok(names)
}

/// Read a file in full as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Overwrite an existing file in place with text content.
///
/// The file is opened for writing and truncated rather than replaced, so a
/// symlinked path updates the file it points to and the file keeps its
/// permissions. A missing or read-only file is an error, and no scratch file
/// is ever created next to it.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    file.sync_all().map_err(|e| Error::io(path, e))?;

    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}
