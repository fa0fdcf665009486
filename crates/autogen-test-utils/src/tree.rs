//! [`TestTree`] builder for regeneration test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the declaration directory inside every [`TestTree`]
pub const DECLARATION_DIR: &str = "mw";

/// Name of the target file inside the declaration directory
pub const TARGET_FILE: &str = "index.d.ts";

/// A temporary project root holding a declaration directory (`mw/`) and a
/// target file (`mw/index.d.ts`).
///
/// # Example
///
/// ```rust,no_run
/// use autogen_test_utils::TestTree;
///
/// let tree = TestTree::new()
///     .with_declarations(&["Api.d.ts", "base.d.ts"])
///     .with_target("export {};\n");
/// tree.assert_target_contains("export {};");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create a temporary root with an empty declaration directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(DECLARATION_DIR)).unwrap();
        Self { temp_dir }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the declaration directory.
    pub fn declarations_dir(&self) -> PathBuf {
        self.root().join(DECLARATION_DIR)
    }

    /// Path of the target file.
    pub fn target(&self) -> PathBuf {
        self.declarations_dir().join(TARGET_FILE)
    }

    /// Create empty declaration files with the given names.
    pub fn with_declarations(self, names: &[&str]) -> Self {
        for name in names {
            self.add_declaration(name);
        }
        self
    }

    /// Create one empty declaration file.
    pub fn add_declaration(&self, name: &str) {
        fs::write(
            self.declarations_dir().join(name),
            format!("// {name}\nexport {{}};\n"),
        )
        .unwrap();
    }

    /// Delete a declaration file.
    pub fn remove_declaration(&self, name: &str) {
        fs::remove_file(self.declarations_dir().join(name)).unwrap();
    }

    /// Write the target file.
    pub fn with_target(self, content: &str) -> Self {
        self.write_target(content);
        self
    }

    /// Overwrite the target file.
    pub fn write_target(&self, content: &str) {
        fs::write(self.target(), content).unwrap();
    }

    /// Read the target file.
    ///
    /// # Panics
    /// Panics if the target file cannot be read.
    pub fn read_target(&self) -> String {
        fs::read_to_string(self.target())
            .unwrap_or_else(|_| panic!("Could not read target: {}", self.target().display()))
    }

    /// Write a file relative to the root.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Assert that the target file contains `content`.
    ///
    /// # Panics
    /// Panics if the target does not contain `content`.
    pub fn assert_target_contains(&self, content: &str) {
        let target = self.read_target();
        assert!(
            target.contains(content),
            "Target {} does not contain {:?}.\nActual content:\n{}",
            self.target().display(),
            content,
            target
        );
    }
}
