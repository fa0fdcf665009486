//! End-to-end tests against a realistic declaration tree.
//!
//! `test-fixtures/mw/index.d.ts` is the tail of the real index file with its
//! checked-in "Export Modules" block. Regenerating it over the same module
//! list must leave every byte in place.

use autogen_blocks::{UpsertAction, find_block};
use autogen_core::{BlockStatus, RegenerateConfig, check, regenerate};
use autogen_test_utils::TestTree;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

/// The declaration files sitting next to `index.d.ts`.
const DECLARATIONS: &[&str] = &[
    "Api.d.ts",
    "base.d.ts",
    "cookie.d.ts",
    "Feedback.d.ts",
    "ForeignApi.d.ts",
    "ForeignStructuredUpload.d.ts",
    "ForeignUpload.d.ts",
    "hook.d.ts",
    "inspect.d.ts",
    "jqueryMsg.d.ts",
    "language.d.ts",
    "loader.d.ts",
    "Message.d.ts",
    "messagePoster.d.ts",
    "notification.d.ts",
    "storage.d.ts",
    "Title.d.ts",
    "Upload.d.ts",
    "Uri.d.ts",
    "user.d.ts",
    "util.d.ts",
    "widget.d.ts",
];

const CHECKED_IN_DIGEST: &str = "ce6746f5285579cf1088b1c0da20198e8d3fecb21d89c6bb9dbb2bfbed0624c7";

fn fixture_index() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/mw/index.d.ts");
    std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Could not read fixture: {}", path.display()))
}

fn mw_tree() -> (TestTree, RegenerateConfig) {
    let tree = TestTree::new()
        .with_declarations(DECLARATIONS)
        .with_target(&fixture_index());
    let config = RegenerateConfig::default().rooted_at(tree.root());
    (tree, config)
}

#[test]
fn test_checked_in_block_is_reproduced_exactly() {
    let (tree, config) = mw_tree();
    let original = tree.read_target();

    let report = regenerate(&config).unwrap();

    assert_eq!(report.digest, CHECKED_IN_DIGEST);
    assert_eq!(report.modules.len(), DECLARATIONS.len());
    assert!(!report.changed);
    assert!(matches!(report.action, UpsertAction::Replaced { .. }));
    assert_eq!(tree.read_target(), original);
}

#[test]
fn test_checked_in_block_checks_clean() {
    let (_tree, config) = mw_tree();
    assert_eq!(check(&config).unwrap().status, BlockStatus::UpToDate);
}

#[test]
fn test_module_order_matches_checked_in_block() {
    let (_tree, config) = mw_tree();
    let report = regenerate(&config).unwrap();

    let expected: Vec<String> = DECLARATIONS
        .iter()
        .map(|name| name.trim_end_matches(".d.ts").to_string())
        .collect();
    assert_eq!(report.modules, expected);
}

#[test]
fn test_adding_a_declaration_updates_only_the_block() {
    let (tree, config) = mw_tree();
    let original = tree.read_target();
    let markers = config.markers().unwrap();
    let old_span = find_block(&original, &markers).unwrap().span;

    tree.add_declaration("textSelection.d.ts");
    let report = regenerate(&config).unwrap();
    let updated = tree.read_target();

    assert!(report.changed);
    assert_ne!(report.digest, CHECKED_IN_DIGEST);
    assert_eq!(&updated[..old_span.start], &original[..old_span.start]);
    assert!(updated.contains("import './storage';\nimport './textSelection';\nimport './Title';\n"));

    let block = find_block(&updated, &markers).unwrap();
    assert_eq!(block.digest, report.digest);
    assert!(!block.is_tampered());
    assert_eq!(&updated[block.span.end..], &original[old_span.end..]);
}

#[test]
fn test_removing_a_declaration_then_restoring_it() {
    let (tree, config) = mw_tree();
    let original = tree.read_target();

    tree.remove_declaration("widget.d.ts");
    regenerate(&config).unwrap();
    assert!(!tree.read_target().contains("import './widget';"));
    assert!(matches!(
        check(&config).unwrap().status,
        BlockStatus::UpToDate
    ));

    tree.add_declaration("widget.d.ts");
    regenerate(&config).unwrap();
    assert_eq!(tree.read_target(), original);
}

#[test]
fn test_non_declaration_entries_are_imported_verbatim() {
    let (tree, config) = mw_tree();
    tree.write_file("mw/README", "notes\n");

    let report = regenerate(&config).unwrap();

    assert!(report.modules.contains(&"README".to_string()));
    tree.assert_target_contains("import './README';\n");
}
