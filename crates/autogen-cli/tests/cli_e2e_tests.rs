//! CLI end-to-end tests that invoke the compiled `update-import-modules`
//! binary against temporary declaration trees.

use assert_cmd::Command;
use autogen_test_utils::TestTree;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

fn bin(tree: &TestTree) -> Command {
    let mut cmd = Command::cargo_bin("update-import-modules").unwrap();
    cmd.current_dir(tree.root()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_exits_zero() {
    let tree = TestTree::new();
    bin(&tree)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--check"));
}

#[test]
fn test_no_args_regenerates_default_layout() {
    let tree = TestTree::new()
        .with_declarations(&["cookie.d.ts", "Api.d.ts", "base.d.ts"])
        .with_target("export {};\n");

    bin(&tree)
        .assert()
        .success()
        .stdout("Auto generate import modules: Api, base, cookie\n");

    tree.assert_target_contains("import './Api';\nimport './base';\nimport './cookie';\n");
    assert!(tree.read_target().starts_with("export {};\n\n//!AGS! "));
}

#[test]
fn test_rerun_leaves_file_identical() {
    let tree = TestTree::new()
        .with_declarations(&["Api.d.ts", "util.d.ts"])
        .with_target("export {};\n");

    bin(&tree).assert().success();
    let first = tree.read_target();
    bin(&tree).assert().success();

    assert_eq!(tree.read_target(), first);
}

#[test]
fn test_check_exit_codes() {
    let tree = TestTree::new()
        .with_declarations(&["Api.d.ts"])
        .with_target("export {};\n");

    bin(&tree)
        .arg("--check")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("MISSING"))
        .stderr(predicate::str::contains("import block missing"));
    assert_eq!(tree.read_target(), "export {};\n");

    bin(&tree).assert().success();

    bin(&tree)
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("is up to date"));

    tree.add_declaration("hook.d.ts");
    bin(&tree)
        .arg("--check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("OUTDATED"));
}

#[test]
fn test_flags_select_other_layout() {
    let tree = TestTree::new().with_target("");
    tree.write_file("types/Upload.d.ts", "export {};\n");
    tree.write_file("types/all.d.ts", "// generated below\n");

    bin(&tree)
        .args([
            "--dir",
            "types",
            "--target",
            "types/all.d.ts",
            "--exclude",
            "all.d.ts",
            "--name",
            "Export Types",
        ])
        .assert()
        .success()
        .stdout("Auto generate import modules: Upload\n");

    let target = std::fs::read_to_string(tree.root().join("types/all.d.ts")).unwrap();
    assert!(target.starts_with("// generated below\n\n"));
    assert!(target.contains("Auto Start: Export Types"));
    assert!(target.contains("import './Upload';\n"));
}

#[test]
fn test_config_file_is_read() {
    let tree = TestTree::new()
        .with_declarations(&["Api.d.ts"])
        .with_target("");
    tree.write_file("autogen.toml", "command = \"just imports\"\n");

    bin(&tree).assert().success();

    tree.assert_target_contains("run \"just imports\" to update it.");
}

#[test]
fn test_missing_target_fails_with_error() {
    let tree = TestTree::new().with_declarations(&["Api.d.ts"]);

    bin(&tree)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error").and(predicate::str::contains("index.d.ts")));
}

#[test]
fn test_long_block_name_fails() {
    let tree = TestTree::new().with_target("");
    let name = "n".repeat(70);

    bin(&tree)
        .args(["--name", name.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("banners fit at most 54"));
}
