//! Integration tests for dirtree


use assert_cmd::Command;
use harness::{TestDir, run_dirtree};
use predicates::prelude::*;

#[test]
fn test_basic_tree_output() {
    let dir = TestDir::new();
    dir.add_file("main.rs", "fn main() {}");
    dir.add_file("lib.rs", "pub mod foo;");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["--color", "never"]);
    assert!(success, "dirtree should succeed");
    assert_eq!(stdout, "├── 📄 lib.rs\n└── 📄 main.rs\n");
}

#[test]
fn test_nested_tree_glyphs() {
    let dir = TestDir::new();
    dir.add_file("A/x.txt", "x");
    dir.add_file("b.txt", "b");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["--color", "never"]);
    assert!(success);
    assert_eq!(stdout, "├── 📁 A\n│   └── 📄 x.txt\n└── 📄 b.txt\n");
}

#[test]
fn test_directories_before_files() {
    let dir = TestDir::new();
    dir.add_file("b.txt", "b");
    dir.add_file("a.txt", "a");
    dir.add_dir("A");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["--color", "never"]);
    assert!(success);
    let names: Vec<&str> = stdout
        .lines()
        .map(|l| l.rsplit(' ').next().unwrap())
        .collect();
    assert_eq!(names, vec!["A", "a.txt", "b.txt"]);
}

#[test]
fn test_depth_limit() {
    let dir = TestDir::new();
    dir.add_file("top.rs", "fn top() {}");
    dir.add_file("level1/mid.rs", "fn mid() {}");
    dir.add_file("level1/level2/deep.rs", "fn deep() {}");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["-L", "1", "--color", "never"]);
    assert!(success);
    assert!(stdout.contains("top.rs"), "should show top level");
    assert!(stdout.contains("level1"), "should show first level dir");
    assert!(!stdout.contains("mid.rs"), "should not show level 2: {}", stdout);
    assert!(!stdout.contains("deep.rs"), "should not show deep files: {}", stdout);
}

#[test]
fn test_depth_zero_shows_nothing() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "a");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["-L", "0", "--color", "never"]);
    assert!(success);
    assert_eq!(stdout.trim(), "No files found.");
}

#[test]
fn test_exclude_pattern() {
    let dir = TestDir::new();
    dir.add_file("Node_Modules/pkg/index.js", "");
    dir.add_file("my_node_modules_backup/keep.js", "");
    dir.add_file("app.js", "");

    let (stdout, _stderr, success) =
        run_dirtree(dir.path(), &["-I", "node_modules", "--color", "never"]);
    assert!(success);
    assert!(!stdout.contains("Node_Modules"), "should exclude: {}", stdout);
    assert!(!stdout.contains("index.js"));
    assert!(stdout.contains("my_node_modules_backup"));
    assert!(stdout.contains("app.js"));
}

#[test]
fn test_size_display() {
    let dir = TestDir::new();
    dir.add_sized("data/blob.bin", 1536);
    dir.add_sized("small.txt", 10);

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["-s", "--color", "never"]);
    assert!(success);
    assert!(stdout.contains("📁 data (1.50 KB)"), "got: {}", stdout);
    assert!(stdout.contains("📄 blob.bin (1.50 KB)"));
    assert!(stdout.contains("📄 small.txt (10.00 B)"));

    let (stdout, _stderr, success) =
        run_dirtree(dir.path(), &["-s", "--bytes", "--color", "never"]);
    assert!(success);
    assert!(stdout.contains("📁 data (1536 B)"), "got: {}", stdout);
}

#[test]
fn test_size_of_depth_limited_dir_covers_subtree() {
    let dir = TestDir::new();
    dir.add_sized("outer/inner/deep.bin", 2048);

    let (stdout, _stderr, success) =
        run_dirtree(dir.path(), &["-s", "-L", "1", "--color", "never"]);
    assert!(success);
    assert_eq!(stdout, "└── 📁 outer (2.00 KB)\n");
}

#[test]
fn test_json_output() {
    let dir = TestDir::new();
    dir.add_sized("src/lib.rs", 1024);

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["--json"]);
    assert!(success);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["success"], true);
    assert_eq!(json["file_count"], 2);
    assert_eq!(json["files"][0]["name"], "src");
    assert_eq!(json["files"][0]["is_directory"], true);
    assert_eq!(json["files"][0]["size_formatted"], "1.00 KB");
    assert_eq!(json["files"][1]["depth"], 2);
}

#[test]
fn test_options_file() {
    let dir = TestDir::new();
    dir.add_file("keep/a.txt", "a");
    dir.add_file("skip/b.txt", "b");
    let options = dir.add_file(
        "opts.json",
        r#"{"exclude_patterns": ["skip", "opts\\.json"], "max_depth": 1}"#,
    );

    let (stdout, _stderr, success) = run_dirtree(
        dir.path(),
        &["--options", options.to_str().unwrap(), "--color", "never"],
    );
    assert!(success);
    assert_eq!(stdout, "└── 📁 keep\n");
}

#[test]
fn test_save_writes_attachment() {
    let dir = TestDir::new();
    dir.add_file("tree/leaf.txt", "leaf");
    let out = TestDir::new();

    let (stdout, stderr, success) = run_dirtree(
        &dir.path().join("tree"),
        &["--save", out.path().to_str().unwrap(), "--color", "never"],
    );
    assert!(success, "stderr: {}", stderr);
    assert!(stderr.contains("file_tree_"));

    let saved: Vec<_> = std::fs::read_dir(out.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(saved.len(), 1);
    let name = saved[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("file_tree_") && name.ends_with(".txt"));
    assert_eq!(std::fs::read_to_string(&saved[0]).unwrap(), stdout);
}

#[test]
fn test_missing_path_fails() {
    Command::cargo_bin("dirtree")
        .unwrap()
        .arg("/this/path/does/not/exist")
        .env_remove("RUST_LOG")
        .assert()
        .failure()
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn test_file_path_fails() {
    let dir = TestDir::new();
    let file = dir.add_file("plain.txt", "x");

    Command::cargo_bin("dirtree")
        .unwrap()
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_missing_path_json_reports_failure() {
    Command::cargo_bin("dirtree")
        .unwrap()
        .args(["/this/path/does/not/exist", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("\"file_count\": 0"));
}

#[test]
fn test_failed_scan_saves_nothing() {
    let out = TestDir::new();

    Command::cargo_bin("dirtree")
        .unwrap()
        .args(["/this/path/does/not/exist", "--json", "--save"])
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to save"));

    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn test_invalid_pattern_warns_but_succeeds() {
    let dir = TestDir::new();
    dir.add_file("a(1).txt", "");
    dir.add_file("b.txt", "");

    let (stdout, stderr, success) = run_dirtree(dir.path(), &["-I", "a(", "--color", "never"]);
    assert!(success);
    assert!(stderr.contains("invalid exclude pattern"), "stderr: {}", stderr);
    assert!(!stdout.contains("a(1).txt"), "substring fallback should exclude");
    assert!(stdout.contains("b.txt"));
}

#[test]
fn test_library_scan_and_render() {
    let dir = TestDir::new();
    dir.add_file("A/x.txt", "x");
    dir.add_file("b.txt", "b");

    let result = dirtree::scan(dir.path(), &dirtree::ScanOptions::default());
    assert!(result.root_error().is_none());
    assert_eq!(result.file_count(), 3);
    assert_eq!(
        dirtree::render(&result.entries, &result.options),
        "├── 📁 A\n│   └── 📄 x.txt\n└── 📄 b.txt\n"
    );
}
