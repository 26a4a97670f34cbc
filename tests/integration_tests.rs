//! Integration tests for the srcdump CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command running in `dir` with user config and environment overrides isolated
fn srcdump(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("srcdump").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("SRCDUMP_FILTER__IGNORE_HIDDEN")
        .env_remove("SRCDUMP_OUTPUT__NO_COMMENTS");
    cmd
}

/// Tree with a hidden directory and mixed file types under `proj/`
fn sample_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let proj = temp_dir.path().join("proj");
    fs::create_dir_all(proj.join(".hidden")).unwrap();
    fs::create_dir_all(proj.join("sub")).unwrap();
    fs::write(proj.join("a.py"), "print('a')\n").unwrap();
    fs::write(proj.join(".hidden/b.py"), "print('b')\n").unwrap();
    fs::write(proj.join("sub/c.js"), "console.log('c');\n").unwrap();
    temp_dir
}

#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().unwrap();
    srcdump(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--file-types"))
        .stdout(predicate::str::contains("--no-comments"));
}

#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().unwrap();
    srcdump(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("srcdump"));
}

#[test]
fn test_hidden_and_file_type_selection() {
    let temp_dir = sample_tree();
    srcdump(temp_dir.path())
        .args(["proj", "--ignore-hidden", "--file-types", ".py"])
        .assert()
        .success()
        .stdout("<< START: proj/a.py >>\nprint('a')\n\n<< END >>\n\n");
}

#[test]
fn test_everything_selected_by_default() {
    let temp_dir = sample_tree();
    srcdump(temp_dir.path())
        .arg("proj")
        .assert()
        .success()
        .stdout(predicate::str::contains("<< START: proj/a.py >>"))
        .stdout(predicate::str::contains("<< START: proj/.hidden/b.py >>"))
        .stdout(predicate::str::contains("<< START: proj/sub/c.js >>"));
}

#[test]
fn test_no_comments_strips_python() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("x.py"), "print(1)  # comment\n\"\"\"doc\"\"\"\ny=2").unwrap();

    srcdump(temp_dir.path())
        .args(["x.py", "--no-comments"])
        .assert()
        .success()
        .stdout("<< START: x.py >>\nprint(1)\n\ny=2\n<< END >>\n\n");
}

#[test]
fn test_binary_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let proj = temp_dir.path().join("proj");
    fs::create_dir_all(&proj).unwrap();
    fs::write(proj.join("a.txt"), "first").unwrap();
    fs::write(proj.join("b.bin"), [0xff, 0xd8, 0xff, 0xe0, 0x00]).unwrap();
    fs::write(proj.join("c.txt"), "never reached").unwrap();

    srcdump(temp_dir.path())
        .arg("proj")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("first"))
        .stdout(predicate::str::contains("never reached").not())
        .stderr(predicate::str::contains(
            "Warning: Could not read file due to encoding issues: proj/b.bin",
        ));
}

#[test]
fn test_content_contains_includes_by_content() {
    let temp_dir = TempDir::new().unwrap();
    let proj = temp_dir.path().join("proj");
    fs::create_dir_all(&proj).unwrap();
    fs::write(proj.join("notes.txt"), "TODO: ship it").unwrap();
    fs::write(proj.join("done.txt"), "all finished").unwrap();

    srcdump(temp_dir.path())
        .args(["proj", "--content-contains", "TODO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("proj/notes.txt"))
        .stdout(predicate::str::contains("proj/done.txt").not());
}

#[test]
fn test_ignore_wins_over_path_contains() {
    let temp_dir = TempDir::new().unwrap();
    let proj = temp_dir.path().join("proj");
    fs::create_dir_all(&proj).unwrap();
    fs::write(proj.join("foo_bar.py"), "x = 1").unwrap();
    fs::write(proj.join("other.py"), "y = 2").unwrap();

    srcdump(temp_dir.path())
        .args(["proj", "--ignore", "foo", "--path-contains", "foo"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_ignored_directory_is_pruned() {
    let temp_dir = TempDir::new().unwrap();
    let proj = temp_dir.path().join("proj");
    fs::create_dir_all(proj.join("node_modules/pkg")).unwrap();
    fs::write(proj.join("node_modules/pkg/index.js"), "module.exports = 1;").unwrap();
    fs::write(proj.join("app.js"), "run();").unwrap();

    srcdump(temp_dir.path())
        .args(["proj", "--ignore-file-strings", "node_modules", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("proj/app.js"))
        .stdout(predicate::str::contains("index.js").not())
        .stderr(predicate::str::contains("Skipped directory: proj/node_modules"));
}

#[test]
fn test_verbose_reports_skipped_files() {
    let temp_dir = sample_tree();
    srcdump(temp_dir.path())
        .args(["proj", "--file-types", ".py", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped file: proj/sub/c.js"));
}

#[test]
fn test_compressed_raw_output_round_trips() {
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("m.js"), "let a = 1; // note\nlet b = 2;").unwrap();

    let assert = srcdump(temp_dir.path())
        .args(["m.js", "--no-comments", "--compress", "--compressed-encoding", "raw"])
        .assert()
        .success();
    let stdout = &assert.get_output().stdout;

    let header = b"<< START: m.js >>\nCOMPRESSED CODE: \n";
    let footer = b"\n<< END >>\n\n";
    assert!(stdout.starts_with(header));
    assert!(stdout.ends_with(footer));

    let body = &stdout[header.len()..stdout.len() - footer.len()];
    let mut text = String::new();
    ZlibDecoder::new(body).read_to_string(&mut text).unwrap();
    assert_eq!(text, "let a = 1;\nlet b = 2;");
}

#[test]
fn test_compressed_escaped_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();

    srcdump(temp_dir.path())
        .args(["a.txt", "--compress"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<< START: a.txt >>\nCOMPRESSED CODE: \nb'x"))
        .stdout(predicate::str::ends_with("'\n<< END >>\n\n"));
}

#[test]
fn test_invalid_path_fails_fast() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("later.txt"), "later").unwrap();

    srcdump(temp_dir.path())
        .args(["missing", "later.txt"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Error: missing is neither a valid file nor a directory.",
        ));
}

#[test]
fn test_banner_format() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();

    srcdump(temp_dir.path())
        .args(["a.txt", "--format", "banner"])
        .assert()
        .success()
        .stdout("======== File Path: a.txt ========\nhello\n==================================\n\n");
}

#[test]
fn test_repo_config_file_is_applied() {
    let temp_dir = sample_tree();
    fs::write(
        temp_dir.path().join("srcdump.toml"),
        "[filter]\nignore_hidden = true\nfile_types = [\".js\"]\n",
    )
    .unwrap();

    srcdump(temp_dir.path())
        .arg("proj")
        .assert()
        .success()
        .stdout("<< START: proj/sub/c.js >>\nconsole.log('c');\n\n<< END >>\n\n");
}

#[test]
fn test_env_override() {
    let temp_dir = sample_tree();
    srcdump(temp_dir.path())
        .arg("proj")
        .env("SRCDUMP_FILTER__IGNORE_HIDDEN", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains(".hidden").not());
}

#[test]
fn test_show_config() {
    let temp_dir = TempDir::new().unwrap();
    srcdump(temp_dir.path())
        .args(["--show-config", "--ignore-hidden", "--file-types", ".rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ignore_hidden = true"))
        .stdout(predicate::str::contains("\".rs\""));
}

#[test]
fn test_missing_custom_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();

    srcdump(temp_dir.path())
        .args(["a.txt", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.toml"));
}

#[cfg(unix)]
#[test]
fn test_verbose_reports_unreadable_entry_and_continues() {
    let temp_dir = TempDir::new().unwrap();
    let proj = temp_dir.path().join("proj");
    fs::create_dir_all(proj.join("a")).unwrap();
    fs::create_dir_all(proj.join("z")).unwrap();
    fs::write(proj.join("a/one.txt"), "one").unwrap();
    fs::write(proj.join("z/two.txt"), "two").unwrap();
    std::os::unix::fs::symlink(proj.join("gone"), proj.join("m_broken")).unwrap();

    srcdump(temp_dir.path())
        .args(["proj", "--follow-symlinks", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<< START: proj/a/one.txt >>"))
        .stdout(predicate::str::contains("<< START: proj/z/two.txt >>"))
        .stderr(predicate::str::contains("Could not read directory entry"))
        .stderr(predicate::str::contains("m_broken"));
}

#[test]
fn test_repo_config_in_parent_directory_is_not_used() {
    let temp_dir = sample_tree();
    fs::write(temp_dir.path().join("srcdump.toml"), "[filter]\nfile_types = [\".js\"]\n").unwrap();
    let nested = temp_dir.path().join("proj");

    srcdump(&nested)
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.py"));
}
