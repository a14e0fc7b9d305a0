// e2e/cli_integration.rs: black-box tests of the `lz4s-bench` binary
//
// Runs the binary with std::process::Command and checks the report on
// stdout, the staging folders on disk, and exit codes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Locate the `lz4s-bench` binary produced by Cargo.
fn bench_bin() -> PathBuf {
    // CARGO_BIN_EXE_<name> is set by Cargo when building integration tests.
    if let Some(p) = option_env!("CARGO_BIN_EXE_lz4s-bench") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("lz4s-bench");
    p
}

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(bench_bin())
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run lz4s-bench")
}

fn make_corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "Hello, LZ4s!\n".repeat(400)).unwrap();
    fs::write(
        dir.path().join("b.bin"),
        (0..300_000u32).map(|i| (i % 97) as u8).collect::<Vec<_>>(),
    )
    .unwrap();
    dir
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

// ── 1. folder ────────────────────────────────────────────────────────────────

#[test]
fn folder_prints_header_and_one_pass_line_per_file() {
    let dir = make_corpus();
    let out = run(&["folder", dir.path().to_str().unwrap()], dir.path());
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 3, "{lines:?}");
    assert_eq!(lines[0], "Pass?\tKB\tKB/s\t=>\tKB\tRatio\t=>\tKB/s\tName");
    assert!(lines[1].starts_with("PASS\t") && lines[1].ends_with("\ta.txt"));
    assert!(lines[2].starts_with("PASS\t") && lines[2].ends_with("\tb.bin"));

    assert!(dir.path().join("LZ4s").join("a.txt.lz4s").is_file());
    assert_eq!(
        fs::read(dir.path().join("Out").join("b.bin")).unwrap(),
        fs::read(dir.path().join("b.bin")).unwrap()
    );
}

#[test]
fn folder_with_megabyte_unit() {
    let dir = make_corpus();
    let out = run(&["--unit", "mb", "folder", "."], dir.path());
    assert!(out.status.success());
    assert!(stdout_lines(&out)[0].starts_with("Pass?\tMB\tMB/s"));
}

#[test]
fn missing_folder_exits_one() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-folder");
    fs::write(&blocker, b"x").unwrap();
    let out = run(&["folder", blocker.to_str().unwrap()], dir.path());
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("lz4s-bench: "), "{stderr}");
}

// ── 2. decompress ────────────────────────────────────────────────────────────

#[test]
fn decompress_bare_file_name_stages_in_working_directory() {
    let dir = make_corpus();
    let out = run(&["decompress", "a.txt", "-n", "3"], dir.path());
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with("\ta.txt"));
    assert!(dir.path().join("Out").join("a.txt").is_file());
}

#[test]
fn decompress_nested_file_stages_beside_it() {
    let dir = make_corpus();
    let nested = dir.path().join("sub");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("c.txt"), "nested ".repeat(1000)).unwrap();
    let out = run(&["decompress", "sub/c.txt"], dir.path());
    assert!(out.status.success());
    assert!(nested.join("LZ4s").join("c.txt.lz4s").is_file());
    assert!(!dir.path().join("LZ4s").exists());
}

#[test]
fn decompress_missing_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let out = run(&["decompress", "ghost.bin"], dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("ghost.bin"));
}

// ── 3. usage ─────────────────────────────────────────────────────────────────

#[test]
fn zero_iterations_is_usage_error() {
    let dir = make_corpus();
    let out = run(&["decompress", "a.txt", "-n", "0"], dir.path());
    assert_eq!(out.status.code(), Some(2));
    assert!(!dir.path().join("LZ4s").exists());
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    let out = run(&["--version"], dir.path());
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn quiet_run_keeps_report() {
    let dir = make_corpus();
    let out = run(&["-qq", "folder", "."], dir.path());
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out).len(), 3);
    assert!(out.stderr.is_empty());
}
