// Integration tests for the benchmark drivers (src/bench/runner.rs)
//
//   - round_trip_folder(): header once, one line per regular file, sorted
//   - round_trip_single(): header plus a single line
//   - zero iterations rejected with InvalidInput
//   - parent_folder() staging rules

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lz4s::bench::runner::parent_folder;
use lz4s::bench::{
    repeated_decompress_benchmark, round_trip_folder, round_trip_single, BatchSummary, Harness,
    HarnessConfig,
};
use lz4s::stream::Lz4sCodec;
use tempfile::TempDir;

fn harness(dir: &Path) -> Harness<Lz4sCodec, Vec<u8>> {
    Harness::with_parts(dir, HarnessConfig::default(), Lz4sCodec::new(), Vec::new()).unwrap()
}

fn corpus(dir: &TempDir) {
    fs::write(dir.path().join("zeta.log"), "line of log output\n".repeat(2000)).unwrap();
    fs::write(dir.path().join("alpha.csv"), "1,2,3,4,5\n".repeat(5000)).unwrap();
    fs::write(dir.path().join("mid.bin"), (0..50_000u32).map(|i| (i * 31) as u8).collect::<Vec<_>>()).unwrap();
}

#[test]
fn folder_report_is_sorted_by_name() {
    let dir = TempDir::new().unwrap();
    corpus(&dir);
    let mut h = harness(dir.path());
    let summary = round_trip_folder(&mut h, 10).unwrap();
    assert_eq!(summary, BatchSummary { passed: 3, failed: 0 });

    let text = String::from_utf8(h.into_report()).unwrap();
    let names: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|l| l.rsplit('\t').next().unwrap())
        .collect();
    assert_eq!(names, ["alpha.csv", "mid.bin", "zeta.log"]);
}

#[test]
fn staging_folders_are_not_round_tripped() {
    let dir = TempDir::new().unwrap();
    corpus(&dir);
    let mut h = harness(dir.path());
    round_trip_folder(&mut h, 1).unwrap();
    // Second run sees LZ4s/ and Out/ populated but still only the 3 sources.
    let mut h = harness(dir.path());
    let summary = round_trip_folder(&mut h, 1).unwrap();
    assert_eq!(summary.passed, 3);
    assert_eq!(fs::read_dir(dir.path().join("LZ4s")).unwrap().count(), 3);
    assert_eq!(fs::read_dir(dir.path().join("Out")).unwrap().count(), 3);
}

#[test]
fn outputs_match_sources_after_batch() {
    let dir = TempDir::new().unwrap();
    corpus(&dir);
    let mut h = harness(dir.path());
    round_trip_folder(&mut h, 2).unwrap();
    for name in ["alpha.csv", "mid.bin", "zeta.log"] {
        assert_eq!(
            fs::read(dir.path().join("Out").join(name)).unwrap(),
            fs::read(dir.path().join(name)).unwrap()
        );
    }
}

#[test]
fn single_file_driver() {
    let dir = TempDir::new().unwrap();
    corpus(&dir);
    let mut h = harness(dir.path());
    let summary = round_trip_single(&mut h, &dir.path().join("mid.bin"), 5).unwrap();
    assert!(summary.all_passed());
    let text = String::from_utf8(h.into_report()).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.lines().nth(1).unwrap().ends_with("\tmid.bin"));
}

#[test]
fn zero_iterations_are_rejected() {
    let dir = TempDir::new().unwrap();
    let mut h = harness(dir.path());
    assert_eq!(
        round_trip_folder(&mut h, 0).unwrap_err().kind(),
        io::ErrorKind::InvalidInput
    );
    assert!(h.report().is_empty());
    assert_eq!(
        repeated_decompress_benchmark(&dir.path().join("x"), 0)
            .unwrap_err()
            .kind(),
        io::ErrorKind::InvalidInput
    );
}

#[test]
fn missing_folder_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut h = harness(dir.path());
    fs::remove_dir_all(dir.path().join("LZ4s")).unwrap();
    fs::remove_dir_all(dir.path().join("Out")).unwrap();
    fs::remove_dir(dir.path()).unwrap();
    assert!(round_trip_folder(&mut h, 1).is_err());
}

#[test]
fn parent_folder_rules() {
    assert_eq!(parent_folder(Path::new("file")), PathBuf::from("."));
    assert_eq!(parent_folder(Path::new("./file")), PathBuf::from("."));
    assert_eq!(parent_folder(Path::new("/data/file")), PathBuf::from("/data"));
}
