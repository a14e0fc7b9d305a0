// e2e/harness.rs: end-to-end round trips through the library API
//
// Drives Harness with the real LZ4s codec over realistic inputs, and with a
// corrupting wrapper codec to exercise the FAIL path end to end.

use std::fs;
use std::io;
use std::path::Path;

use lz4s::bench::{round_trip_folder, BatchSummary, Harness, HarnessConfig, SizeUnit};
use lz4s::codec::StreamCodec;
use lz4s::config::BLOCK_SIZE;
use lz4s::stream::Lz4sCodec;
use tempfile::TempDir;

/// Wraps Lz4sCodec and flips one byte of every decompressed output whose
/// file name starts with `bad`.
struct Corrupting(Lz4sCodec);

impl StreamCodec for Corrupting {
    fn extension(&self) -> &str {
        self.0.extension()
    }

    fn compress(&self, src: &Path, dst: &Path, scratch: &mut [u8]) -> io::Result<()> {
        self.0.compress(src, dst, scratch)
    }

    fn decompress(&self, src: &Path, dst: &Path, scratch: &mut [u8]) -> io::Result<()> {
        self.0.decompress(src, dst, scratch)?;
        let name = dst.file_name().unwrap().to_string_lossy();
        if name.starts_with("bad") {
            let mut data = fs::read(dst)?;
            data[100] ^= 0xFF;
            fs::write(dst, data)?;
        }
        Ok(())
    }
}

fn text_corpus(len: usize) -> Vec<u8> {
    let words = ["alpha ", "beta ", "gamma ", "delta ", "epsilon\n"];
    let mut out = Vec::with_capacity(len);
    let mut i = 0usize;
    while out.len() < len {
        out.extend_from_slice(words[(i * 7 + i / 3) % words.len()].as_bytes());
        i += 1;
    }
    out.truncate(len);
    out
}

#[test]
fn multi_block_files_round_trip() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("text"), text_corpus(BLOCK_SIZE * 5 + 321)).unwrap();
    fs::write(dir.path().join("zeros"), vec![0u8; BLOCK_SIZE * 2]).unwrap();

    let mut h = Harness::with_parts(dir.path(), HarnessConfig::default(), Lz4sCodec::new(), Vec::new())
        .unwrap();
    let summary = round_trip_folder(&mut h, 3).unwrap();
    assert_eq!(summary, BatchSummary { passed: 2, failed: 0 });

    let packed = fs::metadata(dir.path().join("LZ4s").join("zeros.lz4s")).unwrap().len();
    assert!(packed < 2000, "zeros compressed to {packed} bytes");
}

#[test]
fn batch_continues_past_failures() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad-one"), text_corpus(5000)).unwrap();
    fs::write(dir.path().join("good-one"), text_corpus(5000)).unwrap();

    let mut h = Harness::with_parts(
        dir.path(),
        HarnessConfig::default(),
        Corrupting(Lz4sCodec::new()),
        Vec::new(),
    )
    .unwrap();
    let summary = round_trip_folder(&mut h, 2).unwrap();
    assert_eq!(summary, BatchSummary { passed: 1, failed: 1 });

    let text = String::from_utf8(h.into_report()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("FAIL 'bad-one: "), "{}", lines[1]);
    assert!(lines[1].contains("offset 100"));
    assert!(lines[2].starts_with("PASS\t"));
}

#[test]
fn megabyte_report_for_large_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("big"), text_corpus(3 << 20)).unwrap();
    let mut cfg = HarnessConfig::default();
    cfg.set_size_unit(SizeUnit::Megabyte);
    let mut h = Harness::with_parts(dir.path(), cfg, Lz4sCodec::new(), Vec::new()).unwrap();
    round_trip_folder(&mut h, 1).unwrap();
    let text = String::from_utf8(h.into_report()).unwrap();
    assert!(text.lines().nth(1).unwrap().starts_with("PASS\t3.00\t"), "{text}");
}
