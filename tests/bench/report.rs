// Integration tests for report formatting (src/bench/report.rs)
//
//   - header_line() column layout
//   - format_line() PASS / FAIL forms
//   - ratio and throughput arithmetic

use std::time::Duration;

use lz4s::bench::report::{format_line, header_line};
use lz4s::bench::{RoundTripMeasurement, SizeUnit};
use lz4s::codec::Mismatch;

fn measurement(orig: u64, packed: u64, c_ms: u64, d_ms: u64, iterations: u32) -> RoundTripMeasurement {
    RoundTripMeasurement {
        name: "sample".to_owned(),
        original_size: orig,
        compressed_size: Some(packed),
        compress_elapsed: Duration::from_millis(c_ms),
        decompress_elapsed: Duration::from_millis(d_ms),
        iterations,
        mismatch: None,
    }
}

#[test]
fn header_has_nine_tab_separated_columns() {
    let header = header_line(SizeUnit::Kilobyte);
    let cols: Vec<&str> = header.split('\t').collect();
    assert_eq!(
        cols,
        ["Pass?", "KB", "KB/s", "=>", "KB", "Ratio", "=>", "KB/s", "Name"]
    );
}

#[test]
fn pass_line_columns_line_up_with_header() {
    let line = format_line(&measurement(2 << 20, 1 << 20, 500, 250, 1), SizeUnit::Kilobyte);
    let cols: Vec<&str> = line.split('\t').collect();
    assert_eq!(
        cols,
        ["PASS", "2048.00", "4096", "=>", "1024.00", "50%", "=>", "8192", "sample"]
    );
}

#[test]
fn ratio_is_one_minus_quotient() {
    let m = measurement(1000, 250, 1, 1, 1);
    assert_eq!(m.ratio(), Some(0.75));
    assert!(format_line(&m, SizeUnit::Kilobyte).contains("\t75%\t"));
}

#[test]
fn ratio_rounds_to_whole_percent() {
    let m = measurement(3000, 1000, 1, 1, 1);
    assert!(format_line(&m, SizeUnit::Kilobyte).contains("\t67%\t"));
}

#[test]
fn constant_rate_is_independent_of_iterations() {
    let one = measurement(1 << 20, 1 << 19, 100, 40, 1);
    let ten = measurement(1 << 20, 1 << 19, 100, 400, 10);
    let one = one.decompress_throughput(SizeUnit::Kilobyte).unwrap();
    let ten = ten.decompress_throughput(SizeUnit::Kilobyte).unwrap();
    assert!((one - 25_600.0).abs() < 1e-6, "{one}");
    assert!((ten - 25_600.0).abs() < 1e-6, "{ten}");
}

#[test]
fn fail_line_quotes_name() {
    let mut m = measurement(2048, 0, 1, 1, 1);
    m.compressed_size = None;
    m.mismatch = Some(Mismatch::Length {
        expected: 2048,
        actual: 2040,
    });
    assert!(!m.passed());
    assert_eq!(
        format_line(&m, SizeUnit::Kilobyte),
        "FAIL 'sample: length differs, expected 2048 bytes but found 2040"
    );
}
