#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must produce Ok or Err, never a panic.
    for cap in [0usize, 4096, data.len(), data.len().saturating_mul(255).min(1 << 20)] {
        let mut dst = vec![0u8; cap];
        if let Ok(n) = lz4s::block::decompress_block(data, &mut dst) {
            assert!(n <= cap);
        }
    }
});
