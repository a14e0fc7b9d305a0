#![no_main]
use libfuzzer_sys::fuzz_target;

use lz4s::config::SCRATCH_SIZE;
use lz4s::stream::{decompress_stream, LZ4S_MAGIC};

fuzz_target!(|data: &[u8]| {
    let mut scratch = vec![0u8; SCRATCH_SIZE];
    let mut out = Vec::new();

    // Raw input: almost always rejected at the magic number.
    let _ = decompress_stream(&mut &data[..], &mut out, &mut scratch);

    // Prefixed with a valid magic so the block parser sees the input.
    let mut framed = LZ4S_MAGIC.to_le_bytes().to_vec();
    framed.extend_from_slice(data);
    out.clear();
    let _ = decompress_stream(&mut &framed[..], &mut out, &mut scratch);
});
