#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let compressed = lz4s::block::compress_block_to_vec(data);
    assert!(compressed.len() <= lz4s::block::compress_bound(data.len()));

    // Decode into a buffer of exactly the original length; any error or
    // difference is a codec bug.
    let mut recovered = vec![0u8; data.len()];
    let n = lz4s::block::decompress_block(&compressed, &mut recovered)
        .expect("valid block failed to decode");
    assert_eq!(n, data.len());
    assert_eq!(recovered, data);
});
