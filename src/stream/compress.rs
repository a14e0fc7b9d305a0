//! LZ4s stream compression.
//!
//! [`compress_stream`] reads the source in [`BLOCK_SIZE`] chunks into the raw
//! region of the scratch buffer, encodes each chunk into the compressed
//! region using the scratch hash table, and writes `header + payload`.  Chunks that do not shrink are written raw
//! with [`STORED_FLAG`] set.  Blocks are independent: no match ever crosses a
//! block boundary.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use super::{
    read_full, split_scratch, with_path, PathWriter, StreamStats, BLOCK_HEADER_SIZE, CHECKSUM_SIZE, END_MARK,
    LZ4S_MAGIC, MAGICNUMBER_SIZE, STORED_FLAG,
};
use crate::block::compress_block_with_table;
use crate::config::BLOCK_SIZE;
use crate::xxhash::content_hasher;

/// Compress everything readable from `src` into an LZ4s stream on `dst`.
///
/// `scratch` must be at least [`crate::config::SCRATCH_SIZE`] bytes.
pub fn compress_stream<R: Read, W: Write>(
    src: &mut R,
    dst: &mut W,
    scratch: &mut [u8],
) -> io::Result<StreamStats> {
    let (raw, packed, table) = split_scratch(scratch)?;
    let mut hasher = content_hasher();
    let mut stats = StreamStats::default();

    dst.write_all(&LZ4S_MAGIC.to_le_bytes())?;
    stats.bytes_written += MAGICNUMBER_SIZE as u64;

    loop {
        let n = read_full(src, raw)?;
        if n == 0 {
            break;
        }
        let chunk = &raw[..n];
        hasher.update(chunk);

        let c_size = compress_block_with_table(chunk, packed, table)
            .map_err(|e| io::Error::other(format!("block compression failed: {e}")))?;

        let (header, payload) = if c_size < n {
            (c_size as u32, &packed[..c_size])
        } else {
            (n as u32 | STORED_FLAG, chunk)
        };
        dst.write_all(&header.to_le_bytes())?;
        dst.write_all(payload)?;

        stats.bytes_read += n as u64;
        stats.bytes_written += (BLOCK_HEADER_SIZE + payload.len()) as u64;
        stats.blocks += 1;

        // read_full only returns a short chunk at EOF.
        if n < BLOCK_SIZE {
            break;
        }
    }

    dst.write_all(&END_MARK.to_le_bytes())?;
    dst.write_all(&hasher.digest().to_le_bytes())?;
    dst.flush()?;
    stats.bytes_written += (BLOCK_HEADER_SIZE + CHECKSUM_SIZE) as u64;

    Ok(stats)
}

/// Compress the file at `src` into a new LZ4s file at `dst`.
///
/// `dst` is created or truncated.  Write errors name `dst`; read errors
/// name `src`.
pub fn compress_file(src: &Path, dst: &Path, scratch: &mut [u8]) -> io::Result<StreamStats> {
    let mut reader = File::open(src).map_err(|e| with_path(src, e))?;
    let file = File::create(dst).map_err(|e| with_path(dst, e))?;
    let mut writer = PathWriter::new(file, dst);
    compress_stream(&mut reader, &mut writer, scratch).map_err(|e| writer.source_error(src, e))
}
