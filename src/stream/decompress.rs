//! LZ4s stream decompression.
//!
//! [`decompress_stream`] validates the magic number, then reads one block
//! header at a time: compressed payloads are read into the compressed region
//! of the scratch buffer and decoded into the raw region; stored payloads are
//! read straight into the raw region.  After the end mark the XXH32 content checksum
//! is compared against the decoded bytes, and any trailing byte is an error.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use super::{
    read_full, split_scratch, with_path, PathWriter, StreamStats, BLOCK_HEADER_SIZE, CHECKSUM_SIZE, END_MARK,
    LZ4S_MAGIC, MAGICNUMBER_SIZE, STORED_FLAG,
};
use crate::block::decompress_block;
use crate::xxhash::content_hasher;

fn invalid_data(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

/// Reads one little-endian u32, failing with `UnexpectedEof` and `what` in
/// the message when the stream ends first.
fn read_word<R: Read>(src: &mut R, what: &str) -> io::Result<u32> {
    let mut word = [0u8; 4];
    if read_full(src, &mut word)? != word.len() {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("truncated LZ4s stream: missing {what}"),
        ));
    }
    Ok(u32::from_le_bytes(word))
}

/// Decode an LZ4s stream from `src`, writing the original bytes to `dst`.
///
/// `scratch` must be at least [`crate::config::SCRATCH_SIZE`] bytes.
pub fn decompress_stream<R: Read, W: Write>(
    src: &mut R,
    dst: &mut W,
    scratch: &mut [u8],
) -> io::Result<StreamStats> {
    let (raw, packed, _) = split_scratch(scratch)?;
    let mut hasher = content_hasher();
    let mut stats = StreamStats::default();

    let magic = read_word(src, "magic number")?;
    if magic != LZ4S_MAGIC {
        return Err(invalid_data(format!(
            "not an LZ4s stream (magic 0x{magic:08X})"
        )));
    }
    stats.bytes_read += MAGICNUMBER_SIZE as u64;

    loop {
        let header = read_word(src, "end mark")?;
        stats.bytes_read += BLOCK_HEADER_SIZE as u64;
        if header == END_MARK {
            break;
        }

        let block_index = stats.blocks;
        let len = (header & !STORED_FLAG) as usize;
        let decoded: &[u8] = if header & STORED_FLAG != 0 {
            if len == 0 || len > raw.len() {
                return Err(invalid_data(format!(
                    "block {block_index}: invalid stored size {len}"
                )));
            }
            src.read_exact(&mut raw[..len])?;
            &raw[..len]
        } else {
            if len > packed.len() {
                return Err(invalid_data(format!(
                    "block {block_index}: compressed size {len} exceeds limit {}",
                    packed.len()
                )));
            }
            src.read_exact(&mut packed[..len])?;
            let n = decompress_block(&packed[..len], raw).map_err(|e| {
                invalid_data(format!("block {block_index}: corrupted input detected ({e})"))
            })?;
            &raw[..n]
        };

        hasher.update(decoded);
        dst.write_all(decoded)?;

        stats.bytes_read += len as u64;
        stats.bytes_written += decoded.len() as u64;
        stats.blocks += 1;
    }

    let stored = read_word(src, "content checksum")?;
    stats.bytes_read += CHECKSUM_SIZE as u64;
    let computed = hasher.digest();
    if stored != computed {
        return Err(invalid_data(format!(
            "content checksum mismatch: stream says 0x{stored:08X}, decoded data hashes to 0x{computed:08X}"
        )));
    }

    let mut probe = [0u8; 1];
    if read_full(src, &mut probe)? != 0 {
        return Err(invalid_data("trailing data after LZ4s end mark".to_owned()));
    }

    dst.flush()?;
    Ok(stats)
}

/// Decompress the LZ4s file at `src` into `dst`, truncating any previous
/// contents of `dst`.  Write errors name `dst`; read and format errors name
/// `src`.
pub fn decompress_file(src: &Path, dst: &Path, scratch: &mut [u8]) -> io::Result<StreamStats> {
    let mut reader = File::open(src).map_err(|e| with_path(src, e))?;
    let file = File::create(dst).map_err(|e| with_path(dst, e))?;
    let mut writer = PathWriter::new(file, dst);
    decompress_stream(&mut reader, &mut writer, scratch).map_err(|e| writer.source_error(src, e))
}
