//! The LZ4s block-streaming file format and its [`StreamCodec`] implementation.
//!
//! An LZ4s stream is a 4-byte little-endian magic number followed by a
//! sequence of independently compressed blocks, each preceded by a 4-byte LE
//! header, and terminated by a zero end mark and an XXH32 content checksum:
//!
//! ```text
//! magic      u32 LE  0x73345A4C ("LZ4s")
//! block*     u32 LE  bit 31 = stored raw, bits 0..30 = payload length
//!            payload
//! end mark   u32 LE  0
//! checksum   u32 LE  XXH32(content, seed 0)
//! ```
//!
//! Blocks carry at most [`BLOCK_SIZE`] uncompressed bytes.  A block whose
//! encoding would not be smaller than its input is stored raw.
//!
//! Both directions run entirely inside the caller's scratch buffer, split as
//! `[raw block | compressed block | hash table]` by [`split_scratch`]. The
//! block compressor's match table is that last region, so no per-block
//! buffers are allocated. Files are read and written unbuffered in
//! block-sized chunks.
//!
//! - [`compress`]: file → LZ4s
//! - [`decompress`]: LZ4s → file
//! - [`verify`]: byte-for-byte file comparison

pub mod compress;
pub mod decompress;
pub mod verify;

use std::io::{self, Read, Write};
use std::path::Path;

use crate::block::{compress_bound, LZ4_HASH_TABLE_BYTES};
use crate::codec::{StreamCodec, Verification};
use crate::config::{BLOCK_SIZE, LZ4S_EXTENSION, SCRATCH_SIZE};
use crate::displaylevel;

pub use compress::{compress_file, compress_stream};
pub use decompress::{decompress_file, decompress_stream};
pub use verify::{compare_readers, verify_bytes_equal};

// ---------------------------------------------------------------------------
// Format constants
// ---------------------------------------------------------------------------

/// Magic number opening every LZ4s stream (bytes `L Z 4 s`).
pub const LZ4S_MAGIC: u32 = 0x7334_5A4C;
pub const MAGICNUMBER_SIZE: usize = 4;
pub const BLOCK_HEADER_SIZE: usize = 4;
pub const CHECKSUM_SIZE: usize = 4;
/// Header bit marking a block stored without compression.
pub const STORED_FLAG: u32 = 1 << 31;
/// Header value terminating the block sequence.
pub const END_MARK: u32 = 0;

/// Byte statistics for one compress or decompress run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Bytes consumed from the source.
    pub bytes_read: u64,
    /// Bytes written to the destination.
    pub bytes_written: u64,
    /// Number of data blocks in the stream.
    pub blocks: u64,
}

// ---------------------------------------------------------------------------
// Scratch layout
// ---------------------------------------------------------------------------

/// Regions of a scratch buffer: raw block, compressed block, hash table.
pub type ScratchRegions<'a> = (&'a mut [u8], &'a mut [u8], &'a mut [u8]);

/// Split `scratch` into a raw-block region of [`BLOCK_SIZE`] bytes, a
/// compressed-block region of `compress_bound(BLOCK_SIZE)` bytes and a
/// hash-table region of [`LZ4_HASH_TABLE_BYTES`].
///
/// Fails with `InvalidInput` when `scratch` is smaller than [`SCRATCH_SIZE`].
pub fn split_scratch(scratch: &mut [u8]) -> io::Result<ScratchRegions<'_>> {
    if scratch.len() < SCRATCH_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "scratch buffer too small: {} bytes, LZ4s needs {}",
                scratch.len(),
                SCRATCH_SIZE
            ),
        ));
    }
    let (raw, rest) = scratch.split_at_mut(BLOCK_SIZE);
    let (packed, rest) = rest.split_at_mut(compress_bound(BLOCK_SIZE));
    Ok((raw, packed, &mut rest[..LZ4_HASH_TABLE_BYTES]))
}

// ---------------------------------------------------------------------------
// Read helpers
// ---------------------------------------------------------------------------

/// Reads until `buf` is full or EOF; returns the number of bytes read.
pub(crate) fn read_full<R: Read + ?Sized>(src: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0usize;
    while total < buf.len() {
        match src.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

/// Attaches `path` to an I/O error while keeping its kind.
pub(crate) fn with_path(path: &Path, e: io::Error) -> io::Error {
    io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
}

/// Writer that names `path` in every error it returns and records that one
/// occurred, so callers can tag the remaining errors with the source path.
pub(crate) struct PathWriter<'p, W> {
    inner: W,
    path: &'p Path,
    failed: bool,
}

impl<'p, W: Write> PathWriter<'p, W> {
    pub(crate) fn new(inner: W, path: &'p Path) -> Self {
        PathWriter {
            inner,
            path,
            failed: false,
        }
    }

    /// Tags `e` with `src` unless it already came from this writer.
    pub(crate) fn source_error(&self, src: &Path, e: io::Error) -> io::Error {
        if self.failed {
            e
        } else {
            with_path(src, e)
        }
    }

    fn tag(&mut self, e: io::Error) -> io::Error {
        self.failed = true;
        with_path(self.path, e)
    }
}

impl<W: Write> Write for PathWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).map_err(|e| self.tag(e))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().map_err(|e| self.tag(e))
    }
}

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

/// The LZ4s file codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz4sCodec;

impl Lz4sCodec {
    pub fn new() -> Self {
        Lz4sCodec
    }
}

impl StreamCodec for Lz4sCodec {
    fn extension(&self) -> &str {
        LZ4S_EXTENSION
    }

    fn compress(&self, src: &Path, dst: &Path, scratch: &mut [u8]) -> io::Result<()> {
        let stats = compress_file(src, dst, scratch)?;
        displaylevel!(
            4,
            "compressed {} bytes into {} bytes ({} blocks)\n",
            stats.bytes_read,
            stats.bytes_written,
            stats.blocks
        );
        Ok(())
    }

    fn decompress(&self, src: &Path, dst: &Path, scratch: &mut [u8]) -> io::Result<()> {
        let stats = decompress_file(src, dst, scratch)?;
        displaylevel!(
            4,
            "decoded {} bytes into {} bytes ({} blocks)\n",
            stats.bytes_read,
            stats.bytes_written,
            stats.blocks
        );
        Ok(())
    }

    fn verify_bytes_equal(&self, expected: &Path, actual: &Path) -> io::Result<Verification> {
        verify_bytes_equal(expected, actual)
    }
}
