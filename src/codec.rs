//! The narrow interface through which the harness drives a file codec.
//!
//! The harness never looks inside the compressed representation: it only
//! asks a [`StreamCodec`] to turn one file into another and to compare two
//! files byte for byte.  Every call receives the harness's scratch buffer;
//! implementations must stream through that fixed-capacity region instead of
//! buffering whole files.

use std::fmt;
use std::io;
use std::path::Path;

/// First observed difference between an original file and its round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// The files have different lengths.
    Length { expected: u64, actual: u64 },
    /// The files agree up to `offset`, where the bytes differ.
    Byte { offset: u64, expected: u8, actual: u8 },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Mismatch::Length { expected, actual } => write!(
                f,
                "length differs, expected {expected} bytes but found {actual}"
            ),
            Mismatch::Byte {
                offset,
                expected,
                actual,
            } => write!(
                f,
                "bytes differ at offset {offset}, expected 0x{expected:02X} but found 0x{actual:02X}"
            ),
        }
    }
}

/// Outcome of a byte-for-byte comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Equal,
    Mismatch(Mismatch),
}

impl Verification {
    /// The mismatch, if any.
    pub fn mismatch(&self) -> Option<Mismatch> {
        match self {
            Verification::Equal => None,
            Verification::Mismatch(m) => Some(*m),
        }
    }
}

/// A file-to-file codec the harness can round-trip through.
///
/// Errors are infrastructure failures (unreadable source, unwritable
/// destination, corrupted stream) and are never retried by the harness.
pub trait StreamCodec {
    /// Suffix appended to the source file name for compressed artifacts.
    fn extension(&self) -> &str;

    /// Compress `src` into `dst`, creating or truncating `dst`.
    ///
    /// On success `dst` holds the complete compressed stream.
    fn compress(&self, src: &Path, dst: &Path, scratch: &mut [u8]) -> io::Result<()>;

    /// Decompress `src` into `dst`, fully replacing any previous contents.
    fn decompress(&self, src: &Path, dst: &Path, scratch: &mut [u8]) -> io::Result<()>;

    /// Compare two files byte for byte.
    fn verify_bytes_equal(&self, expected: &Path, actual: &Path) -> io::Result<Verification> {
        crate::stream::verify::verify_bytes_equal(expected, actual)
    }
}

impl<C: StreamCodec + ?Sized> StreamCodec for &C {
    fn extension(&self) -> &str {
        (**self).extension()
    }

    fn compress(&self, src: &Path, dst: &Path, scratch: &mut [u8]) -> io::Result<()> {
        (**self).compress(src, dst, scratch)
    }

    fn decompress(&self, src: &Path, dst: &Path, scratch: &mut [u8]) -> io::Result<()> {
        (**self).decompress(src, dst, scratch)
    }

    fn verify_bytes_equal(&self, expected: &Path, actual: &Path) -> io::Result<Verification> {
        (**self).verify_bytes_equal(expected, actual)
    }
}
