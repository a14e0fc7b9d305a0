//! Byte-for-byte file comparison.
//!
//! Lengths are compared first from metadata; only equal-length files are
//! read, in fixed 64 KiB chunks, until the first differing byte.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::{read_full, with_path};
use crate::codec::{Mismatch, Verification};
use crate::util::file_len;

const COMPARE_CHUNK: usize = 64 * 1024;

/// Compare the files at `expected` and `actual`.
///
/// Returns [`Verification::Mismatch`] describing the first difference: a
/// length difference when the sizes disagree, otherwise the offset and both
/// byte values of the first unequal byte.
pub fn verify_bytes_equal(expected: &Path, actual: &Path) -> io::Result<Verification> {
    let expected_len = file_len(expected)?;
    let actual_len = file_len(actual)?;
    if expected_len != actual_len {
        return Ok(Verification::Mismatch(Mismatch::Length {
            expected: expected_len,
            actual: actual_len,
        }));
    }

    let mut a = File::open(expected).map_err(|e| with_path(expected, e))?;
    let mut b = File::open(actual).map_err(|e| with_path(actual, e))?;
    compare_readers(&mut a, &mut b)
}

/// Compare two readers to EOF.
pub fn compare_readers<A: Read, B: Read>(a: &mut A, b: &mut B) -> io::Result<Verification> {
    let mut buf_a = vec![0u8; COMPARE_CHUNK];
    let mut buf_b = vec![0u8; COMPARE_CHUNK];
    let mut offset = 0u64;

    loop {
        let na = read_full(a, &mut buf_a)?;
        let nb = read_full(b, &mut buf_b)?;
        let common = na.min(nb);

        if let Some(i) = buf_a[..common]
            .iter()
            .zip(&buf_b[..common])
            .position(|(x, y)| x != y)
        {
            return Ok(Verification::Mismatch(Mismatch::Byte {
                offset: offset + i as u64,
                expected: buf_a[i],
                actual: buf_b[i],
            }));
        }

        if na != nb {
            // One side hit EOF early; count what the longer side still holds.
            let (mut a_total, mut b_total) = (offset + na as u64, offset + nb as u64);
            if na > nb {
                a_total += drain(a, &mut buf_a)?;
            } else {
                b_total += drain(b, &mut buf_b)?;
            }
            return Ok(Verification::Mismatch(Mismatch::Length {
                expected: a_total,
                actual: b_total,
            }));
        }
        if na == 0 {
            return Ok(Verification::Equal);
        }
        offset += na as u64;
    }
}

fn drain<R: Read>(src: &mut R, buf: &mut [u8]) -> io::Result<u64> {
    let mut total = 0u64;
    loop {
        let n = read_full(src, buf)?;
        if n == 0 {
            return Ok(total);
        }
        total += n as u64;
    }
}
