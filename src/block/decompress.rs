//! LZ4 block decompression.
//!
//! This is the security-critical path of the codec: every read from `src` and
//! every write into `dst` is bounds-checked.  Malformed or truncated input
//! returns `Err(DecompressError::MalformedInput)`; it must never panic.

use std::fmt;

use super::types::{read_le16, MINMATCH, ML_BITS, ML_MASK, RUN_MASK};

/// Errors returned by LZ4 block decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// The compressed data is malformed or truncated, or does not fit in the
    /// destination buffer supplied by the caller.
    MalformedInput,
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompressError::MalformedInput => f.write_str("malformed LZ4 block"),
        }
    }
}

impl std::error::Error for DecompressError {}

#[inline(always)]
fn malformed<T>() -> Result<T, DecompressError> {
    Err(DecompressError::MalformedInput)
}

/// Reads a 255-run length extension starting at `*ip`.
#[inline]
fn read_variable_length(src: &[u8], ip: &mut usize) -> Result<usize, DecompressError> {
    let mut total = 0usize;
    loop {
        let Some(&b) = src.get(*ip) else {
            return malformed();
        };
        *ip += 1;
        total = match total.checked_add(b as usize) {
            Some(t) => t,
            None => return malformed(),
        };
        if b != 255 {
            return Ok(total);
        }
    }
}

/// Decompress a full LZ4 block from `src` into `dst`.
///
/// Returns the number of bytes written into `dst`.  The block must end with a
/// literal-only sequence that consumes `src` exactly.
pub fn decompress_block(src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
    let mut ip = 0usize;
    let mut op = 0usize;

    loop {
        let Some(&token) = src.get(ip) else {
            return malformed();
        };
        ip += 1;

        // ── literals ─────────────────────────────────────────────────────────
        let mut lit_len = (token >> ML_BITS) as usize;
        if lit_len == RUN_MASK as usize {
            lit_len += read_variable_length(src, &mut ip)?;
        }
        let (Some(lit_end), Some(out_end)) = (ip.checked_add(lit_len), op.checked_add(lit_len))
        else {
            return malformed();
        };
        if lit_end > src.len() || out_end > dst.len() {
            return malformed();
        }
        dst[op..out_end].copy_from_slice(&src[ip..lit_end]);
        ip = lit_end;
        op = out_end;

        // The final sequence carries literals only.
        if ip == src.len() {
            return Ok(op);
        }

        // ── match ────────────────────────────────────────────────────────────
        if ip + 2 > src.len() {
            return malformed();
        }
        let offset = read_le16(src, ip) as usize;
        ip += 2;
        if offset == 0 || offset > op {
            return malformed();
        }

        let mut match_len = (token as u32 & ML_MASK) as usize;
        if match_len == ML_MASK as usize {
            match_len += read_variable_length(src, &mut ip)?;
        }
        match_len += MINMATCH;

        let Some(match_end) = op.checked_add(match_len) else {
            return malformed();
        };
        if match_end > dst.len() {
            return malformed();
        }

        let from = op - offset;
        if offset >= match_len {
            dst.copy_within(from..from + match_len, op);
        } else {
            // Overlapping copy replicates the last `offset` bytes.
            for i in 0..match_len {
                dst[op + i] = dst[from + i];
            }
        }
        op = match_end;
    }
}
