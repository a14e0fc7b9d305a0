//! LZ4 block compression.
//!
//! A single-pass greedy encoder: every position is hashed into a 4096-entry
//! table of previous positions; a candidate is accepted when it lies within
//! [`LZ4_DISTANCE_MAX`] and its first four bytes match.  Accepted matches are
//! extended backwards over pending literals and forwards up to the
//! last-literals boundary.  Unmatched stretches are skipped with the usual
//! LZ4 acceleration (step grows every `1 << LZ4_SKIP_TRIGGER` misses).
//!
//! The table lives in a caller-owned byte region of
//! [`LZ4_HASH_TABLE_BYTES`] ([`compress_block_with_table`]) so a stream
//! encoder can keep it inside its scratch buffer; [`compress_block`] uses a
//! stack-local table.
//!
//! Capacity-exceeded conditions are signalled as
//! [`Err(Lz4Error::OutputTooSmall)`](Lz4Error::OutputTooSmall).

use std::fmt;

use super::types::{
    count, hash4, read32, LASTLITERALS, LZ4_DISTANCE_MAX, LZ4_HASH_TABLE_BYTES, LZ4_MIN_LENGTH,
    LZ4_SKIP_TRIGGER, MFLIMIT, MINMATCH, ML_BITS, ML_MASK, RUN_MASK,
};

/// Maximum allowed input size (2 113 929 216 bytes).
pub const LZ4_MAX_INPUT_SIZE: usize = 0x7E00_0000;

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by LZ4 block compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lz4Error {
    /// The output buffer is too small to hold the compressed data.
    OutputTooSmall,
    /// The input exceeds [`LZ4_MAX_INPUT_SIZE`].
    InputTooLarge,
    /// The hash-table region is shorter than [`LZ4_HASH_TABLE_BYTES`].
    TableTooSmall,
}

impl fmt::Display for Lz4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lz4Error::OutputTooSmall => f.write_str("output buffer too small"),
            Lz4Error::InputTooLarge => f.write_str("input exceeds maximum block size"),
            Lz4Error::TableTooSmall => f.write_str("hash table region too small"),
        }
    }
}

impl std::error::Error for Lz4Error {}

// ─────────────────────────────────────────────────────────────────────────────
// Bounds
// ─────────────────────────────────────────────────────────────────────────────

/// Worst-case compressed size, usable in constant expressions.
pub const fn compress_bound_const(input_size: usize) -> usize {
    input_size + (input_size / 255) + 16
}

/// Worst-case compressed size for a given input size.
///
/// Returns 0 if `input_size` exceeds [`LZ4_MAX_INPUT_SIZE`].
#[inline]
pub fn compress_bound(input_size: usize) -> usize {
    if input_size > LZ4_MAX_INPUT_SIZE {
        0
    } else {
        compress_bound_const(input_size)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hash table
// ─────────────────────────────────────────────────────────────────────────────

/// Position table over a borrowed byte region, one LE u32 per hash slot.
struct HashTable<'a>(&'a mut [u8]);

impl HashTable<'_> {
    #[inline]
    fn get(&self, h: usize) -> usize {
        read32(self.0, h * 4) as usize
    }

    #[inline]
    fn set(&mut self, h: usize, pos: usize) {
        self.0[h * 4..h * 4 + 4].copy_from_slice(&(pos as u32).to_le_bytes());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Output cursor
// ─────────────────────────────────────────────────────────────────────────────

struct Sink<'a> {
    dst: &'a mut [u8],
    pos: usize,
}

impl<'a> Sink<'a> {
    #[inline]
    fn push(&mut self, b: u8) -> Result<(), Lz4Error> {
        let slot = self.dst.get_mut(self.pos).ok_or(Lz4Error::OutputTooSmall)?;
        *slot = b;
        self.pos += 1;
        Ok(())
    }

    #[inline]
    fn extend(&mut self, bytes: &[u8]) -> Result<(), Lz4Error> {
        let end = self.pos + bytes.len();
        let slot = self
            .dst
            .get_mut(self.pos..end)
            .ok_or(Lz4Error::OutputTooSmall)?;
        slot.copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// 255-run length extension following a saturated token nibble.
    #[inline]
    fn push_length(&mut self, mut len: usize) -> Result<(), Lz4Error> {
        while len >= 255 {
            self.push(255)?;
            len -= 255;
        }
        self.push(len as u8)
    }

    fn sequence(&mut self, literals: &[u8], offset: usize, match_len: usize) -> Result<(), Lz4Error> {
        let lit_len = literals.len();
        let ml = match_len - MINMATCH;
        let token = ((lit_len.min(RUN_MASK as usize) as u8) << ML_BITS)
            | ml.min(ML_MASK as usize) as u8;
        self.push(token)?;
        if lit_len >= RUN_MASK as usize {
            self.push_length(lit_len - RUN_MASK as usize)?;
        }
        self.extend(literals)?;
        self.extend(&(offset as u16).to_le_bytes())?;
        if ml >= ML_MASK as usize {
            self.push_length(ml - ML_MASK as usize)?;
        }
        Ok(())
    }

    fn last_literals(&mut self, literals: &[u8]) -> Result<(), Lz4Error> {
        let lit_len = literals.len();
        self.push((lit_len.min(RUN_MASK as usize) as u8) << ML_BITS)?;
        if lit_len >= RUN_MASK as usize {
            self.push_length(lit_len - RUN_MASK as usize)?;
        }
        self.extend(literals)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `src` into `dst` as a single LZ4 block.
///
/// Returns the number of bytes written.  An empty `src` encodes as a single
/// zero token.  `dst.len() >= compress_bound(src.len())` always succeeds.
pub fn compress_block(src: &[u8], dst: &mut [u8]) -> Result<usize, Lz4Error> {
    let mut table = [0u8; LZ4_HASH_TABLE_BYTES];
    compress_block_with_table(src, dst, &mut table)
}

/// [`compress_block`] using `table` (at least [`LZ4_HASH_TABLE_BYTES`]) as
/// the match-finder hash table.
///
/// The table is cleared before use, so blocks stay independent and any
/// previous contents are irrelevant.  Output is identical to
/// [`compress_block`].
pub fn compress_block_with_table(
    src: &[u8],
    dst: &mut [u8],
    table: &mut [u8],
) -> Result<usize, Lz4Error> {
    if src.len() > LZ4_MAX_INPUT_SIZE {
        return Err(Lz4Error::InputTooLarge);
    }
    let table = table
        .get_mut(..LZ4_HASH_TABLE_BYTES)
        .ok_or(Lz4Error::TableTooSmall)?;

    let mut sink = Sink { dst, pos: 0 };
    let mut anchor = 0usize;

    if src.len() >= LZ4_MIN_LENGTH {
        table.fill(0);
        let mut table = HashTable(table);
        // Matches may start no later than `mflimit` and must end by `match_limit`.
        let mflimit = src.len() - MFLIMIT;
        let match_limit = src.len() - LASTLITERALS;

        let mut ip = 0usize;
        let mut search_match_nb = 1u32 << LZ4_SKIP_TRIGGER;

        while ip <= mflimit {
            let sequence = read32(src, ip);
            let h = hash4(sequence);
            let candidate = table.get(h);
            table.set(h, ip);

            let found = candidate < ip
                && ip - candidate <= LZ4_DISTANCE_MAX
                && read32(src, candidate) == sequence;

            if !found {
                let step = (search_match_nb >> LZ4_SKIP_TRIGGER) as usize;
                search_match_nb += 1;
                ip += step;
                continue;
            }

            // Catch up over pending literals.
            let mut start = ip;
            let mut reference = candidate;
            while start > anchor && reference > 0 && src[start - 1] == src[reference - 1] {
                start -= 1;
                reference -= 1;
            }

            let forward = count(src, ip + MINMATCH, candidate + MINMATCH, match_limit);
            let match_len = (ip - start) + MINMATCH + forward;

            sink.sequence(&src[anchor..start], start - reference, match_len)?;

            ip = start + match_len;
            anchor = ip;
            search_match_nb = 1u32 << LZ4_SKIP_TRIGGER;

            // Seed the table with a position inside the match just emitted.
            if ip >= 2 && ip - 2 + MINMATCH <= src.len() {
                table.set(hash4(read32(src, ip - 2)), ip - 2);
            }
        }
    }

    sink.last_literals(&src[anchor..])?;
    Ok(sink.pos)
}
