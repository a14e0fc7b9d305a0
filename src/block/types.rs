//! LZ4 block constants, memory helpers and the match-finder hash.
//!
//! The block layout is the standard LZ4 one: a token byte (4-bit literal
//! length, 4-bit match length), optional 255-run length extensions, the
//! literals, a 2-byte little-endian back-reference offset and an optional
//! match-length extension.

// ─────────────────────────────────────────────────────────────────────────────
// Common constants
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum match length encoded in an LZ4 block.
pub const MINMATCH: usize = 4;

/// Last N bytes of the input are always emitted as literals.
pub const LASTLITERALS: usize = 5;

/// Minimum bytes needed at the input tail to attempt a new match.
pub const MFLIMIT: usize = 12;

/// Minimum input length that may produce any match at all.
pub const LZ4_MIN_LENGTH: usize = MFLIMIT + 1;

/// Maximum back-reference distance supported by the LZ4 format.
pub const LZ4_DISTANCE_MAX: usize = 65_535;

pub const ML_BITS: u32 = 4;
pub const ML_MASK: u32 = (1u32 << ML_BITS) - 1;
pub const RUN_BITS: u32 = 8 - ML_BITS;
pub const RUN_MASK: u32 = (1u32 << RUN_BITS) - 1;

// ─────────────────────────────────────────────────────────────────────────────
// Hash-table sizing
// ─────────────────────────────────────────────────────────────────────────────

/// Hash log: number of bits kept from each hash value.
pub const LZ4_HASHLOG: u32 = 12;
/// Number of u32 entries in the hash table.
pub const LZ4_HASH_SIZE_U32: usize = 1 << LZ4_HASHLOG;
/// Size in bytes of a hash table laid out as LE u32 entries.
pub const LZ4_HASH_TABLE_BYTES: usize = LZ4_HASH_SIZE_U32 * 4;

/// Higher → faster on incompressible data at the cost of compression ratio.
pub const LZ4_SKIP_TRIGGER: u32 = 6;

// ─────────────────────────────────────────────────────────────────────────────
// Memory helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Reads a little-endian u32 at `pos`. Caller guarantees `pos + 4 <= buf.len()`.
#[inline(always)]
pub fn read32(buf: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([buf[pos], buf[pos + 1], buf[pos + 2], buf[pos + 3]])
}

/// Reads a little-endian u16 at `pos`. Caller guarantees `pos + 2 <= buf.len()`.
#[inline(always)]
pub fn read_le16(buf: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([buf[pos], buf[pos + 1]])
}

/// Knuth multiplicative hash of a 4-byte sequence, reduced to [`LZ4_HASHLOG`] bits.
#[inline(always)]
pub fn hash4(sequence: u32) -> usize {
    (sequence.wrapping_mul(2_654_435_761) >> (32 - LZ4_HASHLOG)) as usize
}

/// Counts how many bytes match between `buf[a..]` and `buf[b..]`, stopping
/// when `a` reaches `limit`.  Requires `b < a`.
#[inline]
pub fn count(buf: &[u8], mut a: usize, mut b: usize, limit: usize) -> usize {
    let start = a;
    while a + 8 <= limit {
        let x = u64::from_le_bytes(buf[a..a + 8].try_into().unwrap_or([0; 8]));
        let y = u64::from_le_bytes(buf[b..b + 8].try_into().unwrap_or([0; 8]));
        let diff = x ^ y;
        if diff != 0 {
            return a - start + (diff.trailing_zeros() / 8) as usize;
        }
        a += 8;
        b += 8;
    }
    while a < limit && buf[a] == buf[b] {
        a += 1;
        b += 1;
    }
    a - start
}
