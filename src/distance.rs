//! Hamming distance between binary descriptors.
//!
//! The distance is the number of bit positions where two descriptors
//! differ: XOR followed by popcount. Bytes are folded eight at a time into
//! `u64` words so the popcount runs on full machine words; byte order does
//! not matter because popcount is order-independent.
//!
//! Hamming distance is a metric on `{0,1}^(8L)`: symmetric, zero exactly on
//! identical descriptors, and it satisfies the triangle inequality.

use crate::descriptor::check_view;
use crate::error::Result;

/// Hamming distance between two `L`-byte descriptors.
///
/// Both views are validated before any bit is read; a view of any other
/// length yields `LengthMismatch` (index 0 for `a`, 1 for `b`). The result
/// lies in `[0, 8 * L]`.
///
/// ```
/// use bitvoc::{distance, BRISK_BYTES};
///
/// let mut a = [0u8; BRISK_BYTES];
/// let mut b = [0u8; BRISK_BYTES];
/// a[0] = 0xFF;
/// b[1] = 0xFF;
/// assert_eq!(distance::<BRISK_BYTES>(&a, &b).unwrap(), 16);
/// ```
#[inline]
pub fn distance<const L: usize>(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Result<u32> {
    let (a, b) = (a.as_ref(), b.as_ref());
    check_view::<L>(a, 0)?;
    check_view::<L>(b, 1)?;
    Ok(hamming_bytes(a, b))
}

/// XOR-popcount over two equal-length byte slices.
fn hamming_bytes(a: &[u8], b: &[u8]) -> u32 {
    debug_assert_eq!(a.len(), b.len());

    let mut wa = a.chunks_exact(8);
    let mut wb = b.chunks_exact(8);

    let words: u32 = wa
        .by_ref()
        .zip(wb.by_ref())
        .map(|(x, y)| (load_word(x) ^ load_word(y)).count_ones())
        .sum();

    let tail: u32 = wa
        .remainder()
        .iter()
        .zip(wb.remainder())
        .map(|(&x, &y)| (x ^ y).count_ones())
        .sum();

    words + tail
}

#[inline(always)]
fn load_word(chunk: &[u8]) -> u64 {
    let mut w = [0u8; 8];
    w.copy_from_slice(chunk);
    u64::from_ne_bytes(w)
}
