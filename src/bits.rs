//! MSB-first bit addressing.
//!
//! Bit `i` of a descriptor lives in byte `i / 8`, and within that byte the
//! most significant bit comes first. Bit 0 is therefore `0x80` of byte 0 and
//! bit 7 is `0x01` of byte 0. Every operation that walks individual bits
//! (centroids, float expansion, descriptor accessors) goes through here.

/// Bits per descriptor byte.
pub const BITS_PER_BYTE: usize = 8;

/// Byte index and mask for bit `bit`.
///
/// ```
/// use bitvoc::bits::locate;
///
/// assert_eq!(locate(0), (0, 0b1000_0000));
/// assert_eq!(locate(7), (0, 0b0000_0001));
/// assert_eq!(locate(10), (1, 0b0010_0000));
/// ```
#[inline]
#[must_use]
pub const fn locate(bit: usize) -> (usize, u8) {
    (bit / BITS_PER_BYTE, 0x80 >> (bit % BITS_PER_BYTE))
}

/// Whether bit `bit` is set. Out-of-range positions read as clear.
#[inline]
#[must_use]
pub fn is_set(bytes: &[u8], bit: usize) -> bool {
    let (byte, mask) = locate(bit);
    bytes.get(byte).is_some_and(|b| b & mask != 0)
}

/// Iterate the bits of one byte, MSB first.
#[inline]
pub fn byte_bits(byte: u8) -> impl Iterator<Item = bool> {
    (0..BITS_PER_BYTE).map(move |offset| byte & (0x80 >> offset) != 0)
}
