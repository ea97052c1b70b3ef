//! Fixed-length binary descriptors.
//!
//! # Ownership
//!
//! [`Descriptor`] owns its `L` bytes. Operations in this crate take
//! descriptors by read-only view (`AsRef<[u8]>`), so rows borrowed from an
//! extractor's output buffer, owned descriptors, and references to owned
//! descriptors can all be mixed. A view must outlive the call that reads it
//! and that is all: nothing here retains it.
//!
//! Views carry no length guarantee, so every operation validates them
//! against `L` with [`check_views`] before doing any work.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::bits::{self, BITS_PER_BYTE};
use crate::error::{DescriptorError, Result};

/// An owned binary descriptor of exactly `L` bytes (`8 * L` bits).
///
/// # Example
///
/// ```rust
/// use bitvoc::Descriptor;
///
/// let mut d = Descriptor::<4>::zeros();
/// d.set_bit(0, true);
/// assert_eq!(d.as_bytes(), &[0x80, 0, 0, 0]);
/// assert_eq!(d.count_ones(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor<const L: usize> {
    bytes: [u8; L],
}

impl<const L: usize> Descriptor<L> {
    /// Length in bytes.
    pub const BYTES: usize = L;

    /// Length in bits.
    pub const BITS: usize = L * BITS_PER_BYTE;

    /// Wrap raw bytes.
    pub const fn new(bytes: [u8; L]) -> Self {
        Self { bytes }
    }

    /// All-zero descriptor.
    pub const fn zeros() -> Self {
        Self { bytes: [0; L] }
    }

    /// Copy a descriptor out of a borrowed view.
    ///
    /// Fails with `LengthMismatch` unless `view` is exactly `L` bytes.
    pub fn from_slice(view: &[u8]) -> Result<Self> {
        check_view::<L>(view, 0)?;
        let mut bytes = [0u8; L];
        bytes.copy_from_slice(view);
        Ok(Self { bytes })
    }

    /// Raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; L] {
        &self.bytes
    }

    /// Consume into raw bytes.
    pub fn into_bytes(self) -> [u8; L] {
        self.bytes
    }

    /// Value of bit `bit` (MSB-first). Out-of-range reads as `false`.
    #[inline]
    pub fn bit(&self, bit: usize) -> bool {
        bits::is_set(&self.bytes, bit)
    }

    /// Set bit `bit` (MSB-first). Out-of-range is a no-op.
    pub fn set_bit(&mut self, bit: usize, val: bool) {
        if bit >= Self::BITS {
            return;
        }
        let (byte, mask) = bits::locate(bit);
        if val {
            self.bytes[byte] |= mask;
        } else {
            self.bytes[byte] &= !mask;
        }
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }
}

impl<const L: usize> Default for Descriptor<L> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const L: usize> From<[u8; L]> for Descriptor<L> {
    fn from(bytes: [u8; L]) -> Self {
        Self::new(bytes)
    }
}

impl<'a, const L: usize> TryFrom<&'a [u8]> for Descriptor<L> {
    type Error = DescriptorError;

    fn try_from(view: &'a [u8]) -> Result<Self> {
        Self::from_slice(view)
    }
}

impl<const L: usize> AsRef<[u8]> for Descriptor<L> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const L: usize> fmt::Debug for Descriptor<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Descriptor<{L}>[")?;
        for b in &self.bytes {
            write!(f, "{b:02x}")?;
        }
        write!(f, "]")
    }
}

/// Same encoding as [`to_text`](crate::to_text).
impl<const L: usize> fmt::Display for Descriptor<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::text::write_text(f, &self.bytes)
    }
}

impl<const L: usize> FromStr for Descriptor<L> {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self> {
        crate::text::from_text(s)
    }
}

/// Reject a view that is not exactly `L` bytes. `index` is reported in the error.
pub(crate) fn check_view<const L: usize>(view: &[u8], index: usize) -> Result<()> {
    if view.len() != L {
        debug!(
            expected = L,
            actual = view.len(),
            index,
            "rejected descriptor view"
        );
        return Err(DescriptorError::length_mismatch(L, view.len(), index));
    }
    Ok(())
}

/// Validate every view of a collection before any of them is read.
pub(crate) fn check_views<const L: usize, D: AsRef<[u8]>>(views: &[D]) -> Result<()> {
    views
        .iter()
        .enumerate()
        .try_for_each(|(i, d)| check_view::<L>(d.as_ref(), i))
}
