//! Majority-vote centroids.
//!
//! The centroid of `N >= 2` descriptors sets bit `i` iff at least
//! `ceil(N / 2)` of them have bit `i` set. For even `N` that is "at least
//! half": a bit set in exactly half of the inputs is kept. This is not a
//! strict majority and must not be turned into one; vocabulary trees built
//! with this rule depend on it.
//!
//! # Parallelism
//!
//! Per-bit counts are additive across any partition of the input, so with
//! the `parallel` feature large collections are split into chunks, counted
//! independently, and the counts summed before thresholding. The result is
//! identical to the sequential path.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use crate::bits;
use crate::descriptor::{check_views, Descriptor};
use crate::error::Result;

/// Minimum votes for a bit to survive in the centroid of `n` descriptors.
///
/// ```
/// use bitvoc::majority_threshold;
///
/// assert_eq!(majority_threshold(2), 1);
/// assert_eq!(majority_threshold(3), 2);
/// assert_eq!(majority_threshold(4), 2);
/// ```
#[inline]
#[must_use]
pub const fn majority_threshold(n: usize) -> usize {
    n / 2 + n % 2
}

/// Majority-vote centroid of a collection.
///
/// - Empty input returns `Ok(None)`: "no centroid", distinct from an
///   all-zero descriptor.
/// - One descriptor returns an independent copy of it.
/// - Otherwise each bit is set iff its count reaches
///   [`majority_threshold`]`(N)`.
///
/// Every member is length-checked before counting starts.
///
/// ```
/// use bitvoc::mean;
///
/// let a = [0b1100_0000u8];
/// let b = [0b1000_0000u8];
/// let c = [0b0000_0001u8];
/// let m = mean::<1>(&[&a[..], &b[..], &c[..]]).unwrap().unwrap();
/// assert_eq!(m.as_bytes(), &[0b1000_0000]);
///
/// assert!(mean::<1>(&[] as &[&[u8]]).unwrap().is_none());
/// ```
pub fn mean<const L: usize>(
    descriptors: &[impl AsRef<[u8]> + Sync],
) -> Result<Option<Descriptor<L>>> {
    check_views::<L, _>(descriptors)?;

    match descriptors {
        [] => Ok(None),
        [only] => Descriptor::from_slice(only.as_ref()).map(Some),
        _ => {
            let n = descriptors.len();
            let threshold = majority_threshold(n);
            trace!(n, threshold, bytes = L, "computing majority-vote centroid");

            let counts = bit_counts::<L>(descriptors);
            Ok(Some(threshold_counts(&counts, threshold)))
        }
    }
}

/// Per-bit set counts, MSB-first within each byte.
#[cfg(not(feature = "parallel"))]
fn bit_counts<const L: usize>(descriptors: &[impl AsRef<[u8]>]) -> Vec<u32> {
    let mut counts = vec![0u32; L * bits::BITS_PER_BYTE];
    accumulate(descriptors, &mut counts);
    counts
}

#[cfg(feature = "parallel")]
fn bit_counts<const L: usize>(descriptors: &[impl AsRef<[u8]> + Sync]) -> Vec<u32> {
    let width = L * bits::BITS_PER_BYTE;

    if descriptors.len() < crate::PARALLEL_MIN_DESCRIPTORS {
        let mut counts = vec![0u32; width];
        accumulate(descriptors, &mut counts);
        return counts;
    }

    descriptors
        .par_chunks(crate::PARALLEL_MIN_DESCRIPTORS)
        .map(|chunk| {
            let mut counts = vec![0u32; width];
            accumulate(chunk, &mut counts);
            counts
        })
        .reduce(
            || vec![0u32; width],
            |mut acc, part| {
                for (a, p) in acc.iter_mut().zip(part) {
                    *a += p;
                }
                acc
            },
        )
}

fn accumulate(descriptors: &[impl AsRef<[u8]>], counts: &mut [u32]) {
    for d in descriptors {
        let bytes = d.as_ref();
        for (slot, &byte) in counts.chunks_exact_mut(bits::BITS_PER_BYTE).zip(bytes) {
            for (c, set) in slot.iter_mut().zip(bits::byte_bits(byte)) {
                *c += u32::from(set);
            }
        }
    }
}

fn threshold_counts<const L: usize>(counts: &[u32], threshold: usize) -> Descriptor<L> {
    let mut out = Descriptor::<L>::zeros();
    for (bit, &count) in counts.iter().enumerate() {
        if count as usize >= threshold {
            out.set_bit(bit, true);
        }
    }
    out
}
