//! Dense float expansion of binary descriptors.
//!
//! Continuous-space clustering (k-means over `f32` vectors, for example)
//! cannot consume packed bits, so each descriptor is expanded into one row
//! of `8 * L` cells: `1.0` where the bit is set, `0.0` where it is clear,
//! MSB-first within each byte.
//!
//! ```text
//! byte 0 = 0b1010_0000  →  row[0..8] = [1, 0, 1, 0, 0, 0, 0, 0]
//! ```
//!
//! Row `i` of the output is descriptor `i` of the input.
//!
//! # Output sizing
//!
//! [`expand_to_floats`] allocates and returns a correctly sized
//! [`FloatMatrix`]. [`expand_into`] writes into a caller buffer instead,
//! after checking its length is exactly `N * 8 * L`; a buffer of any other
//! size is rejected with `SizeMismatch` and left untouched.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::bits::{self, BITS_PER_BYTE};
use crate::descriptor::check_views;
use crate::error::{DescriptorError, Result};

/// Row-major `rows x cols` matrix of `f32`.
///
/// # Example
///
/// ```rust
/// use bitvoc::expand_to_floats;
///
/// let m = expand_to_floats::<1>(&[[0b1100_0000u8]]).unwrap();
/// assert_eq!(m.rows(), 1);
/// assert_eq!(m.cols(), 8);
/// assert_eq!(m.row(0), &[1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FloatMatrix {
    /// Data in row-major order: data[r * cols + c]
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl FloatMatrix {
    /// Number of rows (descriptors).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (bits per descriptor).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Row `r`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows()`.
    #[inline]
    pub fn row(&self, r: usize) -> &[f32] {
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Value at (row, col), or `None` out of bounds.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<f32> {
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(self.data[r * self.cols + c])
    }

    /// Iterate rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> {
        // chunks_exact(0) panics; a zero-width matrix has no data anyway.
        self.data.chunks_exact(self.cols.max(1))
    }

    /// Flat row-major data.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consume into flat row-major data.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

/// Expand descriptors into a freshly allocated `N x 8L` matrix.
///
/// Empty input yields a zero-row matrix. Every member is length-checked
/// before any row is written.
pub fn expand_to_floats<const L: usize>(
    descriptors: &[impl AsRef<[u8]> + Sync],
) -> Result<FloatMatrix> {
    check_views::<L, _>(descriptors)?;

    let cols = L * BITS_PER_BYTE;
    let mut data = vec![0.0f32; descriptors.len() * cols];
    fill_rows(descriptors, &mut data, cols);

    trace!(rows = descriptors.len(), cols, "expanded descriptors to floats");
    Ok(FloatMatrix {
        data,
        rows: descriptors.len(),
        cols,
    })
}

/// Expand descriptors into a caller-provided row-major buffer.
///
/// `out.len()` must equal `descriptors.len() * 8 * L`; otherwise this
/// returns `SizeMismatch` and writes nothing.
///
/// ```
/// use bitvoc::{expand_into, DescriptorError};
///
/// let descs = [[0x80u8], [0x01u8]];
/// let mut out = [0.0f32; 16];
/// expand_into::<1>(&descs, &mut out).unwrap();
/// assert_eq!(out[0], 1.0);
/// assert_eq!(out[15], 1.0);
///
/// let mut short = [0.0f32; 15];
/// assert!(matches!(
///     expand_into::<1>(&descs, &mut short),
///     Err(DescriptorError::SizeMismatch { expected: 16, actual: 15 })
/// ));
/// ```
pub fn expand_into<const L: usize>(
    descriptors: &[impl AsRef<[u8]> + Sync],
    out: &mut [f32],
) -> Result<()> {
    check_views::<L, _>(descriptors)?;

    let cols = L * BITS_PER_BYTE;
    let expected = descriptors.len() * cols;
    if out.len() != expected {
        debug!(expected, actual = out.len(), "rejected float output buffer");
        return Err(DescriptorError::size_mismatch(expected, out.len()));
    }

    fill_rows(descriptors, out, cols);
    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn fill_rows(descriptors: &[impl AsRef<[u8]>], out: &mut [f32], cols: usize) {
    if cols == 0 {
        return;
    }
    for (row, d) in out.chunks_exact_mut(cols).zip(descriptors) {
        fill_row(d.as_ref(), row);
    }
}

#[cfg(feature = "parallel")]
fn fill_rows(descriptors: &[impl AsRef<[u8]> + Sync], out: &mut [f32], cols: usize) {
    if cols == 0 {
        return;
    }
    if descriptors.len() < crate::PARALLEL_MIN_DESCRIPTORS {
        for (row, d) in out.chunks_exact_mut(cols).zip(descriptors) {
            fill_row(d.as_ref(), row);
        }
        return;
    }
    out.par_chunks_exact_mut(cols)
        .zip(descriptors.par_iter())
        .for_each(|(row, d)| fill_row(d.as_ref(), row));
}

fn fill_row(bytes: &[u8], row: &mut [f32]) {
    for (cells, &byte) in row.chunks_exact_mut(BITS_PER_BYTE).zip(bytes) {
        for (cell, set) in cells.iter_mut().zip(bits::byte_bits(byte)) {
            *cell = if set { 1.0 } else { 0.0 };
        }
    }
}
