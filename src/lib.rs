//! Binary descriptor algebra for visual vocabularies.
//!
//! `bitvoc` provides the primitives a vocabulary-tree builder needs to
//! cluster binary feature descriptors (BRISK, ORB):
//!
//! - **Metric**: [`distance`] (Hamming)
//! - **Centroid**: [`mean`] (per-bit majority vote)
//! - **Debug text**: [`to_text`], [`from_text`]
//! - **Float expansion**: [`expand_to_floats`], [`expand_into`]
//!
//! Everything is a pure function over read-only views. Descriptors may be
//! passed as `&[u8]` rows borrowed from an extractor, as owned
//! [`Descriptor`]s, or as references to them; each view is checked to be
//! exactly `L` bytes before any work is done.
//!
//! # Descriptor families
//!
//! The length `L` is a const parameter. [`BRISK_BYTES`] (64 bytes, 512 bits)
//! and [`ORB_BYTES`] (32 bytes, 256 bits) have aliases, and
//! [`DescriptorAlgebra`] lets a builder be written once for any family.
//!
//! # Centroid rule
//!
//! A centroid bit is set when at least `ceil(N / 2)` members have it set.
//! For even `N` a tie keeps the bit.
//!
//! # Features
//!
//! - `parallel`: count centroid votes and expand rows with rayon once a
//!   collection reaches [`PARALLEL_MIN_DESCRIPTORS`]. Results are identical
//!   to the sequential path.
//!
//! # Example
//!
//! ```rust
//! use bitvoc::{distance, mean, to_text, from_text, BriskDescriptor, BRISK_BYTES};
//!
//! let mut a = [0u8; BRISK_BYTES];
//! let mut b = [0u8; BRISK_BYTES];
//! a[0] = 0xFF;
//! b[1] = 0xFF;
//!
//! assert_eq!(distance::<BRISK_BYTES>(&a, &b).unwrap(), 16);
//!
//! // Each bit is set in exactly one of two: ceil(2/2) = 1 keeps both bytes.
//! let m: BriskDescriptor = mean(&[a, b]).unwrap().unwrap();
//! assert_eq!(&m.as_bytes()[..2], &[0xFF, 0xFF]);
//!
//! let back: BriskDescriptor = from_text(&to_text(&m)).unwrap();
//! assert_eq!(back, m);
//! ```
//!
//! # References
//!
//! - Leutenegger, Chli, Siegwart (2011). "BRISK: Binary Robust Invariant
//!   Scalable Keypoints" (ICCV)
//! - Gálvez-López, Tardós (2012). "Bags of Binary Words for Fast Place
//!   Recognition in Image Sequences" (IEEE T-RO)

#![warn(missing_docs)]
#![warn(clippy::all)]

mod algebra;
pub mod bits;
mod descriptor;
mod distance;
mod error;
mod expand;
mod mean;
mod text;

pub use algebra::{BinaryAlgebra, DescriptorAlgebra};
pub use descriptor::Descriptor;
pub use distance::distance;
pub use error::{DescriptorError, ParseError, Result};
pub use expand::{expand_into, expand_to_floats, FloatMatrix};
pub use mean::{majority_threshold, mean};
pub use text::{from_text, to_text};

/// BRISK descriptor length in bytes.
pub const BRISK_BYTES: usize = 64;

/// ORB descriptor length in bytes.
pub const ORB_BYTES: usize = 32;

/// 512-bit BRISK descriptor.
pub type BriskDescriptor = Descriptor<BRISK_BYTES>;

/// 256-bit ORB descriptor.
pub type OrbDescriptor = Descriptor<ORB_BYTES>;

/// Algebra over BRISK descriptors.
pub type Brisk = BinaryAlgebra<BRISK_BYTES>;

/// Algebra over ORB descriptors.
pub type Orb = BinaryAlgebra<ORB_BYTES>;

/// Minimum collection size for the parallel paths.
///
/// Below this, thread dispatch costs more than it saves. Only consulted with
/// the `parallel` feature enabled.
pub const PARALLEL_MIN_DESCRIPTORS: usize = 256;
