//! Descriptor algebra as a stateless capability.
//!
//! A vocabulary builder is written once against [`DescriptorAlgebra`] and
//! instantiated per descriptor family. Binary families differ only in their
//! length, so a single zero-sized implementor, [`BinaryAlgebra`], covers
//! all of them through a const parameter.
//!
//! ```rust
//! use bitvoc::{Brisk, DescriptorAlgebra};
//!
//! fn nearest<F: DescriptorAlgebra>(query: &F::Descriptor, centers: &[F::Descriptor]) -> Option<usize> {
//!     centers
//!         .iter()
//!         .enumerate()
//!         .filter_map(|(i, c)| F::distance(query.as_ref(), c.as_ref()).ok().map(|d| (i, d)))
//!         .min_by_key(|&(_, d)| d)
//!         .map(|(i, _)| i)
//! }
//!
//! let centers = [bitvoc::BriskDescriptor::zeros(), bitvoc::BriskDescriptor::new([0xFF; 64])];
//! let mut q = [0u8; 64];
//! q[0] = 0xFF;
//! let q = bitvoc::BriskDescriptor::new(q);
//! assert_eq!(nearest::<Brisk>(&q, &centers), Some(0));
//! ```

use std::marker::PhantomData;

use crate::descriptor::Descriptor;
use crate::error::Result;
use crate::expand::FloatMatrix;

/// Operations a vocabulary builder needs from a descriptor family.
pub trait DescriptorAlgebra {
    /// Owned descriptor type of the family.
    type Descriptor: AsRef<[u8]> + Clone + Sync;

    /// Descriptor length in bytes.
    const LEN: usize;

    /// Dissimilarity between two descriptors.
    fn distance(a: &[u8], b: &[u8]) -> Result<u32>;

    /// Cluster representative; `None` for an empty collection.
    fn mean<D: AsRef<[u8]> + Sync>(descriptors: &[D]) -> Result<Option<Self::Descriptor>>;

    /// Debug text encoding.
    fn to_text(d: &Self::Descriptor) -> String;

    /// Inverse of [`to_text`](Self::to_text).
    fn from_text(s: &str) -> Result<Self::Descriptor>;

    /// One `f32` row per descriptor.
    fn to_floats<D: AsRef<[u8]> + Sync>(descriptors: &[D]) -> Result<FloatMatrix>;
}

/// Binary descriptors of `L` bytes under Hamming distance and
/// majority-vote centroids.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryAlgebra<const L: usize> {
    _family: PhantomData<[u8; L]>,
}

impl<const L: usize> DescriptorAlgebra for BinaryAlgebra<L> {
    type Descriptor = Descriptor<L>;

    const LEN: usize = L;

    fn distance(a: &[u8], b: &[u8]) -> Result<u32> {
        crate::distance::<L>(a, b)
    }

    fn mean<D: AsRef<[u8]> + Sync>(descriptors: &[D]) -> Result<Option<Descriptor<L>>> {
        crate::mean::<L>(descriptors)
    }

    fn to_text(d: &Descriptor<L>) -> String {
        crate::to_text(d)
    }

    fn from_text(s: &str) -> Result<Descriptor<L>> {
        crate::from_text::<L>(s)
    }

    fn to_floats<D: AsRef<[u8]> + Sync>(descriptors: &[D]) -> Result<FloatMatrix> {
        crate::expand_to_floats::<L>(descriptors)
    }
}
