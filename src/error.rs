//! Error types for descriptor operations.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DescriptorError>;

/// Errors raised at the boundary of every descriptor operation.
///
/// Validation always runs before any output is produced, so an error
/// never leaves a partially filled descriptor or buffer behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// An operand (or collection member) is not exactly `expected` bytes.
    #[error("Length mismatch at descriptor {index}: expected {expected} bytes, actual {actual}")]
    LengthMismatch {
        /// Descriptor length of the family, in bytes
        expected: usize,
        /// Length of the offending view
        actual: usize,
        /// Position of the offending view in its operand list
        index: usize,
    },

    /// A caller-supplied output buffer has the wrong number of cells.
    #[error("Size mismatch: output needs {expected} cells, buffer has {actual}")]
    SizeMismatch {
        /// Cells required (`rows * 8 * L`)
        expected: usize,
        /// Cells supplied
        actual: usize,
    },

    /// Textual descriptor could not be decoded.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Reasons a textual descriptor is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text does not hold exactly one token per byte.
    #[error("expected {expected} tokens, found {actual}")]
    TokenCount {
        /// Tokens required (`L`)
        expected: usize,
        /// Tokens present
        actual: usize,
    },

    /// A token is not a plain decimal integer.
    #[error("token {index} ({token:?}) is not a decimal integer")]
    InvalidToken {
        /// Zero-based token position
        index: usize,
        /// The token as written
        token: String,
    },

    /// A token is numeric but does not fit in a byte.
    #[error("token {index} ({token}) is outside 0..=255")]
    OutOfRange {
        /// Zero-based token position
        index: usize,
        /// The token as written
        token: String,
    },
}

impl DescriptorError {
    /// Create a LengthMismatch error.
    pub fn length_mismatch(expected: usize, actual: usize, index: usize) -> Self {
        Self::LengthMismatch {
            expected,
            actual,
            index,
        }
    }

    /// Create a SizeMismatch error.
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }
}
