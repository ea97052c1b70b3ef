//! Textual descriptor encoding.
//!
//! A descriptor is written as its `L` bytes in decimal, separated by single
//! spaces, in byte order:
//!
//! ```text
//! 255 0 0 0 ... 0
//! ```
//!
//! This is a debugging/logging format, not a storage format. Decoding is
//! strict: exactly `L` whitespace-separated tokens, each a plain decimal
//! integer in `0..=255`. Anything else is a [`ParseError`] and no descriptor
//! is produced.

use std::fmt;

use tracing::debug;

use crate::descriptor::Descriptor;
use crate::error::{ParseError, Result};

/// Encode a descriptor as space-separated decimal bytes.
///
/// ```
/// use bitvoc::{to_text, Descriptor};
///
/// let d = Descriptor::new([255, 0, 7]);
/// assert_eq!(to_text(&d), "255 0 7");
/// ```
#[must_use]
pub fn to_text<const L: usize>(d: &Descriptor<L>) -> String {
    // At most three digits plus a separator per byte.
    let mut s = String::with_capacity(L * 4);
    // Writing into a String cannot fail.
    let _ = write_text(&mut s, d.as_bytes());
    s
}

pub(crate) fn write_text<W: fmt::Write>(w: &mut W, bytes: &[u8]) -> fmt::Result {
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            w.write_char(' ')?;
        }
        write!(w, "{b}")?;
    }
    Ok(())
}

/// Decode a descriptor from its textual form.
///
/// ```
/// use bitvoc::{from_text, Descriptor};
///
/// let d: Descriptor<3> = from_text("255 0 7").unwrap();
/// assert_eq!(d.as_bytes(), &[255, 0, 7]);
///
/// assert!(from_text::<3>("255 0").is_err());
/// assert!(from_text::<3>("255 0 256").is_err());
/// ```
pub fn from_text<const L: usize>(s: &str) -> Result<Descriptor<L>> {
    parse_bytes::<L>(s).map(Descriptor::new).map_err(|e| {
        debug!(error = %e, bytes = L, "rejected textual descriptor");
        e.into()
    })
}

fn parse_bytes<const L: usize>(s: &str) -> std::result::Result<[u8; L], ParseError> {
    let actual = s.split_ascii_whitespace().count();
    if actual != L {
        return Err(ParseError::TokenCount {
            expected: L,
            actual,
        });
    }

    let mut bytes = [0u8; L];
    for (index, (slot, token)) in bytes.iter_mut().zip(s.split_ascii_whitespace()).enumerate() {
        *slot = parse_byte(index, token)?;
    }
    Ok(bytes)
}

fn parse_byte(index: usize, token: &str) -> std::result::Result<u8, ParseError> {
    // `str::parse` would also accept a leading '+'.
    if !token.bytes().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidToken {
            index,
            token: token.to_string(),
        });
    }
    token.parse::<u8>().map_err(|_| ParseError::OutOfRange {
        index,
        token: token.to_string(),
    })
}
