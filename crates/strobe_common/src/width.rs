//! Validated counter bit widths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The widest counter the model supports (state is packed in a `u64`).
pub const MAX_BIT_WIDTH: u32 = 64;

/// A validated counter bit width in the range `1..=64`.
///
/// Constructing a `BitWidth` is the single point where width validation
/// happens; everything downstream (the counter model, the generator) can
/// rely on the range being legal and stays infallible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BitWidth(u32);

impl BitWidth {
    /// Creates a validated bit width.
    ///
    /// Fails with [`WidthError`] if `bits` is zero or exceeds
    /// [`MAX_BIT_WIDTH`].
    pub fn new(bits: u32) -> Result<Self, WidthError> {
        if bits == 0 || bits > MAX_BIT_WIDTH {
            return Err(WidthError { bits });
        }
        Ok(Self(bits))
    }

    /// Returns the width in bits.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Returns the largest value representable at this width.
    pub fn max_value(&self) -> u64 {
        u64::MAX >> (MAX_BIT_WIDTH - self.0)
    }

    /// Returns the mask selecting the low `width` bits of a `u64`.
    ///
    /// Numerically identical to [`max_value`](Self::max_value).
    pub fn mask(&self) -> u64 {
        self.max_value()
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = WidthError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<BitWidth> for u32 {
    fn from(width: BitWidth) -> u32 {
        width.0
    }
}

/// Error returned for a bit width outside `1..=64`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bit width {bits}: must be between 1 and 64")]
pub struct WidthError {
    /// The rejected width value.
    pub bits: u32,
}
