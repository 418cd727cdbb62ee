//! Whole-rupiah price type.
//!
//! The shop prices everything in whole rupiah; there is no fractional
//! currency unit anywhere in the catalog, so the amount is a plain
//! non-negative integer rather than a decimal.

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A non-negative amount of whole rupiah.
///
/// Construction clamps negative amounts to zero, so every `Price` in the
/// system satisfies the non-negativity invariant by type.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A price of zero rupiah.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole-rupiah amount, clamping negatives to zero.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        if amount < 0 { Self(0) } else { Self(amount) }
    }

    /// Get the underlying amount in whole rupiah.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Multiply by a line quantity, saturating on overflow.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
