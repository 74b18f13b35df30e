//! Rates

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

/// A whole-number percentage between 0 and 100.
///
/// Values above 100 are clamped on construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rate(u16);

impl Rate {
    /// Largest valid rate.
    pub const MAX: u16 = 100;

    /// A rate of zero percent.
    pub const ZERO: Rate = Rate(0);

    /// Create a new rate, clamping values above [`Rate::MAX`].
    #[must_use]
    pub fn new(value: u16) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Percentage points (0..=100).
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Returns `true` for a zero rate.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The rate as a fractional percentage (15 -> 0.15).
    #[must_use]
    pub fn as_percentage(self) -> Percentage {
        Percentage::from(Decimal::from(self.0) / Decimal::ONE_HUNDRED)
    }

    /// Unrounded share of `base` this rate represents.
    #[must_use]
    pub fn of(self, base: Decimal) -> Decimal {
        self.as_percentage() * base
    }
}

impl From<u16> for Rate {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
