//! Tax

use rust_decimal::Decimal;

use crate::{rates::Rate, rounding::amount_from_percentage};

/// A flat tax rate applied to a price base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tax {
    rate: Rate,
}

impl Tax {
    /// Create a tax, clamping the rate to 100%.
    pub fn new(rate: u16) -> Self {
        Self {
            rate: Rate::new(rate),
        }
    }

    /// The tax rate
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Tax owed on `base`, at internal precision.
    pub fn amount_on(&self, base: Decimal) -> Decimal {
        amount_from_percentage(self.rate, base)
    }
}
