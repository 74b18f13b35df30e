//! Discounts
//!
//! A [`Discount`] combines a universal discount, which applies to every product, with a special
//! discount that only applies to the product carrying a given UPC. [`Precedence`] decides which
//! of the two, if any, is taken off the price before tax is calculated.

use rust_decimal::Decimal;

use crate::{products::Product, rates::Rate};

/// Which discount is applied to the price base before tax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Precedence {
    /// Tax and both discounts are calculated on the starting price.
    #[default]
    None,

    /// The universal discount is taken off before tax and the special discount are calculated.
    UniversalFirst,

    /// The special discount is taken off before tax and the universal discount are calculated.
    SpecialFirst,
}

impl Precedence {
    /// Map a configuration selector to a precedence.
    ///
    /// `1` is universal-first, `2` special-first; anything else means no precedence.
    pub fn from_selector(selector: u16) -> Self {
        match selector {
            1 => Self::UniversalFirst,
            2 => Self::SpecialFirst,
            _ => Self::None,
        }
    }
}

/// Discount applied to every product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniversalDiscount {
    rate: Rate,
}

impl UniversalDiscount {
    /// Create a universal discount, clamping the rate to 100%.
    pub fn new(rate: u16) -> Self {
        Self {
            rate: Rate::new(rate),
        }
    }

    /// Discount rate
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

/// Discount applied only to the product with a matching UPC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialDiscount {
    upc: u64,
    rate: Rate,
}

impl SpecialDiscount {
    /// Create a special discount. Negative UPCs clamp to zero and the rate clamps to 100%.
    pub fn new(upc: i64, rate: u16) -> Self {
        Self {
            upc: u64::try_from(upc).unwrap_or(0),
            rate: Rate::new(rate),
        }
    }

    /// Targeted UPC
    pub fn upc(&self) -> u64 {
        self.upc
    }

    /// Discount rate
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Returns `true` if this discount targets `product`.
    pub fn applies_to(&self, product: &Product) -> bool {
        self.upc == product.upc().value()
    }
}

/// Discount configuration for a calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Discount {
    /// Discount for every product
    pub universal: UniversalDiscount,

    /// Discount for one UPC
    pub special: SpecialDiscount,

    /// Interaction with tax
    pub precedence: Precedence,
}

impl Discount {
    /// Create a new discount configuration.
    pub fn new(
        universal: UniversalDiscount,
        special: SpecialDiscount,
        precedence: Precedence,
    ) -> Self {
        Self {
            universal,
            special,
            precedence,
        }
    }
}

/// Discount amounts derived for one product, at internal precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscountAmounts {
    /// Universal discount amount
    pub universal: Decimal,

    /// Special discount amount, zero when the UPC does not match
    pub special: Decimal,
}

impl DiscountAmounts {
    /// Uncapped sum of both discounts.
    pub fn combined(&self) -> Decimal {
        self.universal.saturating_add(self.special)
    }
}
