//! Discount Caps
//!
//! A cap limits the combined discount for a product, either to an absolute amount or to a
//! percentage of the starting price. Invalid (zero or negative) cap values are not an error: they
//! are replaced with a value large enough to never bind.

use rust_decimal::Decimal;

use crate::money::Money;

/// Absolute cap used when the configured value is not positive.
const UNBOUNDED_ABSOLUTE_CAP: i64 = 1_000_000;

/// Ceiling applied to the combined discount amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountCap {
    /// Cap the discount at a fixed amount in the product's currency.
    Absolute(Decimal),

    /// Cap the discount at percentage points of the starting price.
    Percentage(Decimal),
}

impl DiscountCap {
    /// Cap at an absolute amount. Values `<= 0` effectively remove the cap.
    pub fn absolute(value: Decimal) -> Self {
        if value <= Decimal::ZERO {
            Self::Absolute(Decimal::from(UNBOUNDED_ABSOLUTE_CAP))
        } else {
            Self::Absolute(value)
        }
    }

    /// Cap at a percentage of the starting price. Values `<= 0` become 100%.
    pub fn percentage(value: Decimal) -> Self {
        if value <= Decimal::ZERO {
            Self::Percentage(Decimal::ONE_HUNDRED)
        } else {
            Self::Percentage(value)
        }
    }

    /// Map a configuration selector and value to a cap.
    ///
    /// `1` is a percentage cap and `2` an absolute cap. Any other selector means no cap, which is
    /// represented as 100% of the starting price.
    pub fn from_selector(cap_type: u16, value: Decimal) -> Self {
        match cap_type {
            1 => Self::percentage(value),
            2 => Self::absolute(value),
            _ => Self::default(),
        }
    }

    /// Limit `proposed_discount` to this cap.
    ///
    /// A percentage ceiling too large to represent never binds.
    pub fn calculate_cap(&self, starting_price: &Money, proposed_discount: Decimal) -> Decimal {
        let ceiling = match *self {
            Self::Absolute(value) => Some(value),
            Self::Percentage(percent) => {
                (percent / Decimal::ONE_HUNDRED).checked_mul(starting_price.amount())
            }
        };

        ceiling.map_or(proposed_discount, |ceiling| proposed_discount.min(ceiling))
    }
}

impl Default for DiscountCap {
    fn default() -> Self {
        Self::Percentage(Decimal::ONE_HUNDRED)
    }
}
