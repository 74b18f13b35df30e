//! Discount Combination

/// How the universal and special discounts are combined before capping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CombineType {
    /// Both discounts are calculated independently and summed.
    #[default]
    Additive,

    /// The special discount is calculated on the price after the universal discount.
    ///
    /// This recalculation always wins over the amount produced by [`Precedence`], including
    /// [`Precedence::SpecialFirst`] where tax was already based on the price after the special
    /// discount on the full starting price.
    ///
    /// [`Precedence`]: crate::discounts::Precedence
    /// [`Precedence::SpecialFirst`]: crate::discounts::Precedence::SpecialFirst
    Multiplicative,
}

impl CombineType {
    /// Map a configuration selector to a combination type.
    ///
    /// `1` is multiplicative; anything else is additive.
    pub fn from_selector(selector: u16) -> Self {
        match selector {
            1 => Self::Multiplicative,
            _ => Self::Additive,
        }
    }
}
