//! Pricing
//!
//! [`PriceCalculator`] turns a product's starting price into a final price in three phases:
//!
//! 1. Precedence: tax and both discount amounts are calculated on bases chosen by
//!    [`Precedence`].
//! 2. Combination: discounts are merged according to [`CombineType`] and limited by the
//!    [`DiscountCap`].
//! 3. Expenses: the product's [`CostSet`] is added, always on the original starting price.
//!
//! [`CostSet`]: crate::expenses::CostSet

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    caps::DiscountCap,
    combining::CombineType,
    config::PricingConfig,
    discounts::{Discount, DiscountAmounts, Precedence},
    money::Money,
    products::Product,
    receipt::Receipt,
    rounding::{REPORT_PRECISION, amount_from_percentage, round_to},
    tax::Tax,
};

/// Internal amounts of a calculation, at internal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakdown {
    /// Tax amount
    pub tax: Decimal,

    /// Universal and special discount amounts after the combination phase
    pub discounts: DiscountAmounts,

    /// Sum of both discounts before capping
    pub combined_discount: Decimal,

    /// Discount actually taken off after capping
    pub total_discount: Decimal,

    /// Sum of all expenses
    pub expenses: Decimal,

    /// Final price before report rounding
    pub total_price: Decimal,
}

/// Result of pricing one product.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Rounded, reportable result
    pub receipt: Receipt,

    /// Unrounded working values
    pub breakdown: Breakdown,
}

/// Prices products for a fixed tax, discount, combination and cap configuration.
///
/// Calculating never mutates the calculator, so one instance can price any number of products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceCalculator {
    tax: Tax,
    discount: Discount,
    combine_type: CombineType,
    cap: DiscountCap,
}

impl PriceCalculator {
    /// Create a new calculator.
    pub fn new(tax: Tax, discount: Discount, combine_type: CombineType, cap: DiscountCap) -> Self {
        Self {
            tax,
            discount,
            combine_type,
            cap,
        }
    }

    /// Create a calculator from loaded configuration.
    pub fn from_config(config: &PricingConfig) -> Self {
        Self::new(
            config.tax(),
            config.discount(),
            config.combine_type(),
            config.cap(),
        )
    }

    /// Tax configuration
    pub fn tax(&self) -> Tax {
        self.tax
    }

    /// Discount configuration
    pub fn discount(&self) -> Discount {
        self.discount
    }

    /// Discount combination type
    pub fn combine_type(&self) -> CombineType {
        self.combine_type
    }

    /// Discount cap
    pub fn cap(&self) -> DiscountCap {
        self.cap
    }

    /// Calculate the final price of `product`.
    #[tracing::instrument(
        name = "calculate",
        level = "debug",
        skip_all,
        fields(product = %product.name(), upc = %product.upc())
    )]
    pub fn calculate(&self, product: &Product) -> Calculation {
        let starting_price = product.price();
        let start = starting_price.amount();
        let special_applies = self.discount.special.applies_to(product);

        let (tax, discounts) = self.apply_precedence(start, special_applies);

        debug!(
            %tax,
            universal = %discounts.universal,
            special = %discounts.special,
            special_applies,
            precedence = ?self.discount.precedence,
            "precedence phase"
        );

        let discounts = self.combine(start, discounts, special_applies);
        let combined_discount = discounts.combined();
        let total_discount = self.cap.calculate_cap(&starting_price, combined_discount);

        debug!(
            combine_type = ?self.combine_type,
            %combined_discount,
            %total_discount,
            "combination phase"
        );

        let expenses = product.costs().calculate_expense(&starting_price).amount();
        let total_price = start
            .saturating_add(tax)
            .saturating_sub(total_discount)
            .saturating_add(expenses);

        debug!(%expenses, %total_price, "expense phase");

        let currency = starting_price.currency();
        let reported = |amount: Decimal| Money::new(currency, round_to(amount, REPORT_PRECISION));

        let receipt = Receipt::new(
            reported(start),
            reported(tax),
            reported(total_discount),
            reported(expenses),
            reported(total_price),
            product.costs().clone(),
        );

        Calculation {
            receipt,
            breakdown: Breakdown {
                tax,
                discounts,
                combined_discount,
                total_discount,
                expenses,
                total_price,
            },
        }
    }

    /// Tax and discount amounts, each on the base selected by the precedence.
    fn apply_precedence(&self, start: Decimal, special_applies: bool) -> (Decimal, DiscountAmounts) {
        let Discount {
            universal, special, ..
        } = self.discount;

        let special_on = |base: Decimal| {
            if special_applies {
                amount_from_percentage(special.rate(), base)
            } else {
                Decimal::ZERO
            }
        };

        match self.discount.precedence {
            Precedence::None => {
                let tax = self.tax.amount_on(start);
                let amounts = DiscountAmounts {
                    universal: amount_from_percentage(universal.rate(), start),
                    special: special_on(start),
                };

                (tax, amounts)
            }
            Precedence::UniversalFirst => {
                let universal = amount_from_percentage(universal.rate(), start);
                let base = start - universal;
                let tax = self.tax.amount_on(base);

                (
                    tax,
                    DiscountAmounts {
                        universal,
                        special: special_on(base),
                    },
                )
            }
            Precedence::SpecialFirst => {
                let special = special_on(start);
                let base = start - special;
                let tax = self.tax.amount_on(base);

                (
                    tax,
                    DiscountAmounts {
                        universal: amount_from_percentage(universal.rate(), base),
                        special,
                    },
                )
            }
        }
    }

    /// Discount amounts after applying the combination type.
    fn combine(
        &self,
        start: Decimal,
        amounts: DiscountAmounts,
        special_applies: bool,
    ) -> DiscountAmounts {
        match self.combine_type {
            CombineType::Additive => amounts,
            CombineType::Multiplicative if special_applies => DiscountAmounts {
                special: amount_from_percentage(
                    self.discount.special.rate(),
                    start - amounts.universal,
                ),
                ..amounts
            },
            CombineType::Multiplicative => amounts,
        }
    }
}
