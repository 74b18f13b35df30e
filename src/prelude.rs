//! Price Calculator prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    caps::DiscountCap,
    combining::CombineType,
    config::{CalculatorConfig, ConfigError, PricingConfig, ProductConfig},
    discounts::{Discount, DiscountAmounts, Precedence, SpecialDiscount, UniversalDiscount},
    expenses::{CostSet, Expense, ExpenseKind},
    money::{Money, currency_from_code},
    pricing::{Breakdown, Calculation, PriceCalculator},
    products::{Product, ProductError, Upc},
    rates::Rate,
    receipt::{Receipt, ReceiptError, ReportLine},
    rounding::{amount_from_percentage, round_to},
    tax::Tax,
};
