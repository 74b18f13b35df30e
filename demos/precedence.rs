//! Precedence Example
//!
//! Prices the reference product under every precedence and combination policy and prints the
//! results side by side.

use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;
use rusty_money::iso::USD;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use price_calculator::prelude::*;

/// Precedence Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let product = Product::new(
        "The Little Prince",
        123_456,
        Money::new(USD, Decimal::from_str("20.25")?),
        CostSet::new([
            Expense::fixed("Transport", Decimal::from_str("2.2")?),
            Expense::percentage("Packaging", Decimal::ONE),
        ]),
    )?;

    let mut builder = Builder::default();

    builder.push_record([
        "Precedence",
        "Combination",
        "Tax",
        "Universal",
        "Special",
        "Discounts",
        "TOTAL",
    ]);

    for precedence in [
        Precedence::None,
        Precedence::UniversalFirst,
        Precedence::SpecialFirst,
    ] {
        for combine_type in [CombineType::Additive, CombineType::Multiplicative] {
            let calculator = PriceCalculator::new(
                Tax::new(21),
                Discount::new(
                    UniversalDiscount::new(15),
                    SpecialDiscount::new(123_456, 7),
                    precedence,
                ),
                combine_type,
                DiscountCap::default(),
            );

            let Calculation { receipt, breakdown } = calculator.calculate(&product);

            builder.push_record([
                format!("{precedence:?}"),
                format!("{combine_type:?}"),
                receipt.tax_amount().to_string(),
                breakdown.discounts.universal.to_string(),
                breakdown.discounts.special.to_string(),
                receipt.total_discount().to_string(),
                receipt.total_price().to_string(),
            ]);
        }
    }

    let mut table = builder.build();

    table.with(Style::rounded());
    table.modify(Columns::new(2..), Alignment::right());

    println!("{table}");

    Ok(())
}
