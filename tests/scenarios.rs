//! End-to-end pricing scenarios for "The Little Prince" (UPC 123456, 20.25 USD).
//!
//! Each scenario is loaded from a YAML file in `fixtures/config/`, priced, and checked against the
//! rounded receipt and the printed report.

use std::{path::PathBuf, str::FromStr};

use rust_decimal::Decimal;
use rusty_money::iso::USD;
use testresult::TestResult;

use price_calculator::{
    config::CalculatorConfig,
    pricing::{Calculation, PriceCalculator},
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures/config")
        .join(name)
}

fn price_fixture(name: &str) -> TestResult<Calculation> {
    let config = CalculatorConfig::load(fixture(name))?;
    let product = config.product()?;

    Ok(PriceCalculator::from_config(&config.pricing).calculate(&product))
}

fn dec(value: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(value)
}

#[test]
fn tax_only_report_omits_discount_line() -> TestResult {
    let calculation = price_fixture("tax_only.yml")?;

    assert_eq!(
        calculation.receipt.report(),
        "Cost = 20.25 USD\nTax = 4.05 USD\nTOTAL = 24.30 USD\n"
    );

    Ok(())
}

#[test]
fn universal_discount_is_taken_off_the_taxed_price() -> TestResult {
    let calculation = price_fixture("universal_discount.yml")?;

    assert_eq!(calculation.receipt.tax_amount().amount(), dec("4.05")?);
    assert_eq!(calculation.receipt.total_discount().amount(), dec("3.04")?);
    assert_eq!(calculation.receipt.total_price().amount(), dec("21.26")?);
    assert_eq!(
        calculation.receipt.report(),
        "Cost = 20.25 USD\nTax = 4.05 USD\nDiscounts = 3.04 USD\nTOTAL = 21.26 USD\n"
    );

    Ok(())
}

#[test]
fn special_discount_applied_before_tax() -> TestResult {
    let calculation = price_fixture("special_first.yml")?;

    assert_eq!(calculation.breakdown.discounts.special, dec("1.4175")?);
    assert_eq!(calculation.breakdown.tax, dec("3.7665")?);
    assert_eq!(calculation.receipt.tax_amount().amount(), dec("3.77")?);
    assert_eq!(calculation.receipt.total_discount().amount(), dec("4.24")?);
    assert_eq!(calculation.receipt.total_price().amount(), dec("19.77")?);

    Ok(())
}

#[test]
fn additive_discounts_with_expenses() -> TestResult {
    let calculation = price_fixture("expenses_additive.yml")?;
    let mut printed = Vec::new();

    let report = calculation.receipt.write_to(&mut printed)?;

    assert_eq!(
        String::from_utf8(printed)?,
        "Cost = 20.25 USD\n\
         Tax = 4.25 USD\n\
         Discounts = 4.46 USD\n\
         Transport = 2.20 USD\n\
         Packaging = 0.20 USD\n\
         TOTAL = 22.45 USD\n"
    );
    assert_eq!(
        report,
        "Cost = 20.25 USD\nTax = 4.25 USD\nDiscounts = 4.46 USD\nTOTAL = 22.45 USD\n"
    );

    Ok(())
}

#[test]
fn multiplicative_discounts_with_expenses() -> TestResult {
    let calculation = price_fixture("expenses_multiplicative.yml")?;

    assert_eq!(calculation.breakdown.discounts.universal, dec("3.0375")?);
    assert_eq!(calculation.breakdown.discounts.special, dec("1.2049")?);
    assert_eq!(calculation.breakdown.expenses, dec("2.4025")?);
    assert_eq!(calculation.receipt.total_discount().amount(), dec("4.24")?);
    assert_eq!(calculation.receipt.total_expenses().amount(), dec("2.40")?);
    assert_eq!(calculation.receipt.total_price().amount(), dec("22.66")?);

    Ok(())
}

#[test]
fn multiplicative_discount_is_never_larger_than_additive() -> TestResult {
    let additive = price_fixture("expenses_additive.yml")?;
    let multiplicative = price_fixture("expenses_multiplicative.yml")?;

    assert!(multiplicative.breakdown.combined_discount <= additive.breakdown.combined_discount);

    Ok(())
}

#[test]
fn absolute_cap_with_labelled_price() -> TestResult {
    let calculation = price_fixture("absolute_cap.yml")?;

    assert_eq!(calculation.receipt.starting_price().currency(), USD);
    assert_eq!(calculation.breakdown.combined_discount, dec("4.455")?);
    assert_eq!(calculation.receipt.total_discount().amount(), dec("4.00")?);
    assert_eq!(calculation.receipt.total_price().amount(), dec("20.50")?);
    assert_eq!(
        calculation.receipt.report(),
        "Cost = 20.25 USD\nTax = 4.25 USD\nDiscounts = 4.00 USD\nTOTAL = 20.50 USD\n"
    );

    Ok(())
}

#[test]
fn zero_tax_line_is_omitted() -> TestResult {
    let mut config = CalculatorConfig::load(fixture("tax_only.yml"))?;
    config.pricing.tax_rate = 0;

    let calculation = PriceCalculator::from_config(&config.pricing).calculate(&config.product()?);

    assert_eq!(
        calculation.receipt.report(),
        "Cost = 20.25 USD\nTOTAL = 20.25 USD\n"
    );

    Ok(())
}

#[test]
fn table_report_lists_every_line() -> TestResult {
    let calculation = price_fixture("expenses_additive.yml")?;
    let mut printed = Vec::new();

    calculation.receipt.write_table(&mut printed)?;

    let table = String::from_utf8(printed)?;

    for label in ["Cost", "Tax", "Discounts", "Transport", "Packaging", "TOTAL"] {
        assert!(table.contains(label), "missing {label} in\n{table}");
    }
    assert!(table.contains("22.45 USD"));

    Ok(())
}
