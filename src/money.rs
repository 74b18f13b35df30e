//! Money
//!
//! Monetary values are a non-negative [`Decimal`] amount labelled with an ISO currency. The
//! currency is carried through every calculation unchanged; amounts are never converted.

use std::fmt;

use rust_decimal::Decimal;
use rusty_money::iso::{self, Currency};

use crate::{
    config::ConfigError,
    rounding::{INTERNAL_PRECISION, REPORT_PRECISION, round_to},
};

/// Currencies selectable through configuration, indexed by their selector code.
pub static SUPPORTED_CURRENCIES: [&Currency; 4] = [iso::USD, iso::GBP, iso::JPY, iso::EUR];

/// Look up a currency by its configuration selector.
///
/// `0` is USD, `1` GBP, `2` JPY and `3` EUR. Any other code falls back to USD.
pub fn currency_from_code(code: u16) -> &'static Currency {
    SUPPORTED_CURRENCIES
        .get(usize::from(code))
        .copied()
        .unwrap_or(iso::USD)
}

/// Look up a supported currency by its ISO alpha code.
pub fn currency_from_iso(code: &str) -> Option<&'static Currency> {
    SUPPORTED_CURRENCIES
        .iter()
        .copied()
        .find(|currency| currency.iso_alpha_code.eq_ignore_ascii_case(code))
}

/// An amount of money in a given currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money {
    currency: &'static Currency,
    amount: Decimal,
}

impl Money {
    /// Create a new monetary value.
    ///
    /// Negative amounts clamp to zero and the amount is rounded to internal precision.
    pub fn new(currency: &'static Currency, amount: Decimal) -> Self {
        let amount = if amount.is_sign_negative() {
            Decimal::ZERO
        } else {
            round_to(amount, INTERNAL_PRECISION)
        };

        Self { currency, amount }
    }

    /// Zero in the given currency.
    pub fn zero(currency: &'static Currency) -> Self {
        Self {
            currency,
            amount: Decimal::ZERO,
        }
    }

    /// The amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency label.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Returns `true` if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} {}",
            round_to(self.amount, REPORT_PRECISION),
            self.currency.iso_alpha_code
        )
    }
}

/// Parse price string (e.g., "20.25 USD") into a [`Money`] value.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY", if the amount is not a
/// decimal number, or if the currency is not one of [`SUPPORTED_CURRENCIES`].
pub fn parse_price(s: &str) -> Result<Money, ConfigError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ConfigError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| ConfigError::InvalidPrice(s.to_string()))?;

    let currency =
        currency_from_iso(code).ok_or_else(|| ConfigError::UnknownCurrency(code.to_string()))?;

    Ok(Money::new(currency, amount))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn negative_amounts_clamp_to_zero() -> TestResult {
        let money = Money::new(iso::USD, Decimal::from_str("-3.5")?);

        assert!(money.is_zero());

        Ok(())
    }

    #[test]
    fn amounts_are_stored_at_internal_precision() -> TestResult {
        let money = Money::new(iso::GBP, Decimal::from_str("2.824875")?);

        assert_eq!(money.amount(), Decimal::from_str("2.8249")?);
        assert_eq!(money.currency(), iso::GBP);

        Ok(())
    }

    #[test]
    fn display_uses_two_decimals_and_iso_code() -> TestResult {
        assert_eq!(
            Money::new(iso::USD, Decimal::from_str("24.3")?).to_string(),
            "24.30 USD"
        );
        assert_eq!(
            Money::new(iso::EUR, Decimal::from_str("4.455")?).to_string(),
            "4.46 EUR"
        );
        assert_eq!(Money::zero(iso::JPY).to_string(), "0.00 JPY");

        Ok(())
    }

    #[test]
    fn currency_selector_maps_known_codes() {
        assert_eq!(currency_from_code(0), iso::USD);
        assert_eq!(currency_from_code(1), iso::GBP);
        assert_eq!(currency_from_code(2), iso::JPY);
        assert_eq!(currency_from_code(3), iso::EUR);
    }

    #[test]
    fn currency_selector_out_of_range_falls_back_to_usd() {
        assert_eq!(currency_from_code(7), iso::USD);
        assert_eq!(currency_from_code(u16::MAX), iso::USD);
    }

    #[test]
    fn parse_price_reads_amount_and_currency() -> TestResult {
        let money = parse_price("20.25 GBP")?;

        assert_eq!(money, Money::new(iso::GBP, Decimal::from_str("20.25")?));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_malformed_input() {
        assert!(matches!(
            parse_price("20.25"),
            Err(ConfigError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("abc USD"),
            Err(ConfigError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("20.25 USD extra"),
            Err(ConfigError::InvalidPrice(_))
        ));
    }

    #[test]
    fn parse_price_rejects_unsupported_currency() {
        assert!(matches!(
            parse_price("20.25 CHF"),
            Err(ConfigError::UnknownCurrency(code)) if code == "CHF"
        ));
    }
}
