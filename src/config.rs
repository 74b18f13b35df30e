//! Configuration
//!
//! Pricing configuration is loaded once at start-up, from CLI flags and environment variables or
//! from a YAML file, and then passed explicitly to the calculator.

use std::{fs, path::Path};

use clap::Args;
use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::{
    caps::DiscountCap,
    combining::CombineType,
    discounts::{Discount, Precedence, SpecialDiscount, UniversalDiscount},
    expenses::{CostSet, Expense},
    money::{Money, currency_from_code, parse_price},
    products::{Product, ProductError},
    tax::Tax,
};

/// Description of the fixed expense line.
pub const FIXED_EXPENSE_DESCRIPTION: &str = "Transport";

/// Description of the percentage expense line.
pub const PERCENTAGE_EXPENSE_DESCRIPTION: &str = "Packaging";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading a configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The configured product could not be created
    #[error(transparent)]
    Product(#[from] ProductError),
}

/// Tax, discount, cap, currency and expense settings.
#[derive(Debug, Clone, PartialEq, Eq, Args, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    /// Tax rate in percent (clamped to 100)
    #[arg(long, env = "TAX_RATE", default_value_t = 20)]
    pub tax_rate: u16,

    /// Universal discount rate in percent
    #[arg(long, env = "UNIVERSAL_DISCOUNT_RATE", default_value_t = 0)]
    pub universal_discount_rate: u16,

    /// Special discount rate in percent
    #[arg(long, env = "SPECIAL_DISCOUNT_RATE", default_value_t = 0)]
    pub special_discount_rate: u16,

    /// UPC the special discount applies to
    #[arg(
        long,
        env = "SPECIAL_DISCOUNT_UPC",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub special_discount_upc: i64,

    /// Discount applied before tax (0 none, 1 universal, 2 special)
    #[arg(long, env = "DISCOUNT_TAKES_PRECEDENCE", default_value_t = 0)]
    pub discount_takes_precedence: u16,

    /// Discount cap type (0 none, 1 percentage, 2 absolute)
    #[arg(long, env = "DISCOUNT_CAP_TYPE", default_value_t = 0)]
    pub discount_cap_type: u16,

    /// Discount cap value
    #[arg(
        long,
        env = "CAP_VALUE",
        default_value = "0",
        allow_negative_numbers = true
    )]
    pub cap_value: Decimal,

    /// Currency (0 USD, 1 GBP, 2 JPY, 3 EUR)
    #[arg(long, env = "CURRENCY", default_value_t = 0)]
    pub currency: u16,

    /// Discount combination (0 additive, 1 multiplicative)
    #[arg(long, env = "COMBINE_TYPE", default_value_t = 0)]
    pub combine_type: u16,

    /// Packaging expense in percent of the price
    #[arg(
        long,
        env = "COST_PERCENTAGE",
        default_value = "0",
        allow_negative_numbers = true
    )]
    pub cost_percentage: Decimal,

    /// Transport expense as an absolute amount
    #[arg(
        long,
        env = "COST_ABSOLUTE",
        default_value = "0",
        allow_negative_numbers = true
    )]
    pub cost_absolute: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 20,
            universal_discount_rate: 0,
            special_discount_rate: 0,
            special_discount_upc: 0,
            discount_takes_precedence: 0,
            discount_cap_type: 0,
            cap_value: Decimal::ZERO,
            currency: 0,
            combine_type: 0,
            cost_percentage: Decimal::ZERO,
            cost_absolute: Decimal::ZERO,
        }
    }
}

impl PricingConfig {
    /// Configured tax
    pub fn tax(&self) -> Tax {
        Tax::new(self.tax_rate)
    }

    /// Configured discounts and precedence
    pub fn discount(&self) -> Discount {
        Discount::new(
            UniversalDiscount::new(self.universal_discount_rate),
            SpecialDiscount::new(self.special_discount_upc, self.special_discount_rate),
            self.precedence(),
        )
    }

    /// Configured precedence
    pub fn precedence(&self) -> Precedence {
        Precedence::from_selector(self.discount_takes_precedence)
    }

    /// Configured discount cap
    pub fn cap(&self) -> DiscountCap {
        DiscountCap::from_selector(self.discount_cap_type, self.cap_value)
    }

    /// Configured combination type
    pub fn combine_type(&self) -> CombineType {
        CombineType::from_selector(self.combine_type)
    }

    /// Default currency
    pub fn currency(&self) -> &'static Currency {
        currency_from_code(self.currency)
    }

    /// The configured transport and packaging expenses.
    pub fn costs(&self) -> CostSet {
        CostSet::new([
            Expense::fixed(FIXED_EXPENSE_DESCRIPTION, self.cost_absolute),
            Expense::percentage(PERCENTAGE_EXPENSE_DESCRIPTION, self.cost_percentage),
        ])
    }
}

/// The product to price.
#[derive(Debug, Clone, PartialEq, Eq, Args, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductConfig {
    /// Product name
    #[arg(long = "name", env = "PRODUCT_NAME", default_value = "The Little Prince")]
    pub name: String,

    /// Product UPC; values shorter than six digits are replaced with a random UPC
    #[arg(
        long = "upc",
        env = "PRODUCT_UPC",
        default_value_t = 123_456,
        allow_negative_numbers = true
    )]
    pub upc: i64,

    /// Product price, either an amount ("20.25") or an amount and currency ("20.25 GBP")
    #[arg(long = "price", env = "PRODUCT_PRICE", default_value = "20.25")]
    #[serde(deserialize_with = "price_text")]
    pub price: String,
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            name: "The Little Prince".to_string(),
            upc: 123_456,
            price: "20.25".to_string(),
        }
    }
}

impl ProductConfig {
    /// Parse the configured price, using `currency` when the price has no currency code.
    ///
    /// # Errors
    ///
    /// Returns an error if the price is not a decimal amount optionally followed by a supported
    /// currency code.
    pub fn price(&self, currency: &'static Currency) -> Result<Money, ConfigError> {
        let price = self.price.trim();

        if price.contains(char::is_whitespace) {
            return parse_price(price);
        }

        let amount = price
            .parse::<Decimal>()
            .map_err(|_err| ConfigError::InvalidPrice(self.price.clone()))?;

        Ok(Money::new(currency, amount))
    }

    /// Build the product with the given default currency and expenses.
    ///
    /// # Errors
    ///
    /// Returns an error if the price cannot be parsed or a replacement UPC cannot be generated.
    pub fn to_product(
        &self,
        currency: &'static Currency,
        costs: CostSet,
    ) -> Result<Product, ConfigError> {
        let price = self.price(currency)?;

        Ok(Product::new(self.name.clone(), self.upc, price, costs)?)
    }
}

/// Full calculator configuration as stored in a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Pricing settings
    pub pricing: PricingConfig,

    /// Product settings
    pub product: ProductConfig,
}

impl CalculatorConfig {
    /// Parse a YAML document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid YAML or contains unknown fields.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Load a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }

    /// Build the configured product, priced in the configured currency with the configured
    /// expenses.
    ///
    /// # Errors
    ///
    /// See [`ProductConfig::to_product`].
    pub fn product(&self) -> Result<Product, ConfigError> {
        self.product
            .to_product(self.pricing.currency(), self.pricing.costs())
    }
}

/// Accept prices written either as YAML numbers or strings.
fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(Decimal),
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(text) => text,
        RawPrice::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rusty_money::iso::{EUR, GBP, JPY, USD};
    use testresult::TestResult;

    use super::*;
    use crate::expenses::ExpenseKind;

    #[test]
    fn defaults_match_reference_configuration() {
        let config = PricingConfig::default();

        assert_eq!(config.tax().rate().value(), 20);
        assert_eq!(config.discount(), Discount::default());
        assert_eq!(config.cap(), DiscountCap::default());
        assert_eq!(config.combine_type(), CombineType::Additive);
        assert_eq!(config.currency(), USD);
    }

    #[test]
    fn costs_use_transport_and_packaging() -> TestResult {
        let config = PricingConfig {
            cost_absolute: Decimal::from_str("2.2")?,
            cost_percentage: Decimal::ONE,
            ..PricingConfig::default()
        };

        let kinds: Vec<(String, ExpenseKind)> = config
            .costs()
            .iter()
            .map(|expense| (expense.description().to_string(), expense.kind()))
            .collect();

        assert_eq!(
            kinds,
            [
                (
                    "Transport".to_string(),
                    ExpenseKind::Fixed(Decimal::from_str("2.2")?)
                ),
                ("Packaging".to_string(), ExpenseKind::Percentage(Decimal::ONE)),
            ]
        );

        Ok(())
    }

    #[test]
    fn parses_yaml_with_defaults_for_missing_fields() -> TestResult {
        let config = CalculatorConfig::from_yaml_str(
            "pricing:\n  tax_rate: 21\n  currency: 3\n  discount_cap_type: 2\n  cap_value: 4\n",
        )?;

        assert_eq!(config.pricing.tax_rate, 21);
        assert_eq!(config.pricing.currency(), EUR);
        assert_eq!(config.pricing.cap(), DiscountCap::Absolute(Decimal::from(4)));
        assert_eq!(config.pricing.universal_discount_rate, 0);
        assert_eq!(config.product, ProductConfig::default());

        Ok(())
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = CalculatorConfig::from_yaml_str("pricing:\n  tax: 21\n");

        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn product_price_accepts_numbers_and_labelled_strings() -> TestResult {
        let numeric = CalculatorConfig::from_yaml_str("product:\n  price: 12.5\n")?;
        let labelled = CalculatorConfig::from_yaml_str("product:\n  price: \"12.5 GBP\"\n")?;

        assert_eq!(
            numeric.product.price(JPY)?,
            Money::new(JPY, Decimal::from_str("12.5")?)
        );
        assert_eq!(
            labelled.product.price(JPY)?,
            Money::new(GBP, Decimal::from_str("12.5")?)
        );

        Ok(())
    }

    #[test]
    fn invalid_product_price_is_an_error() {
        let product = ProductConfig {
            price: "twelve".to_string(),
            ..ProductConfig::default()
        };

        assert!(matches!(
            product.price(USD),
            Err(ConfigError::InvalidPrice(_))
        ));
    }

    #[test]
    fn builds_configured_product() -> TestResult {
        let config = CalculatorConfig::from_yaml_str(
            "pricing:\n  currency: 1\n  cost_absolute: 2.2\nproduct:\n  name: Atlas\n  upc: 654321\n",
        )?;

        let product = config.product()?;

        assert_eq!(product.name(), "Atlas");
        assert_eq!(product.upc().value(), 654_321);
        assert_eq!(product.price(), Money::new(GBP, Decimal::from_str("20.25")?));
        assert_eq!(product.costs().len(), 2);

        Ok(())
    }
}
