//! Price Calculator CLI

use std::{io, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::info;

use price_calculator::{
    config::{CalculatorConfig, ConfigError, PricingConfig, ProductConfig},
    discounts::Precedence,
    logging::{LoggingConfig, LoggingError, init_subscriber},
    pricing::PriceCalculator,
    receipt::ReceiptError,
};

#[derive(Debug, Parser)]
#[command(
    name = "price-calculator",
    about = "Calculate the final price of a product",
    long_about = None
)]
struct Cli {
    /// YAML configuration file; replaces the pricing and product flags when given
    #[arg(short, long, env = "PRICING_CONFIG")]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    #[command(flatten)]
    pricing: PricingConfig,

    #[command(flatten)]
    product: ProductConfig,

    #[command(flatten)]
    logging: LoggingConfig,
}

/// Report output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReportFormat {
    /// One `Label = amount` line per entry
    Text,

    /// A table
    Table,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}

#[expect(clippy::print_stderr, reason = "CLI error reporting")]
fn main() -> ExitCode {
    // Load .env file if present (ignore if missing)
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_subscriber(&cli.logging)?;

    let config = match cli.config {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig {
            pricing: cli.pricing,
            product: cli.product,
        },
    };

    log_config(&config.pricing);

    let product = config.product()?;
    let calculator = PriceCalculator::from_config(&config.pricing);

    info!(product = product.name(), upc = %product.upc(), "executing calculations");

    let receipt = calculator.calculate(&product).receipt;
    let stdout = io::stdout();
    let handle = stdout.lock();

    match cli.format {
        ReportFormat::Text => {
            receipt.write_to(handle)?;
        }
        ReportFormat::Table => receipt.write_table(handle)?,
    }

    Ok(())
}

fn log_config(config: &PricingConfig) {
    let discount = config.discount();

    info!(
        tax_rate = %config.tax().rate(),
        universal_discount_rate = %discount.universal.rate(),
        special_discount_rate = %discount.special.rate(),
        special_discount_upc = discount.special.upc(),
        currency = config.currency().iso_alpha_code,
        "loaded configuration"
    );

    match config.precedence() {
        Precedence::UniversalFirst => info!("universal discount takes precedence over tax"),
        Precedence::SpecialFirst => info!("special discount takes precedence over tax"),
        Precedence::None => info!("discounts do not take precedence over tax"),
    }

    info!(cap = ?config.cap(), combine_type = ?config.combine_type(), "discount limits");
}
