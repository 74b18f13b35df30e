//! Price Calculator
//!
//! Price Calculator computes the final retail price of a single product from a tax rate, a
//! universal and a UPC-targeted special discount, a discount cap, a discount combination policy
//! and a list of per-product expenses.

pub mod caps;
pub mod combining;
pub mod config;
pub mod discounts;
pub mod expenses;
pub mod logging;
pub mod money;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod rates;
pub mod receipt;
pub mod rounding;
pub mod tax;
