//! Rounding
//!
//! All derived monetary values go through [`round_to`] so results are reproducible: intermediate
//! work is kept at [`INTERNAL_PRECISION`] decimal places and reported at [`REPORT_PRECISION`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::rates::Rate;

/// Decimal places kept for intermediate calculations.
pub const INTERNAL_PRECISION: i32 = 4;

/// Decimal places used when reporting results.
pub const REPORT_PRECISION: i32 = 2;

/// Round `value` to `places` decimal places, half away from zero.
///
/// Negative values are rounded by magnitude and keep their sign. Negative `places` are treated as
/// zero.
pub fn round_to(value: Decimal, places: i32) -> Decimal {
    let places = u32::try_from(places).unwrap_or(0);

    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Absolute amount of `rate` percent of `base`, at internal precision.
pub fn amount_from_percentage(rate: Rate, base: Decimal) -> Decimal {
    round_to(rate.of(base), INTERNAL_PRECISION)
}
