//! Rounding helpers shared by anything that presents calculation output.
//!
//! Estimates are computed in `f64`. Presentation rounds through [`Decimal`]
//! so that values such as `0.1` round the way a person reading the
//! decimal expansion expects.

use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};

/// Converts an `f64` to a [`Decimal`].
///
/// Everyday amounts keep their short decimal form (`0.1` stays `0.1`).
/// Very large magnitudes carry the exact binary value instead, so `1e26`
/// becomes `100000000000000004764729344`.
///
/// Returns `None` for `NaN`, infinities, and magnitudes outside the
/// [`Decimal`] range (about 7.9e28).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::to_decimal;
///
/// assert_eq!(to_decimal(0.1), Some(dec!(0.1)));
/// assert_eq!(to_decimal(f64::NAN), None);
/// ```
pub fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
}

/// Rounds to two decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_cents;
///
/// assert_eq!(round_cents(123.454), Some(dec!(123.45)));
/// assert_eq!(round_cents(123.625), Some(dec!(123.63)));
/// assert_eq!(round_cents(-123.625), Some(dec!(-123.63)));
/// ```
pub fn round_cents(value: f64) -> Option<Decimal> {
    to_decimal(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Rounds to a whole number, halves toward positive infinity.
///
/// `2.5` becomes `3` and `-2.5` becomes `-2`.
pub fn round_whole(value: f64) -> Option<Decimal> {
    let strategy = if value < 0.0 {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    to_decimal(value).map(|d| d.round_dp_with_strategy(0, strategy))
}
