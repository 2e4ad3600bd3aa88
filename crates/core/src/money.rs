// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversions between fractional intermediate figures and `Money`.
//!
//! All rounding is half away from zero, so 166666.5 becomes 166667.

use club_ledger_domain::{DomainError, Money};

/// Largest magnitude that converts to `Money` without saturating.
const MONEY_LIMIT: f64 = 9.0e15;

/// Converts a money amount into a float for intermediate arithmetic.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn as_float(amount: Money) -> f64 {
    amount as f64
}

/// Rounds a fractional amount to the nearest whole `Money` unit.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if the amount is not finite or is too
/// large to be represented.
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_money(field: &str, amount: f64) -> Result<Money, DomainError> {
    if !amount.is_finite() || amount.abs() > MONEY_LIMIT {
        return Err(DomainError::invalid_input(
            field,
            format!("amount {amount} cannot be represented"),
        ));
    }
    Ok(amount.round() as Money)
}

/// Rounds to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_rounds_away_from_zero() {
        assert_eq!(round_to_money("x", 166_666.5).unwrap(), 166_667);
        assert_eq!(round_to_money("x", -2.5).unwrap(), -3);
        assert_eq!(round_to_money("x", 2.4999).unwrap(), 2);
    }

    #[test]
    fn test_non_finite_amount_is_rejected() {
        assert!(round_to_money("x", f64::NAN).is_err());
        assert!(round_to_money("x", f64::INFINITY).is_err());
        assert!(round_to_money("x", 1.0e20).is_err());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_round2() {
        assert_eq!(round2(24.962_962), 24.96);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(-12.345_6), -12.35);
    }
}
