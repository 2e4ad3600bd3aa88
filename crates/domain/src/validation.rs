// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Money;

/// Validates that a registrant count is non-negative.
///
/// # Arguments
///
/// * `field` - The name of the field being validated
/// * `quantity` - The count to validate
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if the quantity is negative.
pub fn validate_quantity(field: &str, quantity: i64) -> Result<(), DomainError> {
    if quantity < 0 {
        return Err(DomainError::invalid_input(
            field,
            format!("quantity must not be negative, got {quantity}"),
        ));
    }
    Ok(())
}

/// Validates that a price or wage is non-negative.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if the amount is negative.
pub fn validate_amount(field: &str, amount: Money) -> Result<(), DomainError> {
    if amount < 0 {
        return Err(DomainError::invalid_input(
            field,
            format!("amount must not be negative, got {amount}"),
        ));
    }
    Ok(())
}

/// Validates a venue split percentage.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` unless the percentage is a finite
/// number within `[0, 100]`.
pub fn validate_split_percent(split_percent: f64) -> Result<(), DomainError> {
    if !split_percent.is_finite() || !(0.0..=100.0).contains(&split_percent) {
        return Err(DomainError::invalid_input(
            "venue_split_percent",
            format!("must be between 0 and 100, got {split_percent}"),
        ));
    }
    Ok(())
}

/// Validates the hours of a single session.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` unless the duration is finite and
/// strictly positive.
pub fn validate_session_hours(session_hours: f64) -> Result<(), DomainError> {
    if !session_hours.is_finite() || session_hours <= 0.0 {
        return Err(DomainError::invalid_input(
            "session_hours",
            format!("must be greater than 0, got {session_hours}"),
        ));
    }
    Ok(())
}

/// Validates an employer overhead rate (e.g., 0.18 for 18%).
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` unless the rate is finite and
/// non-negative.
pub fn validate_overhead_rate(rate: f64) -> Result<(), DomainError> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(DomainError::invalid_input(
            "employer_overhead_rate",
            format!("must be a non-negative number, got {rate}"),
        ));
    }
    Ok(())
}

/// Validates an amount of hours already worked.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` unless the hours are finite and
/// non-negative.
pub fn validate_worked_hours(hours: f64) -> Result<(), DomainError> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(DomainError::invalid_input(
            "total_hours",
            format!("must be a non-negative number, got {hours}"),
        ));
    }
    Ok(())
}
