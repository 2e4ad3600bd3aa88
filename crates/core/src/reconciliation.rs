// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use club_ledger_domain::{DomainError, Money, PaymentPeriod, VenuePayment, validate_amount};
use serde::Serialize;

/// Expected venue costs of a period against the payments made for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VenueBalance {
    /// Venue costs owed for the period.
    pub expected: Money,
    /// Sum of the payments made for the period.
    pub paid: Money,
    /// `expected - paid`. Positive means money is still owed to the venue.
    pub difference: Money,
}

impl VenueBalance {
    /// Returns whether the period is paid in full, with nothing owed.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.difference == 0
    }
}

/// Validates a venue payment.
///
/// # Errors
///
/// Returns an error if:
/// - The amount is not positive
/// - The payment does not settle exactly one month or one season
pub fn validate_venue_payment(payment: &VenuePayment) -> Result<PaymentPeriod, DomainError> {
    if payment.amount <= 0 {
        return Err(DomainError::invalid_input(
            "amount",
            format!("payment amount must be positive, got {}", payment.amount),
        ));
    }
    payment.period()
}

/// Reconciles the expected venue costs of a period with the payments made.
///
/// Payments for other periods are ignored, but every payment is validated.
///
/// # Errors
///
/// Returns an error if the expected amount is negative, any payment is
/// invalid, or the payments sum past the money range.
pub fn reconcile_venue_payments(
    expected: Money,
    payments: &[VenuePayment],
    period: &PaymentPeriod,
) -> Result<VenueBalance, DomainError> {
    validate_amount("expected", expected)?;

    let mut paid: Money = 0;
    for payment in payments {
        if validate_venue_payment(payment)? == *period {
            paid = paid.checked_add(payment.amount).ok_or_else(|| {
                DomainError::invalid_input("amount", "total paid overflows the money range")
            })?;
        }
    }

    // Both sides are non-negative, so the difference always fits.
    Ok(VenueBalance {
        expected,
        paid,
        difference: expected - paid,
    })
}
