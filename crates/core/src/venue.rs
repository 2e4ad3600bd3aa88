// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::money::{as_float, round_to_money};
use club_ledger_domain::{DomainError, Money, validate_amount, validate_split_percent};

/// Calculates the share of revenue owed to the venue.
///
/// The result is `round(revenue * split_percent / 100)`, rounded half away
/// from zero, and never exceeds `revenue`.
///
/// # Arguments
///
/// * `revenue` - Total revenue for the period
/// * `split_percent` - The venue's share, within `[0, 100]`
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if the revenue is negative or the
/// split is outside `[0, 100]`.
pub fn calculate_venue_costs(revenue: Money, split_percent: f64) -> Result<Money, DomainError> {
    validate_amount("revenue", revenue)?;
    validate_split_percent(split_percent)?;

    let cost: Money = round_to_money("venue_costs", as_float(revenue) * split_percent / 100.0)?;
    Ok(cost.clamp(0, revenue))
}
