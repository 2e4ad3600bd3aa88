// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::EngineConfig;
use crate::money::{as_float, round2};
use crate::payroll::{calculate_hours_wages, calculate_instructor_wages};
use crate::pricing::{LineItem, resolve_legacy};
use crate::revenue::calculate_revenue;
use crate::venue::calculate_venue_costs;
use club_ledger_domain::{
    BillingPeriod, DomainError, FinancialSummary, InstructorAssignment, InstructorHours,
    LegacyPricing, LegacyRegistrationCounts, Money, validate_amount,
};
use tracing::debug;

/// Returns `revenue - venue_costs - instructor_wages`.
///
/// May be negative.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if the result does not fit in `Money`.
pub fn calculate_net_profit(
    revenue: Money,
    venue_costs: Money,
    instructor_wages: Money,
) -> Result<Money, DomainError> {
    revenue
        .checked_sub(venue_costs)
        .and_then(|profit| profit.checked_sub(instructor_wages))
        .ok_or_else(|| {
            DomainError::invalid_input("net_profit", "net profit overflows the money range")
        })
}

/// Returns net profit as a percentage of revenue, rounded to two decimals.
///
/// Zero revenue always yields a margin of 0.
#[must_use]
pub fn calculate_margin_percent(revenue: Money, net_profit: Money) -> f64 {
    if revenue <= 0 {
        return 0.0;
    }
    round2(as_float(net_profit) / as_float(revenue) * 100.0)
}

/// Builds a summary from already computed figures.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if the net profit does not fit in
/// `Money`.
pub fn build_summary(
    revenue: Money,
    venue_costs: Money,
    instructor_wages: Money,
) -> Result<FinancialSummary, DomainError> {
    let net_profit: Money = calculate_net_profit(revenue, venue_costs, instructor_wages)?;
    let summary: FinancialSummary = FinancialSummary {
        revenue,
        venue_costs,
        instructor_wages,
        net_profit,
        margin_percent: calculate_margin_percent(revenue, net_profit),
    };
    debug!(?summary, "Computed financial summary");
    Ok(summary)
}

/// Calculates the financial summary of one program for one period, given its
/// wage cost.
///
/// # Arguments
///
/// * `line_items` - The resolved line items
/// * `venue_split_percent` - The venue's share of revenue, within `[0, 100]`
/// * `instructor_wages` - The instructor wage cost
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if the split is out of range or the
/// wage cost is negative.
pub fn calculate_financial_summary(
    line_items: &[LineItem],
    venue_split_percent: f64,
    instructor_wages: Money,
) -> Result<FinancialSummary, DomainError> {
    validate_amount("instructor_wages", instructor_wages)?;

    let revenue: Money = calculate_revenue(line_items)?;
    let venue_costs: Money = calculate_venue_costs(revenue, venue_split_percent)?;
    build_summary(revenue, venue_costs, instructor_wages)
}

/// Calculates the financial summary of one program for one period, paying
/// every given assignment for the period.
///
/// # Errors
///
/// Returns an error if the split is out of range or any assignment's payroll
/// fails.
pub fn summarize(
    line_items: &[LineItem],
    venue_split_percent: f64,
    assignments: &[InstructorAssignment],
    period: &BillingPeriod,
    session_hours: f64,
    config: &EngineConfig,
) -> Result<FinancialSummary, DomainError> {
    let instructor_wages: Money = calculate_instructor_wages(
        assignments,
        period,
        session_hours,
        config.employer_overhead_rate,
    )?;
    calculate_financial_summary(line_items, venue_split_percent, instructor_wages)
}

/// Calculates the financial summary of a legacy-priced program from hours
/// already worked.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if a count, price, wage or hour
/// figure is negative, or the split is out of range.
pub fn calculate_legacy_summary(
    counts: &LegacyRegistrationCounts,
    pricing: &LegacyPricing,
    venue_split_percent: f64,
    instructors: &[InstructorHours],
) -> Result<FinancialSummary, DomainError> {
    let line_items: Vec<LineItem> = resolve_legacy(pricing, counts)?;
    let instructor_wages: Money = calculate_hours_wages(instructors)?;
    calculate_financial_summary(&line_items, venue_split_percent, instructor_wages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_zero_revenue_has_zero_margin() {
        assert_eq!(calculate_margin_percent(0, 0), 0.0);
        assert_eq!(calculate_margin_percent(0, -50_000), 0.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_margin_is_rounded_to_two_decimals() {
        assert_eq!(calculate_margin_percent(675_000, 168_500), 24.96);
        assert_eq!(calculate_margin_percent(3, 1), 33.33);
        assert_eq!(calculate_margin_percent(100, -50), -50.0);
    }

    #[test]
    fn test_net_profit_can_be_negative() {
        assert_eq!(calculate_net_profit(100, 50, 80), Ok(-30));
    }

    #[test]
    fn test_overflowing_net_profit_is_rejected() {
        assert!(matches!(
            calculate_net_profit(0, 1, Money::MAX),
            Err(DomainError::InvalidInput { .. })
        ));
        assert!(calculate_financial_summary(&[], 50.0, Money::MAX).is_ok());
    }

    #[test]
    fn test_negative_wage_cost_is_rejected() {
        assert!(calculate_financial_summary(&[], 50.0, -1).is_err());
    }
}
