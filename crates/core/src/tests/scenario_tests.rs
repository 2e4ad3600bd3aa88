// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_legacy_counts, create_legacy_pricing};
use crate::{
    SessionCount, calculate_hours_wages, calculate_legacy_revenue, calculate_legacy_summary,
    calculate_venue_costs, count_sessions,
};
use club_ledger_domain::{FinancialSummary, InstructorHours, Money, WorkDays};
use time::macros::date;

#[test]
fn test_full_registrations_only() {
    let revenue: Money = calculate_legacy_revenue(
        &create_legacy_counts(10, 0, 0),
        &create_legacy_pricing(50_000, None, None),
    )
    .unwrap();

    assert_eq!(revenue, 500_000);
}

#[test]
fn test_all_legacy_tiers() {
    let revenue: Money = calculate_legacy_revenue(
        &create_legacy_counts(13, 1, 3),
        &create_legacy_pricing(50_000, Some(25_000), Some(61_500)),
    )
    .unwrap();

    assert_eq!(revenue, 13 * 50_000 + 25_000 + 3 * 61_500);
    assert_eq!(revenue, 859_500);
}

#[test]
fn test_subscription_priced_at_full_price_without_subscription_price() {
    let revenue: Money = calculate_legacy_revenue(
        &create_legacy_counts(5, 0, 2),
        &create_legacy_pricing(45_000, None, None),
    )
    .unwrap();

    assert_eq!(revenue, 315_000);
}

#[test]
fn test_venue_cost_half_unit_rounds_up() {
    assert_eq!(calculate_venue_costs(333_333, 50.0), Ok(166_667));
}

#[test]
fn test_instructor_hours_wages() {
    assert_eq!(calculate_hours_wages(&[]), Ok(0));
    assert_eq!(
        calculate_hours_wages(&[InstructorHours {
            hourly_wage: 3_000,
            total_hours: 60.0,
        }]),
        Ok(180_000)
    );
}

#[test]
fn test_sessions_in_first_week_of_2024() {
    let work_days: WorkDays = WorkDays::parse(&["MONDAY", "WEDNESDAY", "FRIDAY"]).unwrap();

    let count: SessionCount =
        count_sessions(date!(2024 - 01 - 01), date!(2024 - 01 - 07), work_days, 2.0).unwrap();

    assert_eq!(count.total_sessions, 3);
    assert_eq!(count.total_hours, 6.0);
}

#[test]
fn test_full_financial_summary() {
    let summary: FinancialSummary = calculate_legacy_summary(
        &create_legacy_counts(13, 1, 0),
        &create_legacy_pricing(50_000, Some(25_000), None),
        50.0,
        &[InstructorHours {
            hourly_wage: 3_250,
            total_hours: 52.0,
        }],
    )
    .unwrap();

    assert_eq!(summary.revenue, 675_000);
    assert_eq!(summary.venue_costs, 337_500);
    assert_eq!(summary.instructor_wages, 169_000);
    assert_eq!(summary.net_profit, 168_500);
    assert_eq!(summary.margin_percent, 24.96);
}

#[test]
fn test_zero_registrations_summary() {
    let summary: FinancialSummary = calculate_legacy_summary(
        &create_legacy_counts(0, 0, 0),
        &create_legacy_pricing(50_000, Some(25_000), None),
        50.0,
        &[],
    )
    .unwrap();

    assert_eq!(summary, FinancialSummary::default());
    assert_eq!(summary.margin_percent, 0.0);
}
