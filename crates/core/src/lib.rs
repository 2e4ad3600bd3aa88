// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod config;
mod error;
mod money;
mod payroll;
mod pricing;
mod reconciliation;
mod revenue;
mod rollup;
mod sessions;
mod summary;
mod venue;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use config::{DEFAULT_EMPLOYER_OVERHEAD_RATE, DEFAULT_SESSION_HOURS, EngineConfig};
pub use error::CoreError;
pub use money::{round_to_money, round2};
pub use payroll::{
    PayrollLine, assignment_payroll, assignments_for, calculate_hours_wages,
    calculate_instructor_wages, instructor_payroll_lines, total_loaded_wage,
};
pub use pricing::{
    LEGACY_FULL_LABEL, LEGACY_HALF_LABEL, LEGACY_SUBSCRIPTION_LABEL, LineItem, resolve_flexible,
    resolve_legacy, resolve_line_items,
};
pub use reconciliation::{VenueBalance, reconcile_venue_payments, validate_venue_payment};
pub use revenue::{calculate_legacy_revenue, calculate_revenue};
pub use rollup::{
    MonthlyRollup, ProgramBreakdown, ProgramFailure, ProgramPeriodInput, RollupPeriod,
    calculate_dashboard_instructor_wages, calculate_monthly_rollup, program_breakdown,
};
pub use sessions::{SessionCount, count_sessions, count_sessions_in_month, count_work_days};
pub use summary::{
    build_summary, calculate_financial_summary, calculate_legacy_summary,
    calculate_margin_percent, calculate_net_profit, summarize,
};
pub use venue::calculate_venue_costs;
