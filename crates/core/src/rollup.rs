// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly dashboard rollup across programs.
//!
//! ## Contribution rules
//!
//! - Monthly programs contribute their figures for the month, from the
//!   registrations recorded for that month
//! - Seasonal programs contribute their full-season figures divided by the
//!   number of calendar months the season spans, from the season-wide
//!   registrations of the month's season
//! - Seasonal programs contribute nothing to a month that falls in no season
//!
//! Contributions are summed unrounded and each total is rounded once. The
//! per-program figures in `ProgramBreakdown` are rounded individually, so
//! the totals are computed from the unrounded revenue share, venue share
//! and payroll lines rather than from the breakdowns.
//!
//! ## Failures
//!
//! A program whose figures cannot be computed is excluded from the totals
//! and reported in `MonthlyRollup::failures` with its error.

use crate::config::EngineConfig;
use crate::money::{as_float, round_to_money};
use crate::payroll::{PayrollLine, assignment_payroll, assignments_for, total_loaded_wage};
use crate::pricing::{LineItem, resolve_line_items};
use crate::revenue::calculate_revenue;
use crate::summary::build_summary;
use crate::venue::calculate_venue_costs;
use club_ledger_domain::{
    BillingPeriod, Cadence, DomainError, FinancialSummary, InstructorAssignment, Money,
    MonthPeriod, Program, Registration, Season, season_for_month,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// One program with its registrations and instructor assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramPeriodInput {
    /// The program.
    pub program: Program,
    /// The program's registration records, for any period.
    #[serde(default)]
    pub registrations: Vec<Registration>,
    /// The program's instructor assignments, for any season.
    #[serde(default)]
    pub assignments: Vec<InstructorAssignment>,
}

/// The month a rollup is computed for, with the season it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollupPeriod {
    month: MonthPeriod,
    season: Option<Season>,
}

impl RollupPeriod {
    /// Creates a rollup period from an already resolved season.
    #[must_use]
    pub const fn new(month: MonthPeriod, season: Option<Season>) -> Self {
        Self { month, season }
    }

    /// Resolves the rollup period of a month, finding its season by the
    /// mid-month rule.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if the month is outside 1..=12.
    pub fn resolve(year: i32, month: u8, seasons: &[Season]) -> Result<Self, DomainError> {
        let month: MonthPeriod = MonthPeriod::new(year, month)?;
        let season: Option<Season> = season_for_month(month, seasons).cloned();
        Ok(Self::new(month, season))
    }

    /// Returns the month.
    #[must_use]
    pub const fn month(&self) -> MonthPeriod {
        self.month
    }

    /// Returns the season the month belongs to, if any.
    #[must_use]
    pub const fn season(&self) -> Option<&Season> {
        self.season.as_ref()
    }

    /// Returns the id of the season the month belongs to, if any.
    #[must_use]
    pub fn season_id(&self) -> Option<&str> {
        self.season.as_ref().map(Season::id)
    }
}

/// The full-period figures of one program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramBreakdown {
    /// The program identifier.
    pub program_id: String,
    /// The program's display name.
    pub program_name: String,
    /// The program's billing cadence.
    pub cadence: Cadence,
    /// Months the program's billing period spans. The program contributes
    /// `1 / months_in_period` of each figure to the monthly totals.
    pub months_in_period: u32,
    /// The resolved line items.
    pub line_items: Vec<LineItem>,
    /// The per-assignment payroll.
    pub payroll: Vec<PayrollLine>,
    /// The program's figures for its whole billing period.
    #[serde(flatten)]
    pub summary: FinancialSummary,
}

/// A program excluded from the rollup totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramFailure {
    /// The program identifier.
    pub program_id: String,
    /// The program's display name.
    pub program_name: String,
    /// The error message.
    pub reason: String,
    /// The error.
    #[serde(skip)]
    pub error: DomainError,
}

/// The dashboard figures of one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRollup {
    /// The month's totals across all included programs.
    pub total: FinancialSummary,
    /// One entry per included program, in input order.
    pub per_program: Vec<ProgramBreakdown>,
    /// Programs excluded because their figures could not be computed.
    pub failures: Vec<ProgramFailure>,
}

/// The billing period of a program within a rollup period.
struct ProgramPeriod<'a> {
    billing: BillingPeriod,
    months: u32,
    registrations: Vec<&'a Registration>,
}

/// Selects the billing period and registrations of a program, or `None`
/// when the program has no period within the rollup month.
fn program_period<'a>(
    entry: &'a ProgramPeriodInput,
    period: &RollupPeriod,
) -> Option<ProgramPeriod<'a>> {
    match entry.program.cadence() {
        Cadence::Monthly => Some(ProgramPeriod {
            billing: BillingPeriod::Month(period.month),
            months: 1,
            registrations: entry
                .registrations
                .iter()
                .filter(|registration| registration.is_for_month(period.month))
                .collect(),
        }),
        Cadence::Seasonal => {
            let season: &Season = period.season.as_ref()?;
            Some(ProgramPeriod {
                billing: BillingPeriod::Season(season.clone()),
                months: season.months_spanned().max(1),
                registrations: entry
                    .registrations
                    .iter()
                    .filter(|registration| registration.is_for_season(season.id()))
                    .collect(),
            })
        }
    }
}

fn program_payroll(
    assignments: &[InstructorAssignment],
    period: &RollupPeriod,
    billing: &BillingPeriod,
    session_hours: f64,
    config: &EngineConfig,
) -> Result<Vec<PayrollLine>, DomainError> {
    assignments_for(assignments, period.season_id())
        .map(|assignment| {
            assignment_payroll(
                assignment,
                billing,
                session_hours,
                config.employer_overhead_rate,
            )
        })
        .collect()
}

/// Computes the full-period breakdown of one program.
///
/// Returns `Ok(None)` for a seasonal program when the month falls in no
/// season.
///
/// # Errors
///
/// Returns an error if pricing, venue costs or payroll fail for the program.
pub fn program_breakdown(
    entry: &ProgramPeriodInput,
    period: &RollupPeriod,
    config: &EngineConfig,
) -> Result<Option<ProgramBreakdown>, DomainError> {
    let Some(selected) = program_period(entry, period) else {
        debug!(
            program_id = %entry.program.id,
            month = %period.month,
            "Seasonal program has no season in this month"
        );
        return Ok(None);
    };

    let mut line_items: Vec<LineItem> = Vec::new();
    for registration in &selected.registrations {
        line_items.extend(resolve_line_items(
            &entry.program.pricing,
            &registration.counts,
        )?);
    }

    let revenue: Money = calculate_revenue(&line_items)?;
    let venue_costs: Money = calculate_venue_costs(revenue, entry.program.venue_split_percent)?;

    let session_hours: f64 = entry.program.session_hours(config.default_session_hours);
    let payroll: Vec<PayrollLine> = program_payroll(
        &entry.assignments,
        period,
        &selected.billing,
        session_hours,
        config,
    )?;
    let instructor_wages: Money = round_to_money("instructor_wages", total_loaded_wage(&payroll))?;

    Ok(Some(ProgramBreakdown {
        program_id: entry.program.id.clone(),
        program_name: entry.program.name.clone(),
        cadence: entry.program.cadence(),
        months_in_period: selected.months,
        line_items,
        payroll,
        summary: build_summary(revenue, venue_costs, instructor_wages)?,
    }))
}

/// Unrounded monthly contributions.
#[derive(Default)]
struct Contributions {
    revenue: f64,
    venue_costs: f64,
    instructor_wages: f64,
}

impl Contributions {
    /// Adds a program's monthly share. The venue share is taken from the
    /// unrounded `revenue * split / 100`, like the wages from the unrounded
    /// payroll lines.
    fn add(&mut self, breakdown: &ProgramBreakdown, venue_split_percent: f64) {
        let months: f64 = f64::from(breakdown.months_in_period);
        let revenue: f64 = as_float(breakdown.summary.revenue);
        let venue_costs: f64 = (revenue * venue_split_percent / 100.0).clamp(0.0, revenue);

        self.revenue += revenue / months;
        self.venue_costs += venue_costs / months;
        self.instructor_wages += total_loaded_wage(&breakdown.payroll) / months;
    }

    fn into_summary(self) -> Result<FinancialSummary, DomainError> {
        build_summary(
            round_to_money("revenue", self.revenue)?,
            round_to_money("venue_costs", self.venue_costs)?,
            round_to_money("instructor_wages", self.instructor_wages)?,
        )
    }
}

/// Calculates the dashboard figures of one month across many programs.
///
/// Failing programs are skipped and listed in `failures`; they never
/// contribute partial figures.
///
/// # Arguments
///
/// * `entries` - Every program with its registrations and assignments
/// * `period` - The month, with its season
/// * `config` - Engine settings
///
/// # Errors
///
/// Returns an error only if a total cannot be represented as `Money`.
pub fn calculate_monthly_rollup(
    entries: &[ProgramPeriodInput],
    period: &RollupPeriod,
    config: &EngineConfig,
) -> Result<MonthlyRollup, DomainError> {
    let mut contributions: Contributions = Contributions::default();
    let mut per_program: Vec<ProgramBreakdown> = Vec::with_capacity(entries.len());
    let mut failures: Vec<ProgramFailure> = Vec::new();

    for entry in entries {
        match program_breakdown(entry, period, config) {
            Ok(Some(breakdown)) => {
                contributions.add(&breakdown, entry.program.venue_split_percent);
                per_program.push(breakdown);
            }
            Ok(None) => {}
            Err(error) => {
                warn!(
                    program_id = %entry.program.id,
                    error = %error,
                    "Skipping program in monthly rollup"
                );
                failures.push(ProgramFailure {
                    program_id: entry.program.id.clone(),
                    program_name: entry.program.name.clone(),
                    reason: error.to_string(),
                    error,
                });
            }
        }
    }

    let total: FinancialSummary = contributions.into_summary()?;
    info!(
        month = %period.month,
        programs = per_program.len(),
        failures = failures.len(),
        revenue = total.revenue,
        net_profit = total.net_profit,
        "Computed monthly rollup"
    );

    Ok(MonthlyRollup {
        total,
        per_program,
        failures,
    })
}

/// Calculates the month's instructor wage cost across many programs.
///
/// Uses the same contribution rules as `calculate_monthly_rollup` but fails
/// as a whole if any program's payroll fails.
///
/// # Errors
///
/// Returns the first payroll error, or an error if the total cannot be
/// represented as `Money`.
pub fn calculate_dashboard_instructor_wages(
    entries: &[ProgramPeriodInput],
    period: &RollupPeriod,
    config: &EngineConfig,
) -> Result<Money, DomainError> {
    let mut total: f64 = 0.0;
    for entry in entries {
        let Some(selected) = program_period(entry, period) else {
            continue;
        };
        let session_hours: f64 = entry.program.session_hours(config.default_session_hours);
        let payroll: Vec<PayrollLine> = program_payroll(
            &entry.assignments,
            period,
            &selected.billing,
            session_hours,
            config,
        )?;
        total += total_loaded_wage(&payroll) / f64::from(selected.months);
    }
    round_to_money("instructor_wages", total)
}
