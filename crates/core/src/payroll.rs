// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Instructor payroll.
//!
//! Wages are computed per assignment and summed per program. The session
//! count depends on the billing period:
//!
//! - A calendar month counts the exact occurrences of the assignment's work
//!   days in that month
//! - A season assumes a uniform weekly cadence: work days per week times the
//!   fractional number of weeks the season spans
//!
//! `loaded_wage = hours * hourly_wage * (1 + employer_overhead_rate)`.
//!
//! Intermediate figures stay fractional. Totals are rounded to `Money` once,
//! after summing.

use crate::money::{as_float, round_to_money};
use crate::sessions::count_sessions_in_month;
use club_ledger_domain::{
    BillingPeriod, DomainError, InstructorAssignment, InstructorHours, Money, validate_amount,
    validate_overhead_rate, validate_session_hours, validate_worked_hours,
};
use serde::Serialize;
use tracing::debug;

/// The payroll figures of one instructor assignment for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollLine {
    /// The instructor identifier.
    pub instructor_id: String,
    /// The instructor's display name.
    pub instructor_name: String,
    /// Hourly wage.
    pub hourly_wage: Money,
    /// Sessions taught. Fractional for seasons.
    pub sessions: f64,
    /// `sessions * session_hours`.
    pub hours: f64,
    /// `hours * hourly_wage`, before overhead.
    pub base_wage: f64,
    /// `base_wage * (1 + employer_overhead_rate)`.
    pub loaded_wage: f64,
}

/// Returns the assignments that apply to a period whose season is
/// `season_id`.
pub fn assignments_for<'a>(
    assignments: &'a [InstructorAssignment],
    season_id: Option<&'a str>,
) -> impl Iterator<Item = &'a InstructorAssignment> {
    assignments
        .iter()
        .filter(move |assignment| assignment.applies_to(season_id))
}

/// Computes the payroll line of a single assignment.
///
/// # Arguments
///
/// * `assignment` - The instructor assignment
/// * `period` - The month or season being paid
/// * `session_hours` - Hours per session of the program
/// * `employer_overhead_rate` - Overhead on top of gross wages (0.18 = 18%)
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if the wage is negative, the session
/// hours are not positive, or the overhead rate is negative.
pub fn assignment_payroll(
    assignment: &InstructorAssignment,
    period: &BillingPeriod,
    session_hours: f64,
    employer_overhead_rate: f64,
) -> Result<PayrollLine, DomainError> {
    validate_amount("hourly_wage", assignment.hourly_wage)?;
    validate_session_hours(session_hours)?;
    validate_overhead_rate(employer_overhead_rate)?;

    let sessions: f64 = match period {
        BillingPeriod::Month(month) => f64::from(
            count_sessions_in_month(*month, assignment.work_days, session_hours)?.total_sessions,
        ),
        BillingPeriod::Season(season) => {
            f64::from(assignment.work_days.len()) * season.weeks_spanned()
        }
    };

    let hours: f64 = sessions * session_hours;
    let base_wage: f64 = hours * as_float(assignment.hourly_wage);
    let loaded_wage: f64 = base_wage * (1.0 + employer_overhead_rate);

    debug!(
        instructor_id = %assignment.instructor_id,
        sessions,
        hours,
        loaded_wage,
        "Computed assignment payroll"
    );

    Ok(PayrollLine {
        instructor_id: assignment.instructor_id.clone(),
        instructor_name: assignment.instructor_name.clone(),
        hourly_wage: assignment.hourly_wage,
        sessions,
        hours,
        base_wage,
        loaded_wage,
    })
}

/// Computes one payroll line per assignment, in input order.
///
/// # Errors
///
/// Returns the first error from `assignment_payroll`.
pub fn instructor_payroll_lines(
    assignments: &[InstructorAssignment],
    period: &BillingPeriod,
    session_hours: f64,
    employer_overhead_rate: f64,
) -> Result<Vec<PayrollLine>, DomainError> {
    assignments
        .iter()
        .map(|assignment| {
            assignment_payroll(assignment, period, session_hours, employer_overhead_rate)
        })
        .collect()
}

/// Sums the loaded wages of payroll lines without rounding.
#[must_use]
pub fn total_loaded_wage(lines: &[PayrollLine]) -> f64 {
    lines.iter().map(|line| line.loaded_wage).sum()
}

/// Calculates the total loaded wage cost of a program's assignments for a
/// period, rounded once to `Money`.
///
/// Every given assignment is paid; use `assignments_for` to apply season
/// scoping first.
///
/// # Errors
///
/// Returns an error if any assignment fails `assignment_payroll`.
pub fn calculate_instructor_wages(
    assignments: &[InstructorAssignment],
    period: &BillingPeriod,
    session_hours: f64,
    employer_overhead_rate: f64,
) -> Result<Money, DomainError> {
    let lines: Vec<PayrollLine> =
        instructor_payroll_lines(assignments, period, session_hours, employer_overhead_rate)?;
    round_to_money("instructor_wages", total_loaded_wage(&lines))
}

/// Calculates the wage cost of hours already worked.
///
/// Each entry costs `hourly_wage * total_hours`, with no overhead applied.
/// The sum is rounded once.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if a wage or an hour count is
/// negative.
pub fn calculate_hours_wages(instructors: &[InstructorHours]) -> Result<Money, DomainError> {
    let mut total: f64 = 0.0;
    for instructor in instructors {
        validate_amount("hourly_wage", instructor.hourly_wage)?;
        validate_worked_hours(instructor.total_hours)?;
        total += as_float(instructor.hourly_wage) * instructor.total_hours;
    }
    round_to_money("instructor_wages", total)
}
