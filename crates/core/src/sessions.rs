// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session counting over calendar ranges.
//!
//! Every session figure in the ledger is derived from one primitive:
//! walk each calendar day of an inclusive range and count the days whose
//! weekday is one of the program's work days. Monthly payroll uses the same
//! primitive restricted to the month's first and last day.

use club_ledger_domain::{DomainError, MonthPeriod, WorkDays, validate_session_hours};
use serde::Serialize;
use time::Date;

/// The sessions held in a date range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionCount {
    /// Number of sessions.
    pub total_sessions: u32,
    /// `total_sessions * session_hours`.
    pub total_hours: f64,
}

/// Counts the days in `start..=end` that fall on one of `work_days`.
///
/// An empty range (`start > end`) has no work days.
#[must_use]
pub fn count_work_days(start: Date, end: Date, work_days: WorkDays) -> u32 {
    if work_days.is_empty() {
        return 0;
    }

    let mut count: u32 = 0;
    let mut current: Option<Date> = Some(start);
    while let Some(date) = current.filter(|date| *date <= end) {
        if work_days.contains(date.weekday()) {
            count += 1;
        }
        current = date.next_day();
    }
    count
}

/// Counts the sessions held between `start` and `end`, inclusive.
///
/// # Arguments
///
/// * `start` - The first day of the range
/// * `end` - The last day of the range; before `start` means an empty range
/// * `work_days` - The weekdays sessions are held on
/// * `session_hours` - Hours per session
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if `session_hours` is not a positive
/// number.
pub fn count_sessions(
    start: Date,
    end: Date,
    work_days: WorkDays,
    session_hours: f64,
) -> Result<SessionCount, DomainError> {
    validate_session_hours(session_hours)?;

    let total_sessions: u32 = count_work_days(start, end, work_days);
    Ok(SessionCount {
        total_sessions,
        total_hours: f64::from(total_sessions) * session_hours,
    })
}

/// Counts the sessions held in one calendar month.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if `session_hours` is not a positive
/// number.
pub fn count_sessions_in_month(
    period: MonthPeriod,
    work_days: WorkDays,
    session_hours: f64,
) -> Result<SessionCount, DomainError> {
    count_sessions(period.first_day(), period.last_day(), work_days, session_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Weekday;
    use time::macros::date;

    fn mon_wed_fri() -> WorkDays {
        [Weekday::Monday, Weekday::Wednesday, Weekday::Friday]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_first_week_of_january_2024() {
        let count: SessionCount =
            count_sessions(date!(2024 - 01 - 01), date!(2024 - 01 - 07), mon_wed_fri(), 2.0)
                .unwrap();

        assert_eq!(count.total_sessions, 3);
        assert!((count.total_hours - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let count: SessionCount =
            count_sessions(date!(2024 - 01 - 07), date!(2024 - 01 - 01), mon_wed_fri(), 2.0)
                .unwrap();

        assert_eq!(count.total_sessions, 0);
        assert!(count.total_hours.abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_day_range() {
        // 2024-01-03 is a Wednesday.
        assert_eq!(
            count_work_days(date!(2024 - 01 - 03), date!(2024 - 01 - 03), mon_wed_fri()),
            1
        );
        assert_eq!(
            count_work_days(date!(2024 - 01 - 04), date!(2024 - 01 - 04), mon_wed_fri()),
            0
        );
    }

    #[test]
    fn test_no_work_days_counts_nothing() {
        assert_eq!(
            count_work_days(date!(2024 - 01 - 01), date!(2024 - 12 - 31), WorkDays::new()),
            0
        );
    }

    #[test]
    fn test_extending_range_never_decreases_sessions() {
        let start: Date = date!(2024 - 02 - 10);
        let mut previous: u32 = 0;
        let mut end: Date = date!(2024 - 02 - 01);
        while end <= date!(2024 - 05 - 01) {
            let current: u32 = count_work_days(start, end, mon_wed_fri());
            assert!(current >= previous);
            previous = current;
            end = end.next_day().unwrap();
        }
    }

    #[test]
    fn test_month_count_uses_exact_days() {
        // February 2024 has five Thursdays (1, 8, 15, 22, 29).
        let period: MonthPeriod = MonthPeriod::new(2024, 2).unwrap();
        let thursdays: WorkDays = std::iter::once(Weekday::Thursday).collect();

        let count: SessionCount = count_sessions_in_month(period, thursdays, 1.5).unwrap();

        assert_eq!(count.total_sessions, 5);
        assert!((count.total_hours - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_session_hours_is_rejected() {
        for hours in [0.0, -1.0, f64::NAN] {
            assert!(
                count_sessions(date!(2024 - 01 - 01), date!(2024 - 01 - 07), mon_wed_fri(), hours)
                    .is_err()
            );
        }
    }
}
