// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Billing periods: calendar months and seasons.
//!
//! Monthly programs are billed per calendar month, seasonal programs per
//! season. All boundary dates are derived once at construction time so that
//! downstream calculations never deal with invalid calendar dates.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// A single calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MonthPeriodRecord", into = "MonthPeriodRecord")]
pub struct MonthPeriod {
    /// The calendar year.
    year: i32,
    /// The calendar month.
    month: Month,
    /// The first day of the month (inclusive).
    first_day: Date,
    /// The last day of the month (inclusive).
    last_day: Date,
}

#[derive(Serialize, Deserialize)]
struct MonthPeriodRecord {
    year: i32,
    month: u8,
}

impl MonthPeriod {
    /// Creates a month period from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The month number is outside 1..=12
    /// - The year is outside the supported calendar range
    pub fn new(year: i32, month: u8) -> Result<Self, DomainError> {
        let month_value: Month =
            Month::try_from(month).map_err(|_| DomainError::InvalidMonth(month))?;
        Self::from_month(year, month_value)
    }

    /// Creates a month period from a year and a `time::Month`.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the supported calendar range.
    pub fn from_month(year: i32, month: Month) -> Result<Self, DomainError> {
        let first_day: Date = Date::from_calendar_date(year, month, 1)
            .map_err(|e| DomainError::invalid_input("year", e.to_string()))?;

        // The last day is the day before the first of the following month.
        let (next_year, next_month): (i32, Month) = if month == Month::December {
            (year + 1, Month::January)
        } else {
            (year, month.next())
        };
        let last_day: Date = Date::from_calendar_date(next_year, next_month, 1)
            .ok()
            .and_then(Date::previous_day)
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("calculating the last day of {month} {year}"),
            })?;

        Ok(Self {
            year,
            month,
            first_day,
            last_day,
        })
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the calendar month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the 1-based month number.
    #[must_use]
    pub const fn month_number(&self) -> u8 {
        self.month as u8
    }

    /// Returns the first day of the month.
    #[must_use]
    pub const fn first_day(&self) -> Date {
        self.first_day
    }

    /// Returns the last day of the month.
    #[must_use]
    pub const fn last_day(&self) -> Date {
        self.last_day
    }

    /// Returns whether `date` falls inside this month.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.first_day <= date && date <= self.last_day
    }
}

impl TryFrom<MonthPeriodRecord> for MonthPeriod {
    type Error = DomainError;

    fn try_from(record: MonthPeriodRecord) -> Result<Self, Self::Error> {
        Self::new(record.year, record.month)
    }
}

impl From<MonthPeriod> for MonthPeriodRecord {
    fn from(period: MonthPeriod) -> Self {
        Self {
            year: period.year,
            month: period.month_number(),
        }
    }
}

impl std::fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// A named date range used as the billing period of seasonal programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeasonRecord")]
pub struct Season {
    /// The season identifier.
    id: String,
    /// The display name (e.g., "Spring").
    name: String,
    /// The first day of the season (inclusive).
    start_date: Date,
    /// The last day of the season (inclusive).
    end_date: Date,
}

#[derive(Deserialize)]
struct SeasonRecord {
    id: String,
    name: String,
    start_date: Date,
    end_date: Date,
}

impl Season {
    /// Creates a new season.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSeasonRange` if `end_date` is before
    /// `start_date`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: Date,
        end_date: Date,
    ) -> Result<Self, DomainError> {
        if end_date < start_date {
            return Err(DomainError::InvalidSeasonRange {
                start_date,
                end_date,
            });
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            start_date,
            end_date,
        })
    }

    /// Returns the season identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first day of the season.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the last day of the season.
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns whether `date` falls inside the season.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns the season length in weeks, fractional.
    ///
    /// Measured as `(end_date - start_date) / 7 days`, so a season running
    /// from a Monday to the Monday four weeks later spans exactly 4.0 weeks.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn weeks_spanned(&self) -> f64 {
        (self.end_date - self.start_date).whole_days() as f64 / 7.0
    }

    /// Returns the number of calendar months the season touches.
    ///
    /// A season from 2024-01-15 to 2024-04-10 spans January through April,
    /// which is 4 months. A season always spans at least one month.
    #[must_use]
    pub fn months_spanned(&self) -> u32 {
        let years: i32 = self.end_date.year() - self.start_date.year();
        let months: i32 =
            i32::from(self.end_date.month() as u8) - i32::from(self.start_date.month() as u8);
        u32::try_from(years * 12 + months + 1).unwrap_or(1)
    }
}

impl TryFrom<SeasonRecord> for Season {
    type Error = DomainError;

    fn try_from(record: SeasonRecord) -> Result<Self, Self::Error> {
        Self::new(record.id, record.name, record.start_date, record.end_date)
    }
}

/// Finds the season a month belongs to.
///
/// A month belongs to the first season that contains its 15th day.
#[must_use]
pub fn season_for_month(period: MonthPeriod, seasons: &[Season]) -> Option<&Season> {
    let mid_month: Date = Date::from_calendar_date(period.year(), period.month(), 15).ok()?;
    seasons.iter().find(|season| season.contains(mid_month))
}

/// The period a payroll or summary calculation is evaluated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BillingPeriod {
    /// A single calendar month (monthly cadence).
    Month(MonthPeriod),
    /// A whole season (seasonal cadence).
    Season(Season),
}

impl BillingPeriod {
    /// Returns the season id if this is a seasonal period.
    #[must_use]
    pub fn season_id(&self) -> Option<&str> {
        match self {
            Self::Month(_) => None,
            Self::Season(season) => Some(season.id()),
        }
    }
}

/// The period a venue payment settles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaymentPeriod {
    /// A calendar month.
    Month(MonthPeriod),
    /// A season, by id.
    Season {
        /// The season identifier.
        season_id: String,
    },
}
