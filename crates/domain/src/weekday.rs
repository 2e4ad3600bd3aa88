// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed weekday sets for instructor work schedules.
//!
//! Work days arrive from storage as a loose list of day names. They are
//! parsed once, at the ingestion boundary, into a `WorkDays` set so that
//! unknown names are rejected and duplicates collapse.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Weekday;

/// The seven canonical weekdays, Monday first.
const WEEK: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// Parses a canonical weekday name (`MONDAY`..`SUNDAY`, case-insensitive).
///
/// # Errors
///
/// Returns `DomainError::InvalidWeekday` if the name is not a weekday.
pub fn parse_weekday(name: &str) -> Result<Weekday, DomainError> {
    match name.trim().to_ascii_uppercase().as_str() {
        "MONDAY" => Ok(Weekday::Monday),
        "TUESDAY" => Ok(Weekday::Tuesday),
        "WEDNESDAY" => Ok(Weekday::Wednesday),
        "THURSDAY" => Ok(Weekday::Thursday),
        "FRIDAY" => Ok(Weekday::Friday),
        "SATURDAY" => Ok(Weekday::Saturday),
        "SUNDAY" => Ok(Weekday::Sunday),
        _ => Err(DomainError::InvalidWeekday(name.to_string())),
    }
}

/// Returns the canonical upper-case name of a weekday.
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "MONDAY",
        Weekday::Tuesday => "TUESDAY",
        Weekday::Wednesday => "WEDNESDAY",
        Weekday::Thursday => "THURSDAY",
        Weekday::Friday => "FRIDAY",
        Weekday::Saturday => "SATURDAY",
        Weekday::Sunday => "SUNDAY",
    }
}

const fn bit(day: Weekday) -> u8 {
    1 << day.number_days_from_monday()
}

/// A set of weekdays on which an instructor teaches.
///
/// Order is irrelevant and duplicates collapse. Serialized as a list of
/// canonical day names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WorkDays {
    mask: u8,
}

impl WorkDays {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { mask: 0 }
    }

    /// Parses a list of weekday names.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeekday` for the first unknown name.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, DomainError> {
        names
            .iter()
            .map(|name| parse_weekday(name.as_ref()))
            .collect::<Result<Self, DomainError>>()
    }

    /// Returns a copy of this set with `day` added.
    #[must_use]
    pub const fn with(self, day: Weekday) -> Self {
        Self {
            mask: self.mask | bit(day),
        }
    }

    /// Adds a day to the set.
    pub const fn insert(&mut self, day: Weekday) {
        self.mask |= bit(day);
    }

    /// Returns whether the set contains `day`.
    #[must_use]
    pub const fn contains(self, day: Weekday) -> bool {
        self.mask & bit(day) != 0
    }

    /// Returns the number of distinct days in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.mask.count_ones()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.mask == 0
    }

    /// Iterates the days in the set, Monday first.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        WEEK.into_iter().filter(move |day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for WorkDays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

impl TryFrom<Vec<String>> for WorkDays {
    type Error = DomainError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::parse(&names)
    }
}

impl From<WorkDays> for Vec<String> {
    fn from(days: WorkDays) -> Self {
        days.iter().map(|day| weekday_name(day).to_string()).collect()
    }
}

impl std::fmt::Display for WorkDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(weekday_name).collect();
        write!(f, "{}", names.join(", "))
    }
}
