// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation and calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A numeric or structural input is out of range.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the problem.
        message: String,
    },
    /// A registration entry references a pricing option that cannot be used.
    UnknownPricingOption {
        /// The referenced pricing option id.
        pricing_option_id: String,
        /// Whether the option exists but is marked inactive.
        inactive: bool,
    },
    /// A weekday name is not one of MONDAY..SUNDAY.
    InvalidWeekday(String),
    /// A month number is outside 1..=12.
    InvalidMonth(u8),
    /// A season ends before it starts.
    InvalidSeasonRange {
        /// The season start date.
        start_date: Date,
        /// The season end date.
        end_date: Date,
    },
    /// A venue payment is not tied to exactly one month or season.
    InvalidPaymentPeriod(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl DomainError {
    /// Builds an `InvalidInput` error for the given field.
    #[must_use]
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Returns whether this error belongs to the invalid-input category.
    ///
    /// Weekday, month, season range and payment period errors are all
    /// rejections of malformed caller input.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. }
                | Self::InvalidWeekday(_)
                | Self::InvalidMonth(_)
                | Self::InvalidSeasonRange { .. }
                | Self::InvalidPaymentPeriod(_)
        )
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::UnknownPricingOption {
                pricing_option_id,
                inactive,
            } => {
                if *inactive {
                    write!(f, "Pricing option '{pricing_option_id}' is not active")
                } else {
                    write!(f, "Unknown pricing option '{pricing_option_id}'")
                }
            }
            Self::InvalidWeekday(name) => write!(f, "Invalid weekday: '{name}'"),
            Self::InvalidMonth(month) => {
                write!(f, "Invalid month: {month}. Must be between 1 and 12")
            }
            Self::InvalidSeasonRange {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Season end date {end_date} is before its start date {start_date}"
                )
            }
            Self::InvalidPaymentPeriod(msg) => write!(f, "Invalid payment period: {msg}"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
