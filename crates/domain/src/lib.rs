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

mod error;
mod period;
mod types;
mod validation;
mod weekday;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use period::{BillingPeriod, MonthPeriod, PaymentPeriod, Season, season_for_month};
pub use types::{
    Cadence, FinancialSummary, InstructorAssignment, InstructorHours, LegacyPricing,
    LegacyRegistrationCounts, Money, Pricing, PricingOption, Program, Registration,
    RegistrationCounts, RegistrationEntry, VenuePayment,
};
pub use validation::{
    validate_amount, validate_overhead_rate, validate_quantity, validate_session_hours,
    validate_split_percent, validate_worked_hours,
};
pub use weekday::{WorkDays, parse_weekday, weekday_name};
