// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::period::{MonthPeriod, PaymentPeriod};
use crate::weekday::WorkDays;
use serde::{Deserialize, Serialize};
use time::Date;

/// A monetary amount in the minor currency unit (e.g., whole ISK).
pub type Money = i64;

const fn default_active() -> bool {
    true
}

/// One purchasable price tier of a program (e.g., "Full Season").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingOption {
    /// Identifier, unique within the program.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price per registrant.
    pub price: Money,
    /// Display and priority order, ascending.
    #[serde(default)]
    pub order: i32,
    /// Whether the option may be used by registrations.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// N registrants bought one pricing tier for one registration period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationEntry {
    /// The pricing option bought.
    pub pricing_option_id: String,
    /// Number of registrants. Must be non-negative.
    pub quantity: i64,
}

/// Fixed full/half/subscription pricing used by older programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyPricing {
    /// Price of a full registration.
    pub full_price: Money,
    /// Price of a half registration. Half registrations contribute nothing
    /// when unset.
    #[serde(default)]
    pub half_price: Option<Money>,
    /// Price of a subscription. Subscriptions are priced at `full_price`
    /// when unset.
    #[serde(default)]
    pub subscription_price: Option<Money>,
}

/// Registration counts matching `LegacyPricing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyRegistrationCounts {
    /// Number of full registrations.
    #[serde(default)]
    pub full_registrations: i64,
    /// Number of half registrations.
    #[serde(default)]
    pub half_registrations: i64,
    /// Number of subscription registrations.
    #[serde(default)]
    pub subscription_registrations: i64,
}

/// How a program is priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum Pricing {
    /// Fixed full/half/subscription fields.
    Legacy(LegacyPricing),
    /// A list of named pricing options.
    Flexible {
        /// The program's pricing options.
        options: Vec<PricingOption>,
    },
}

/// Registration counts for one period, in the shape of the program's pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum RegistrationCounts {
    /// Counts per legacy tier.
    Legacy(LegacyRegistrationCounts),
    /// Quantities per pricing option.
    Flexible {
        /// One entry per pricing option bought.
        entries: Vec<RegistrationEntry>,
    },
}

/// Registrations recorded for one program and one period.
///
/// Monthly programs record a `month`; seasonal programs record a `season_id`
/// and no month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// The registration record identifier.
    pub id: String,
    /// The month number (1-12) for monthly programs.
    #[serde(default)]
    pub month: Option<u8>,
    /// The season identifier for seasonal programs.
    #[serde(default)]
    pub season_id: Option<String>,
    /// The registration counts.
    pub counts: RegistrationCounts,
}

impl Registration {
    /// Returns whether this registration belongs to the given month.
    #[must_use]
    pub fn is_for_month(&self, period: MonthPeriod) -> bool {
        self.month == Some(period.month_number())
    }

    /// Returns whether this registration is the season-wide record of the
    /// given season.
    #[must_use]
    pub fn is_for_season(&self, season_id: &str) -> bool {
        self.month.is_none() && self.season_id.as_deref() == Some(season_id)
    }
}

/// The billing cadence of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    /// Billed per calendar month.
    Monthly,
    /// Billed per season.
    Seasonal,
}

/// A program offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// The program identifier.
    pub id: String,
    /// The display name.
    pub name: String,
    /// Percentage of revenue owed to the venue (0-100).
    pub venue_split_percent: f64,
    /// Whether the program is billed monthly rather than per season.
    pub is_monthly: bool,
    /// Hours per session, if set on the program itself.
    #[serde(default)]
    pub session_duration: Option<f64>,
    /// Hours per session of the program's type, if any.
    #[serde(default)]
    pub program_type_session_hours: Option<f64>,
    /// How the program is priced.
    pub pricing: Pricing,
}

impl Program {
    /// Returns the billing cadence.
    #[must_use]
    pub const fn cadence(&self) -> Cadence {
        if self.is_monthly {
            Cadence::Monthly
        } else {
            Cadence::Seasonal
        }
    }

    /// Resolves the hours per session.
    ///
    /// The program's own duration wins, then the program type's session
    /// hours, then `default_hours`. A stored duration of zero or less means
    /// "not applicable" and falls through to the next source.
    #[must_use]
    pub fn session_hours(&self, default_hours: f64) -> f64 {
        let is_set = |hours: &f64| *hours > 0.0;
        self.session_duration
            .filter(is_set)
            .or_else(|| self.program_type_session_hours.filter(is_set))
            .unwrap_or(default_hours)
    }
}

/// An instructor assigned to a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorAssignment {
    /// The instructor identifier.
    pub instructor_id: String,
    /// The instructor's display name.
    #[serde(default)]
    pub instructor_name: String,
    /// Hourly wage in the minor currency unit.
    pub hourly_wage: Money,
    /// Days of the week the instructor teaches this program.
    pub work_days: WorkDays,
    /// The season this assignment is limited to, if any.
    #[serde(default)]
    pub season_id: Option<String>,
}

impl InstructorAssignment {
    /// Returns whether this assignment applies to a period whose season is
    /// `season_id`.
    ///
    /// Unscoped assignments apply to every period.
    #[must_use]
    pub fn applies_to(&self, season_id: Option<&str>) -> bool {
        self.season_id
            .as_deref()
            .is_none_or(|scoped| Some(scoped) == season_id)
    }
}

/// Hours already worked by an instructor, with their wage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstructorHours {
    /// Hourly wage in the minor currency unit.
    pub hourly_wage: Money,
    /// Total hours worked.
    pub total_hours: f64,
}

/// Revenue, costs and profit for one program or a whole period.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Total revenue.
    pub revenue: Money,
    /// Amount owed to the venue.
    pub venue_costs: Money,
    /// Instructor wage cost.
    pub instructor_wages: Money,
    /// `revenue - venue_costs - instructor_wages`.
    pub net_profit: Money,
    /// Net profit as a percentage of revenue, two decimals; 0 without revenue.
    pub margin_percent: f64,
}

/// A payment made to the venue.
///
/// Exactly one of `month` and `season_id` identifies the settled period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenuePayment {
    /// The year the payment belongs to.
    pub year: i32,
    /// The settled month (1-12), for monthly settlements.
    #[serde(default)]
    pub month: Option<u8>,
    /// The settled season, for seasonal settlements.
    #[serde(default)]
    pub season_id: Option<String>,
    /// Amount paid. Must be positive.
    pub amount: Money,
    /// Free-form note.
    #[serde(default)]
    pub description: Option<String>,
    /// The date the payment was made.
    #[serde(default)]
    pub paid_date: Option<Date>,
}

impl VenuePayment {
    /// Returns the period this payment settles.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Both or neither of `month` and `season_id` are set
    /// - The month number is invalid
    pub fn period(&self) -> Result<PaymentPeriod, DomainError> {
        match (self.month, self.season_id.as_ref()) {
            (Some(month), None) => Ok(PaymentPeriod::Month(MonthPeriod::new(self.year, month)?)),
            (None, Some(season_id)) => Ok(PaymentPeriod::Season {
                season_id: season_id.clone(),
            }),
            (Some(_), Some(_)) => Err(DomainError::InvalidPaymentPeriod(String::from(
                "a payment cannot settle both a month and a season",
            ))),
            (None, None) => Err(DomainError::InvalidPaymentPeriod(String::from(
                "either a month or a season must be specified",
            ))),
        }
    }
}
