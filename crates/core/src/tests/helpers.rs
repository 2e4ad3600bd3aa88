// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use club_ledger_domain::{
    InstructorAssignment, LegacyPricing, LegacyRegistrationCounts, Money, Pricing,
    PricingOption, Program, Registration, RegistrationCounts, RegistrationEntry, Season, WorkDays,
};
use time::Weekday;
use time::macros::date;

/// Spring runs exactly 20 weeks, January through May 2024.
pub fn create_test_spring() -> Season {
    Season::new("spring", "Spring", date!(2024 - 01 - 08), date!(2024 - 05 - 27)).unwrap()
}

pub fn create_test_autumn() -> Season {
    Season::new("autumn", "Autumn", date!(2024 - 08 - 26), date!(2024 - 12 - 13)).unwrap()
}

pub fn create_test_seasons() -> Vec<Season> {
    vec![create_test_spring(), create_test_autumn()]
}

pub fn create_legacy_pricing(
    full_price: Money,
    half_price: Option<Money>,
    subscription_price: Option<Money>,
) -> LegacyPricing {
    LegacyPricing {
        full_price,
        half_price,
        subscription_price,
    }
}

pub const fn create_legacy_counts(
    full: i64,
    half: i64,
    subscription: i64,
) -> LegacyRegistrationCounts {
    LegacyRegistrationCounts {
        full_registrations: full,
        half_registrations: half,
        subscription_registrations: subscription,
    }
}

pub fn create_pricing_option(id: &str, price: Money, order: i32) -> PricingOption {
    PricingOption {
        id: id.to_string(),
        name: id.to_uppercase(),
        price,
        order,
        is_active: true,
    }
}

pub fn create_monthly_program(id: &str, split: f64, options: Vec<PricingOption>) -> Program {
    Program {
        id: id.to_string(),
        name: format!("Program {id}"),
        venue_split_percent: split,
        is_monthly: true,
        session_duration: Some(1.0),
        program_type_session_hours: None,
        pricing: Pricing::Flexible { options },
    }
}

pub fn create_seasonal_program(id: &str, split: f64, pricing: LegacyPricing) -> Program {
    Program {
        id: id.to_string(),
        name: format!("Program {id}"),
        venue_split_percent: split,
        is_monthly: false,
        session_duration: None,
        program_type_session_hours: Some(2.0),
        pricing: Pricing::Legacy(pricing),
    }
}

pub fn create_monthly_registration(month: u8, entries: &[(&str, i64)]) -> Registration {
    Registration {
        id: format!("reg-{month}"),
        month: Some(month),
        season_id: None,
        counts: RegistrationCounts::Flexible {
            entries: entries
                .iter()
                .map(|(id, quantity)| RegistrationEntry {
                    pricing_option_id: (*id).to_string(),
                    quantity: *quantity,
                })
                .collect(),
        },
    }
}

pub fn create_season_registration(
    season_id: &str,
    counts: LegacyRegistrationCounts,
) -> Registration {
    Registration {
        id: format!("reg-{season_id}"),
        month: None,
        season_id: Some(season_id.to_string()),
        counts: RegistrationCounts::Legacy(counts),
    }
}

pub fn create_assignment(
    instructor_id: &str,
    hourly_wage: Money,
    days: &[Weekday],
    season_id: Option<&str>,
) -> InstructorAssignment {
    InstructorAssignment {
        instructor_id: instructor_id.to_string(),
        instructor_name: format!("Instructor {instructor_id}"),
        hourly_wage,
        work_days: days.iter().copied().collect::<WorkDays>(),
        season_id: season_id.map(str::to_string),
    }
}
