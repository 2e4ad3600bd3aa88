// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::invalid_input("quantity", "must not be negative");
    assert_eq!(
        format!("{err}"),
        "Invalid input for field 'quantity': must not be negative"
    );

    let err: DomainError = DomainError::UnknownPricingOption {
        pricing_option_id: String::from("opt-9"),
        inactive: false,
    };
    assert_eq!(format!("{err}"), "Unknown pricing option 'opt-9'");

    let err: DomainError = DomainError::UnknownPricingOption {
        pricing_option_id: String::from("opt-2"),
        inactive: true,
    };
    assert_eq!(format!("{err}"), "Pricing option 'opt-2' is not active");

    let err: DomainError = DomainError::InvalidWeekday(String::from("FUNDAY"));
    assert_eq!(format!("{err}"), "Invalid weekday: 'FUNDAY'");

    let err: DomainError = DomainError::InvalidMonth(13);
    assert_eq!(
        format!("{err}"),
        "Invalid month: 13. Must be between 1 and 12"
    );

    let err: DomainError = DomainError::InvalidSeasonRange {
        start_date: date!(2024 - 05 - 01),
        end_date: date!(2024 - 01 - 01),
    };
    assert_eq!(
        format!("{err}"),
        "Season end date 2024-01-01 is before its start date 2024-05-01"
    );

    let err: DomainError = DomainError::InvalidPaymentPeriod(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid payment period: test");

    let err: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("counting sessions"),
    };
    assert_eq!(
        format!("{err}"),
        "Date arithmetic overflow while counting sessions"
    );
}

#[test]
fn test_invalid_input_category() {
    assert!(DomainError::invalid_input("price", "negative").is_invalid_input());
    assert!(DomainError::InvalidWeekday(String::from("X")).is_invalid_input());
    assert!(DomainError::InvalidMonth(0).is_invalid_input());
    assert!(DomainError::InvalidPaymentPeriod(String::new()).is_invalid_input());

    let unknown: DomainError = DomainError::UnknownPricingOption {
        pricing_option_id: String::from("x"),
        inactive: false,
    };
    assert!(!unknown.is_invalid_input());

    let overflow: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("x"),
    };
    assert!(!overflow.is_invalid_input());
}
