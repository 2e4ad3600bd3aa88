// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, WorkDays, parse_weekday, weekday_name};
use time::Weekday;

#[test]
fn test_parse_weekday_is_case_insensitive() {
    assert_eq!(parse_weekday("MONDAY").unwrap(), Weekday::Monday);
    assert_eq!(parse_weekday("wednesday").unwrap(), Weekday::Wednesday);
    assert_eq!(parse_weekday(" Sunday ").unwrap(), Weekday::Sunday);
}

#[test]
fn test_parse_weekday_rejects_unknown_names() {
    let result: Result<Weekday, DomainError> = parse_weekday("MON");
    assert_eq!(result, Err(DomainError::InvalidWeekday(String::from("MON"))));
}

#[test]
fn test_weekday_name_round_trips_every_day() {
    for day in [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ] {
        assert_eq!(parse_weekday(weekday_name(day)).unwrap(), day);
    }
}

#[test]
fn test_work_days_collapse_duplicates() {
    let days: WorkDays = WorkDays::parse(&["MONDAY", "monday", "FRIDAY"]).unwrap();
    assert_eq!(days.len(), 2);
    assert!(days.contains(Weekday::Monday));
    assert!(days.contains(Weekday::Friday));
    assert!(!days.contains(Weekday::Tuesday));
}

#[test]
fn test_work_days_order_is_irrelevant() {
    let forward: WorkDays = WorkDays::parse(&["MONDAY", "WEDNESDAY", "FRIDAY"]).unwrap();
    let backward: WorkDays = WorkDays::parse(&["FRIDAY", "WEDNESDAY", "MONDAY"]).unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn test_work_days_reject_unknown_names() {
    let result: Result<WorkDays, DomainError> = WorkDays::parse(&["MONDAY", "Caturday"]);
    assert_eq!(
        result,
        Err(DomainError::InvalidWeekday(String::from("Caturday")))
    );
}

#[test]
fn test_work_days_iterate_monday_first() {
    let days: WorkDays = [Weekday::Sunday, Weekday::Tuesday, Weekday::Monday]
        .into_iter()
        .collect();
    let ordered: Vec<Weekday> = days.iter().collect();
    assert_eq!(
        ordered,
        vec![Weekday::Monday, Weekday::Tuesday, Weekday::Sunday]
    );
    assert_eq!(days.to_string(), "MONDAY, TUESDAY, SUNDAY");
}

#[test]
fn test_empty_work_days() {
    let days: WorkDays = WorkDays::new();
    assert!(days.is_empty());
    assert_eq!(days.len(), 0);
    assert_eq!(days.iter().count(), 0);
}

#[test]
fn test_work_days_serde_uses_day_names() {
    let days: WorkDays = WorkDays::new()
        .with(Weekday::Friday)
        .with(Weekday::Monday);
    let json: String = serde_json::to_string(&days).unwrap();
    assert_eq!(json, r#"["MONDAY","FRIDAY"]"#);

    let parsed: WorkDays = serde_json::from_str(r#"["friday","MONDAY","MONDAY"]"#).unwrap();
    assert_eq!(parsed, days);
}

#[test]
fn test_work_days_deserialization_rejects_unknown_names() {
    let result: Result<WorkDays, serde_json::Error> = serde_json::from_str(r#"["MONDAY","NOPE"]"#);
    assert!(result.is_err());
}
