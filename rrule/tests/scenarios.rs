// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end scenarios: a rule string goes through parse, edits, serialize
//! and describe, the way the habit form drives the engine.

use cadence_rrule::{Edit, Frequency, MonthlyMode, Weekday, describe, mutate, parse, serialize};

#[test]
fn empty_rule_is_every_day() {
    let pattern = parse("");
    assert_eq!(describe(&pattern), "Every day");
    assert_eq!(serialize(&pattern), "FREQ=DAILY");
}

#[test]
fn daily_with_interval() {
    let pattern = parse("FREQ=DAILY;INTERVAL=3");
    assert_eq!(describe(&pattern), "Every 3 days");
}

#[test]
fn weekly_with_three_days() {
    let pattern = parse("FREQ=WEEKLY;BYDAY=MO,WE,FR");
    assert_eq!(describe(&pattern), "Every week on Mon, Wed, and Fri");
}

#[test]
fn weekly_with_two_days() {
    let pattern = parse("FREQ=WEEKLY;BYDAY=MO,WE");
    assert_eq!(describe(&pattern), "Every week on Mon and Wed");
}

#[test]
fn toggle_first_weekday() {
    let pattern = mutate(parse("FREQ=WEEKLY"), Edit::ToggleWeekday(Weekday::Monday));
    assert_eq!(serialize(&pattern), "FREQ=WEEKLY;BYDAY=MO");
}

#[test]
fn switch_to_weekday_of_month() {
    let pattern = mutate(
        parse("FREQ=MONTHLY;BYMONTHDAY=1"),
        Edit::SwitchMonthlyMode(MonthlyMode::WeekdayOfMonth),
    );
    assert_eq!(serialize(&pattern), "FREQ=MONTHLY;BYDAY=1MO");
}

#[test]
fn last_day_of_month() {
    let pattern = parse("FREQ=MONTHLY;BYMONTHDAY=-1");
    assert_eq!(describe(&pattern), "Every month on the last day");
}

#[test]
fn second_tuesday_of_month() {
    let pattern = parse("FREQ=MONTHLY;BYDAY=2TU");
    assert_eq!(describe(&pattern), "Every month on the 2nd Tuesday");
}

#[test]
fn legacy_every_n_days() {
    let pattern = parse("every 3 days");
    assert_eq!(serialize(&pattern), "FREQ=DAILY;INTERVAL=3");
    assert_eq!(describe(&pattern), "Every 3 days");
}

#[test]
fn legacy_keywords_serialize_canonically() {
    let cases = [
        ("daily", "FREQ=DAILY", "Every day"),
        ("Weekly", "FREQ=WEEKLY", "Every week"),
        ("MONTHLY", "FREQ=MONTHLY;BYMONTHDAY=1", "Every month on the 1st"),
        ("yearly", "FREQ=YEARLY", "Every year"),
        ("Every 2 Weeks", "FREQ=WEEKLY;INTERVAL=2", "Every 2 weeks"),
        ("every 1 day", "FREQ=DAILY", "Every day"),
    ];
    for (src, rule, description) in cases {
        let pattern = parse(src);
        assert_eq!(serialize(&pattern), rule, "Failed for {src}");
        assert_eq!(describe(&pattern), description, "Failed for {src}");
    }
}

#[test]
fn yearly_interval_description() {
    // "Every N years" mirrors the daily wording, nothing upstream pins it down
    let pattern = parse("FREQ=YEARLY;INTERVAL=2");
    assert_eq!(describe(&pattern), "Every 2 years");
}

#[test]
fn frequency_switch_drops_custom_interval() {
    let pattern = parse("FREQ=DAILY;INTERVAL=5");
    for freq in [Frequency::Weekly, Frequency::Yearly] {
        let next = mutate(pattern, Edit::SetFrequency(freq));
        assert!(next.interval.is_one());
        assert!(!serialize(&next).contains("INTERVAL"));
    }
}

#[test]
fn form_session() {
    // build "every 2 weeks on Tue and Thu" from scratch, then switch to monthly
    let edits = [
        Edit::SetFrequency(Frequency::Weekly),
        Edit::SetInterval(2),
        Edit::ToggleWeekday(Weekday::Thursday),
        Edit::ToggleWeekday(Weekday::Tuesday),
    ];
    let pattern = edits.into_iter().fold(parse(""), mutate);
    assert_eq!(serialize(&pattern), "FREQ=WEEKLY;INTERVAL=2;BYDAY=TU,TH");
    assert_eq!(describe(&pattern), "Every 2 weeks on Tue and Thu");

    let edits = [
        Edit::SetFrequency(Frequency::Monthly),
        Edit::SwitchMonthlyMode(MonthlyMode::WeekdayOfMonth),
        Edit::SetWeekdayOfMonth(cadence_rrule::WeekdayPosition::Last, Weekday::Friday),
    ];
    let pattern = edits.into_iter().fold(pattern, mutate);
    assert_eq!(serialize(&pattern), "FREQ=MONTHLY;BYDAY=-1FR");
    assert_eq!(describe(&pattern), "Every month on the last Friday");
}
