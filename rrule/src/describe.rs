// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Human readable descriptions of patterns, in English.

use crate::pattern::{MonthlyRule, Pattern, Recurrence, Weekday, WeekdayPosition, WeekdaySet};

/// Describe a pattern as an English sentence.
///
/// ```
/// # use cadence_rrule::{describe, parse};
/// assert_eq!(describe(&parse("FREQ=DAILY;INTERVAL=3")), "Every 3 days");
/// assert_eq!(
///     describe(&parse("FREQ=WEEKLY;BYDAY=MO,WE,FR")),
///     "Every week on Mon, Wed, and Fri"
/// );
/// assert_eq!(describe(&parse("FREQ=MONTHLY;BYDAY=-1SU")), "Every month on the last Sunday");
/// ```
#[must_use]
pub fn describe(pattern: &Pattern) -> String {
    let n = pattern.interval.get();
    let mut out = match pattern.recurrence {
        Recurrence::Daily => every(n, "day", "days"),
        Recurrence::Weekly(_) => every(n, "week", "weeks"),
        Recurrence::Monthly(_) => every(n, "month", "months"),
        Recurrence::Yearly => every(n, "year", "years"),
    };

    match pattern.recurrence {
        Recurrence::Weekly(days) if !days.is_empty() => {
            out.push_str(" on ");
            out.push_str(&weekday_list(days));
        }
        Recurrence::Monthly(MonthlyRule::DayOfMonth(day)) if day.is_last() => {
            out.push_str(" on the last day");
        }
        Recurrence::Monthly(MonthlyRule::DayOfMonth(day)) => {
            out.push_str(&format!(" on the {}", ordinal(i64::from(day.get()))));
        }
        Recurrence::Monthly(MonthlyRule::WeekdayOfMonth {
            position: WeekdayPosition::Last,
            weekday,
        }) => {
            out.push_str(&format!(" on the last {}", weekday_name(weekday)));
        }
        Recurrence::Monthly(MonthlyRule::WeekdayOfMonth { position, weekday }) => {
            out.push_str(&format!(
                " on the {} {}",
                ordinal(i64::from(position.get())),
                weekday_name(weekday)
            ));
        }
        Recurrence::Daily | Recurrence::Weekly(_) | Recurrence::Yearly => {}
    }

    out
}

/// "Every day" / "Every 3 days"
fn every(n: u32, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("Every {singular}")
    } else {
        format!("Every {n} {plural}")
    }
}

/// English ordinal of a number: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st ...
#[must_use]
pub fn ordinal(n: i64) -> String {
    let suffix = match (n.abs() % 10, n.abs() % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Short label of a weekday, e.g. "Mon".
#[must_use]
pub const fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

/// Full name of a weekday, e.g. "Monday".
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
        Weekday::Sunday => "Sunday",
    }
}

/// Join weekday labels: "Mon", "Mon and Wed", "Mon, Wed, and Fri".
fn weekday_list(days: WeekdaySet) -> String {
    let labels: Vec<_> = days.iter().map(weekday_label).collect();
    match labels.as_slice() {
        [] => String::new(),
        [one] => (*one).to_string(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}
