// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical rule string formatting.
//!
//! The canonical form is the only representation that leaves the engine. Its
//! field order is fixed: `FREQ`, then `INTERVAL` unless it is 1, then the
//! frequency specific field.

use std::fmt::{self, Display, Write};

use crate::keyword::{
    KW_BYDAY, KW_BYMONTHDAY, KW_FREQ, KW_INTERVAL, SEP_LIST, SEP_PART, SEP_VALUE,
};
use crate::pattern::{MonthlyRule, Pattern, Recurrence, WeekdaySet};

/// Serialize a pattern to its canonical rule string.
///
/// ```
/// # use cadence_rrule::{Frequency, Pattern, serialize};
/// assert_eq!(serialize(&Pattern::new(Frequency::Monthly)), "FREQ=MONTHLY;BYMONTHDAY=1");
/// ```
#[must_use]
pub fn serialize(pattern: &Pattern) -> String {
    pattern.to_string()
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pattern(f, self)
    }
}

/// Write the canonical form of a pattern.
///
/// # Errors
///
/// Only fails if the underlying writer fails.
pub fn write_pattern<W: Write>(f: &mut W, pattern: &Pattern) -> fmt::Result {
    // FREQ is always present
    write!(f, "{KW_FREQ}{SEP_VALUE}{}", pattern.frequency())?;

    // INTERVAL only when it differs from the default
    if !pattern.interval.is_one() {
        write!(f, "{SEP_PART}{KW_INTERVAL}{SEP_VALUE}{}", pattern.interval)?;
    }

    match pattern.recurrence {
        Recurrence::Weekly(days) if !days.is_empty() => {
            write!(f, "{SEP_PART}{KW_BYDAY}{SEP_VALUE}")?;
            write_weekday_list(f, days)?;
        }
        Recurrence::Monthly(MonthlyRule::DayOfMonth(day)) => {
            write!(f, "{SEP_PART}{KW_BYMONTHDAY}{SEP_VALUE}{day}")?;
        }
        Recurrence::Monthly(MonthlyRule::WeekdayOfMonth { position, weekday }) => {
            write!(f, "{SEP_PART}{KW_BYDAY}{SEP_VALUE}{position}{weekday}")?;
        }
        Recurrence::Daily | Recurrence::Weekly(_) | Recurrence::Yearly => {}
    }

    Ok(())
}

/// Format a weekday set, e.g. "MO,WE,FR".
fn write_weekday_list<W: Write>(f: &mut W, days: WeekdaySet) -> fmt::Result {
    for (i, day) in days.iter().enumerate() {
        if i > 0 {
            f.write_char(SEP_LIST)?;
        }
        write!(f, "{day}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{
        Frequency, Interval, MonthDay, Weekday, WeekdayPosition,
    };

    #[test]
    fn formats_frequency_only() {
        let cases = [
            (Frequency::Daily, "FREQ=DAILY"),
            (Frequency::Weekly, "FREQ=WEEKLY"),
            (Frequency::Monthly, "FREQ=MONTHLY;BYMONTHDAY=1"),
            (Frequency::Yearly, "FREQ=YEARLY"),
        ];
        for (freq, expected) in cases {
            assert_eq!(serialize(&Pattern::new(freq)), expected);
        }
    }

    #[test]
    fn omits_default_interval() {
        let pattern = Pattern {
            interval: Interval::new(1),
            ..Pattern::new(Frequency::Daily)
        };
        assert_eq!(serialize(&pattern), "FREQ=DAILY");

        let pattern = Pattern {
            interval: Interval::new(3),
            ..Pattern::new(Frequency::Yearly)
        };
        assert_eq!(serialize(&pattern), "FREQ=YEARLY;INTERVAL=3");
    }

    #[test]
    fn formats_weekdays_in_canonical_order() {
        let days = [Weekday::Sunday, Weekday::Friday, Weekday::Monday]
            .into_iter()
            .collect();
        let pattern = Pattern {
            interval: Interval::new(2),
            recurrence: Recurrence::Weekly(days),
        };
        assert_eq!(serialize(&pattern), "FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,FR,SU");
    }

    #[test]
    fn formats_monthly_modes() {
        let pattern = Pattern {
            interval: Interval::ONE,
            recurrence: Recurrence::Monthly(MonthlyRule::DayOfMonth(MonthDay::LAST)),
        };
        assert_eq!(serialize(&pattern), "FREQ=MONTHLY;BYMONTHDAY=-1");

        let pattern = Pattern {
            interval: Interval::ONE,
            recurrence: Recurrence::Monthly(MonthlyRule::WeekdayOfMonth {
                position: WeekdayPosition::Last,
                weekday: Weekday::Monday,
            }),
        };
        assert_eq!(serialize(&pattern), "FREQ=MONTHLY;BYDAY=-1MO");

        let pattern = Pattern {
            interval: Interval::new(6),
            recurrence: Recurrence::Monthly(MonthlyRule::WeekdayOfMonth {
                position: WeekdayPosition::Second,
                weekday: Weekday::Tuesday,
            }),
        };
        assert_eq!(serialize(&pattern), "FREQ=MONTHLY;INTERVAL=6;BYDAY=2TU");
    }

    #[test]
    fn writes_into_any_fmt_writer() {
        let mut buf = String::from("RRULE:");
        write_pattern(&mut buf, &Pattern::new(Frequency::Weekly)).unwrap();
        assert_eq!(buf, "RRULE:FREQ=WEEKLY");
    }
}
