// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Pattern edits.
//!
//! Every edit is a single transition on an immutable pattern. Edits never
//! fail: an edit that does not apply to the current frequency or monthly
//! mode leaves the pattern unchanged, and out of range values are clamped.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::RuleError;
use crate::keyword::SEP_VALUE;
use crate::pattern::{
    Frequency, Interval, MonthDay, MonthlyMode, MonthlyRule, Pattern, Recurrence, Weekday,
    WeekdayPosition,
};

/// A single user edit of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Change the frequency, resetting the interval and frequency fields
    SetFrequency(Frequency),

    /// Change the interval, clamped to at least one
    SetInterval(i64),

    /// Add or remove a weekday of a weekly pattern
    ToggleWeekday(Weekday),

    /// Switch a monthly pattern between its two modes
    SwitchMonthlyMode(MonthlyMode),

    /// Replace the month day of a monthly pattern in day-of-month mode
    SetMonthDay(i64),

    /// Replace the weekday pair of a monthly pattern in weekday-of-month mode
    SetWeekdayOfMonth(WeekdayPosition, Weekday),
}

/// Apply one edit, returning the new pattern.
///
/// ```
/// # use cadence_rrule::{Edit, Weekday, mutate, parse, serialize};
/// let pattern = parse("FREQ=WEEKLY");
/// let pattern = mutate(pattern, Edit::ToggleWeekday(Weekday::Wednesday));
/// let pattern = mutate(pattern, Edit::ToggleWeekday(Weekday::Monday));
/// assert_eq!(serialize(&pattern), "FREQ=WEEKLY;BYDAY=MO,WE");
/// ```
#[must_use]
pub fn mutate(pattern: Pattern, edit: Edit) -> Pattern {
    match (edit, pattern.recurrence) {
        (Edit::SetFrequency(freq), _) => Pattern::new(freq),

        (Edit::SetInterval(n), _) => Pattern {
            interval: Interval::new(n),
            ..pattern
        },

        (Edit::ToggleWeekday(day), Recurrence::Weekly(days)) => Pattern {
            recurrence: Recurrence::Weekly(days.toggled(day)),
            ..pattern
        },

        (Edit::SwitchMonthlyMode(mode), Recurrence::Monthly(rule)) if rule.mode() != mode => {
            Pattern {
                recurrence: Recurrence::Monthly(MonthlyRule::default_for(mode)),
                ..pattern
            }
        }

        (Edit::SetMonthDay(day), Recurrence::Monthly(MonthlyRule::DayOfMonth(_))) => Pattern {
            recurrence: Recurrence::Monthly(MonthlyRule::DayOfMonth(MonthDay::clamped(day))),
            ..pattern
        },

        (
            Edit::SetWeekdayOfMonth(position, weekday),
            Recurrence::Monthly(MonthlyRule::WeekdayOfMonth { .. }),
        ) => Pattern {
            recurrence: Recurrence::Monthly(MonthlyRule::WeekdayOfMonth { position, weekday }),
            ..pattern
        },

        (edit, _) => {
            tracing::debug!(?edit, freq = %pattern.frequency(), "edit does not apply, ignoring");
            pattern
        }
    }
}

const EDIT_FREQ: &str = "freq";
const EDIT_INTERVAL: &str = "interval";
const EDIT_TOGGLE: &str = "toggle";
const EDIT_MODE: &str = "mode";
const EDIT_MONTHDAY: &str = "monthday";
const EDIT_NTH: &str = "nth";

impl FromStr for Edit {
    type Err = RuleError;

    /// Parse a textual edit command.
    ///
    /// ```txt
    /// edit = "freq=" freq / "interval=" number / "toggle=" weekday
    ///      / "mode=" ( "day" / "weekday" ) / "monthday=" int / "nth=" int weekday
    /// ```
    ///
    /// Keys and values are case-insensitive. The interval may be fractional,
    /// it is floored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| RuleError::InvalidEdit {
            edit: s.to_string(),
            reason,
        };

        let (key, value) = s
            .split_once(SEP_VALUE)
            .ok_or_else(|| invalid("expected KEY=VALUE"))?;
        let value = value.trim();

        match key.trim().to_ascii_lowercase().as_str() {
            EDIT_FREQ => Ok(Edit::SetFrequency(value.parse()?)),
            EDIT_INTERVAL => match value.parse::<i64>() {
                Ok(n) => Ok(Edit::SetInterval(n)),
                Err(_) => value
                    .parse::<f64>()
                    .map(|n| Edit::SetInterval(i64::from(Interval::from_f64(n).get())))
                    .map_err(|_| invalid("interval must be a number")),
            },
            EDIT_TOGGLE => Ok(Edit::ToggleWeekday(value.parse()?)),
            EDIT_MODE => Ok(Edit::SwitchMonthlyMode(value.parse()?)),
            EDIT_MONTHDAY => value
                .parse()
                .map(Edit::SetMonthDay)
                .map_err(|_| invalid("month day must be an integer")),
            EDIT_NTH => {
                let split = value
                    .len()
                    .checked_sub(2)
                    .filter(|i| value.is_char_boundary(*i))
                    .ok_or_else(|| invalid("expected a position followed by a weekday"))?;
                let (position, weekday) = value.split_at(split);
                let position = position
                    .parse()
                    .ok()
                    .and_then(WeekdayPosition::new)
                    .ok_or_else(|| invalid("position must be 1, 2, 3, 4 or -1"))?;
                Ok(Edit::SetWeekdayOfMonth(position, weekday.parse()?))
            }
            _ => Err(invalid("unknown edit")),
        }
    }
}

impl Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::SetFrequency(freq) => write!(f, "{EDIT_FREQ}{SEP_VALUE}{freq}"),
            Edit::SetInterval(n) => write!(f, "{EDIT_INTERVAL}{SEP_VALUE}{n}"),
            Edit::ToggleWeekday(day) => write!(f, "{EDIT_TOGGLE}{SEP_VALUE}{day}"),
            Edit::SwitchMonthlyMode(MonthlyMode::DayOfMonth) => {
                write!(f, "{EDIT_MODE}{SEP_VALUE}day")
            }
            Edit::SwitchMonthlyMode(MonthlyMode::WeekdayOfMonth) => {
                write!(f, "{EDIT_MODE}{SEP_VALUE}weekday")
            }
            Edit::SetMonthDay(day) => write!(f, "{EDIT_MONTHDAY}{SEP_VALUE}{day}"),
            Edit::SetWeekdayOfMonth(position, day) => {
                write!(f, "{EDIT_NTH}{SEP_VALUE}{position}{day}")
            }
        }
    }
}
