// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence pattern type definitions.
//!
//! A [`Pattern`] is a transient value: it is produced by [`parse`](crate::parse),
//! transformed by [`mutate`](crate::mutate) and consumed by
//! [`serialize`](crate::serialize) / [`describe`](crate::describe). Frequency
//! specific data lives inside [`Recurrence`], so a pattern can never carry a
//! field that is meaningless for its frequency.

use std::fmt::{self, Display};
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::error::RuleError;
use crate::keyword::{
    KW_DAY_FR, KW_DAY_MO, KW_DAY_SA, KW_DAY_SU, KW_DAY_TH, KW_DAY_TU, KW_DAY_WE, KW_FREQ_DAILY,
    KW_FREQ_MONTHLY, KW_FREQ_WEEKLY, KW_FREQ_YEARLY,
};

/// Structured recurrence rule.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    /// Every N units of the frequency
    pub interval: Interval,

    /// Frequency together with its frequency specific fields
    pub recurrence: Recurrence,
}

impl Pattern {
    /// Create a pattern with interval 1 and the default fields of the frequency.
    #[must_use]
    pub const fn new(freq: Frequency) -> Self {
        Self {
            interval: Interval::ONE,
            recurrence: Recurrence::default_for(freq),
        }
    }

    /// Frequency of the pattern.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.recurrence.frequency()
    }

    /// Weekday restriction of a weekly pattern, empty for other frequencies.
    #[must_use]
    pub const fn by_day(&self) -> WeekdaySet {
        match self.recurrence {
            Recurrence::Weekly(days) => days,
            _ => WeekdaySet::EMPTY,
        }
    }

    /// Month day of a monthly pattern in day-of-month mode.
    #[must_use]
    pub const fn by_month_day(&self) -> Option<MonthDay> {
        match self.recurrence {
            Recurrence::Monthly(MonthlyRule::DayOfMonth(day)) => Some(day),
            _ => None,
        }
    }

    /// Position and weekday of a monthly pattern in weekday-of-month mode.
    #[must_use]
    pub const fn weekday_of_month(&self) -> Option<(WeekdayPosition, Weekday)> {
        match self.recurrence {
            Recurrence::Monthly(MonthlyRule::WeekdayOfMonth { position, weekday }) => {
                Some((position, weekday))
            }
            _ => None,
        }
    }

    /// Monthly mode, `None` unless the pattern is monthly.
    #[must_use]
    pub const fn monthly_mode(&self) -> Option<MonthlyMode> {
        match self.recurrence {
            Recurrence::Monthly(rule) => Some(rule.mode()),
            _ => None,
        }
    }
}

/// Frequency and the fields that are meaningful for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recurrence {
    /// Every day
    Daily,

    /// Every week, optionally restricted to some weekdays
    Weekly(WeekdaySet),

    /// Every month, on a day of month or on the Nth weekday
    Monthly(MonthlyRule),

    /// Every year
    Yearly,
}

impl Recurrence {
    /// Default fields for the given frequency.
    #[must_use]
    pub const fn default_for(freq: Frequency) -> Self {
        match freq {
            Frequency::Daily => Self::Daily,
            Frequency::Weekly => Self::Weekly(WeekdaySet::EMPTY),
            Frequency::Monthly => Self::Monthly(MonthlyRule::DayOfMonth(MonthDay::FIRST)),
            Frequency::Yearly => Self::Yearly,
        }
    }

    /// The frequency this recurrence belongs to.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        match self {
            Self::Daily => Frequency::Daily,
            Self::Weekly(_) => Frequency::Weekly,
            Self::Monthly(_) => Frequency::Monthly,
            Self::Yearly => Frequency::Yearly,
        }
    }
}

impl Default for Recurrence {
    fn default() -> Self {
        Self::Daily
    }
}

/// Recurrence frequency
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
#[expect(missing_docs)]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Canonical keyword, e.g. `WEEKLY`.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Frequency::Daily => KW_FREQ_DAILY,
            Frequency::Weekly => KW_FREQ_WEEKLY,
            Frequency::Monthly => KW_FREQ_MONTHLY,
            Frequency::Yearly => KW_FREQ_YEARLY,
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Frequency {
    type Err = RuleError;

    /// Case-insensitive match against the canonical keywords.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Frequency::iter()
            .find(|freq| freq.keyword().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RuleError::UnknownFrequency(s.to_string()))
    }
}

/// Day of the week, in canonical Monday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter)]
#[expect(missing_docs)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Two letter code, e.g. `MO`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Weekday::Monday => KW_DAY_MO,
            Weekday::Tuesday => KW_DAY_TU,
            Weekday::Wednesday => KW_DAY_WE,
            Weekday::Thursday => KW_DAY_TH,
            Weekday::Friday => KW_DAY_FR,
            Weekday::Saturday => KW_DAY_SA,
            Weekday::Sunday => KW_DAY_SU,
        }
    }

    /// Zero-based index, Monday is 0.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Weekday {
    type Err = RuleError;

    /// Case-insensitive match against the two letter codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::iter()
            .find(|day| day.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RuleError::UnknownWeekday(s.to_string()))
    }
}

#[cfg(feature = "jiff")]
impl From<Weekday> for jiff::civil::Weekday {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Monday => jiff::civil::Weekday::Monday,
            Weekday::Tuesday => jiff::civil::Weekday::Tuesday,
            Weekday::Wednesday => jiff::civil::Weekday::Wednesday,
            Weekday::Thursday => jiff::civil::Weekday::Thursday,
            Weekday::Friday => jiff::civil::Weekday::Friday,
            Weekday::Saturday => jiff::civil::Weekday::Saturday,
            Weekday::Sunday => jiff::civil::Weekday::Sunday,
        }
    }
}

#[cfg(feature = "jiff")]
impl From<jiff::civil::Weekday> for Weekday {
    fn from(value: jiff::civil::Weekday) -> Self {
        match value {
            jiff::civil::Weekday::Monday => Weekday::Monday,
            jiff::civil::Weekday::Tuesday => Weekday::Tuesday,
            jiff::civil::Weekday::Wednesday => Weekday::Wednesday,
            jiff::civil::Weekday::Thursday => Weekday::Thursday,
            jiff::civil::Weekday::Friday => Weekday::Friday,
            jiff::civil::Weekday::Saturday => Weekday::Saturday,
            jiff::civil::Weekday::Sunday => Weekday::Sunday,
        }
    }
}

/// Set of weekdays, always iterated Monday first.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set, meaning no weekday restriction.
    pub const EMPTY: Self = Self(0);

    const fn bit(day: Weekday) -> u8 {
        1 << day.index()
    }

    /// Whether the set contains the weekday.
    #[must_use]
    pub const fn contains(self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    /// Return the set with the weekday added.
    #[must_use]
    pub const fn with(self, day: Weekday) -> Self {
        Self(self.0 | Self::bit(day))
    }

    /// Return the set with the weekday removed.
    #[must_use]
    pub const fn without(self, day: Weekday) -> Self {
        Self(self.0 & !Self::bit(day))
    }

    /// Add the weekday if absent, remove it if present.
    #[must_use]
    pub const fn toggled(self, day: Weekday) -> Self {
        Self(self.0 ^ Self::bit(day))
    }

    /// Whether no weekday is selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of selected weekdays.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the selected weekdays in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::iter().filter(move |day| self.contains(*day))
    }
}

impl fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// Number of units between occurrences, never less than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval(u32);

impl Interval {
    /// The default interval.
    pub const ONE: Self = Self(1);

    /// Clamp to `max(1, n)`, saturating at `u32::MAX`.
    #[must_use]
    pub fn new(n: i64) -> Self {
        Self(u32::try_from(n.max(1)).unwrap_or(u32::MAX))
    }

    /// Clamp to `max(1, floor(n))`, non-finite input yields one.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_f64(n: f64) -> Self {
        if n.is_finite() {
            // saturating float to int cast
            Self::new(n.floor() as i64)
        } else {
            Self::ONE
        }
    }

    /// Interval value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether the interval is the implicit default.
    #[must_use]
    pub const fn is_one(self) -> bool {
        self.0 == 1
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::ONE
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the month: 1 to 31, or -1 for the last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthDay(i8);

impl MonthDay {
    /// First day of the month.
    pub const FIRST: Self = Self(1);

    /// Last calendar day of the month.
    pub const LAST: Self = Self(-1);

    /// Accept only 1 to 31 and -1.
    #[must_use]
    pub fn new(day: i64) -> Option<Self> {
        match day {
            -1 => Some(Self::LAST),
            1..=31 => i8::try_from(day).ok().map(Self),
            _ => None,
        }
    }

    /// Force any value into the domain: negative values mean the last day,
    /// zero becomes the first day and values past 31 become 31.
    #[must_use]
    pub fn clamped(day: i64) -> Self {
        match day {
            ..=-1 => Self::LAST,
            0 => Self::FIRST,
            _ => Self::new(day.min(31)).unwrap_or(Self::FIRST),
        }
    }

    /// Raw value as written in the rule string.
    #[must_use]
    pub const fn get(self) -> i8 {
        self.0
    }

    /// Whether this is the last day of the month.
    #[must_use]
    pub const fn is_last(self) -> bool {
        self.0 == -1
    }
}

impl Default for MonthDay {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Occurrence of a weekday within the month.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
#[expect(missing_docs)]
pub enum WeekdayPosition {
    #[default]
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl WeekdayPosition {
    /// Accept 1, 2, 3, 4 and -1.
    #[must_use]
    pub const fn new(position: i64) -> Option<Self> {
        match position {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            -1 => Some(Self::Last),
            _ => None,
        }
    }

    /// Raw value as written in the rule string.
    #[must_use]
    pub const fn get(self) -> i8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Last => -1,
        }
    }
}

impl Display for WeekdayPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Monthly mode, derived from the monthly rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthlyMode {
    /// A fixed day of the month
    DayOfMonth,

    /// The Nth (or last) weekday of the month
    WeekdayOfMonth,
}

impl FromStr for MonthlyMode {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "day_of_month" | "day-of-month" => Ok(Self::DayOfMonth),
            "weekday" | "weekday_of_month" | "weekday-of-month" => Ok(Self::WeekdayOfMonth),
            _ => Err(RuleError::UnknownMonthlyMode(s.to_string())),
        }
    }
}

/// Fields of a monthly pattern, one mode at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthlyRule {
    /// On a fixed day of the month
    DayOfMonth(MonthDay),

    /// On the Nth (or last) weekday of the month
    WeekdayOfMonth {
        /// Occurrence within the month
        position: WeekdayPosition,
        /// Weekday
        weekday: Weekday,
    },
}

impl MonthlyRule {
    /// Default rule of a mode: day 1, or the first Monday.
    #[must_use]
    pub const fn default_for(mode: MonthlyMode) -> Self {
        match mode {
            MonthlyMode::DayOfMonth => Self::DayOfMonth(MonthDay::FIRST),
            MonthlyMode::WeekdayOfMonth => Self::WeekdayOfMonth {
                position: WeekdayPosition::First,
                weekday: Weekday::Monday,
            },
        }
    }

    /// Mode of this rule.
    #[must_use]
    pub const fn mode(&self) -> MonthlyMode {
        match self {
            Self::DayOfMonth(_) => MonthlyMode::DayOfMonth,
            Self::WeekdayOfMonth { .. } => MonthlyMode::WeekdayOfMonth,
        }
    }
}

impl Default for MonthlyRule {
    fn default() -> Self {
        Self::default_for(MonthlyMode::DayOfMonth)
    }
}
