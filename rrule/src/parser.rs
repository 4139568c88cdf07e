// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parser for rule strings.
//!
//! Two dialects are accepted. The canonical dialect is a list of rule parts:
//!
//! ```txt
//! rule      = rule-part *( ";" rule-part )
//! rule-part = ( "FREQ" "=" freq )
//!           / ( "INTERVAL" "=" int )
//!           / ( "BYDAY" "=" bywdaylist )
//!           / ( "BYMONTHDAY" "=" int )
//!           / ( "BYSETPOS" "=" int )
//! ```
//!
//! Parsing is lenient: a part that does not match the grammar, including a
//! part with an unknown key, is skipped. Input without any `KEY=VALUE` part
//! is tried against the legacy dialect (see [`crate::lexer`]).

use chumsky::extra;
use chumsky::prelude::*;

use crate::error::RuleError;
use crate::formatter::serialize;
use crate::keyword::{
    KW_BYDAY, KW_BYMONTHDAY, KW_BYSETPOS, KW_DAY_FR, KW_DAY_MO, KW_DAY_SA, KW_DAY_SU, KW_DAY_TH,
    KW_DAY_TU, KW_DAY_WE, KW_FREQ, KW_FREQ_DAILY, KW_FREQ_MONTHLY, KW_FREQ_WEEKLY, KW_FREQ_YEARLY,
    KW_INTERVAL, SEP_LIST, SEP_PART, SEP_VALUE,
};
use crate::lexer::parse_legacy;
use crate::pattern::{
    Frequency, Interval, MonthDay, MonthlyRule, Pattern, Recurrence, Weekday, WeekdayPosition,
};

type Extra<'src> = extra::Err<Rich<'src, char>>;

/// Parse a rule string into a pattern.
///
/// Never fails: empty or unparseable input yields the default pattern, which
/// is every day.
///
/// ```
/// # use cadence_rrule::{Frequency, parse};
/// let pattern = parse("FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,FR");
/// assert_eq!(pattern.frequency(), Frequency::Weekly);
/// assert_eq!(pattern.interval.get(), 2);
///
/// let legacy = parse("Every 3 days");
/// assert_eq!(legacy.interval.get(), 3);
///
/// assert_eq!(parse("nonsense"), parse(""));
/// ```
#[must_use]
pub fn parse(input: &str) -> Pattern {
    let input = input.trim();
    if input.is_empty() {
        return Pattern::default();
    }

    if input.contains(SEP_VALUE) {
        return parse_canonical(input);
    }

    parse_legacy(input).unwrap_or_else(|| {
        tracing::debug!(input, "unrecognized rule, falling back to default");
        Pattern::default()
    })
}

/// Parse a rule string, rejecting anything that is not already canonical.
///
/// Useful when importing stored rules: a rule is accepted only if
/// `serialize(parse(rule)) == rule`.
///
/// # Errors
///
/// [`RuleError::Empty`] for blank input, [`RuleError::NotCanonical`] with the
/// canonical replacement otherwise.
///
/// ```
/// # use cadence_rrule::{RuleError, validate};
/// assert!(validate("FREQ=WEEKLY;BYDAY=MO,FR").is_ok());
/// assert_eq!(
///     validate("weekly"),
///     Err(RuleError::NotCanonical {
///         input: "weekly".to_string(),
///         canonical: "FREQ=WEEKLY".to_string(),
///     })
/// );
/// ```
pub fn validate(input: &str) -> Result<Pattern, RuleError> {
    if input.trim().is_empty() {
        return Err(RuleError::Empty);
    }

    let pattern = parse(input);
    let canonical = serialize(&pattern);
    if canonical == input {
        Ok(pattern)
    } else {
        Err(RuleError::NotCanonical {
            input: input.to_string(),
            canonical,
        })
    }
}

fn parse_canonical(input: &str) -> Pattern {
    let parts = input
        .split(SEP_PART)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| match rule_part().parse(part).into_result() {
            Ok(part) => Some(part),
            Err(errs) => {
                for err in errs {
                    tracing::debug!(part, %err, "skipping rule part");
                }
                None
            }
        });

    build_from_parts(parts)
}

/// Fold rule parts into a pattern. Later parts override earlier ones.
fn build_from_parts(parts: impl IntoIterator<Item = Part>) -> Pattern {
    let mut freq = None;
    let mut interval = None;
    let mut by_day = Vec::new();
    let mut by_month_day = None;
    let mut by_set_pos = None;

    for part in parts {
        match part {
            Part::Freq(f) => freq = Some(f),
            Part::Interval(i) => interval = Some(i),
            Part::ByDay(days) => by_day = days,
            Part::ByMonthDay(d) => by_month_day = Some(d),
            Part::BySetPos(p) => by_set_pos = Some(p),
        }
    }

    let freq = freq.unwrap_or_default();
    let interval = interval.map_or(Interval::ONE, Interval::new);
    let recurrence = match freq {
        Frequency::Daily => Recurrence::Daily,
        Frequency::Weekly => Recurrence::Weekly(by_day.iter().map(|d| d.day).collect()),
        Frequency::Monthly => Recurrence::Monthly(monthly_rule(&by_day, by_month_day, by_set_pos)),
        Frequency::Yearly => Recurrence::Yearly,
    };

    Pattern {
        interval,
        recurrence,
    }
}

/// Pick the monthly mode. A positioned weekday (`2TU`, or `TU` together
/// with `BYSETPOS=2`) wins over a month day; anything out of range falls
/// back to the first day of the month.
fn monthly_rule(
    by_day: &[WeekdayNum],
    by_month_day: Option<i64>,
    by_set_pos: Option<i64>,
) -> MonthlyRule {
    let weekday_of_month = by_day.first().and_then(|wn| {
        let position = wn.occurrence.or(by_set_pos)?;
        let position = WeekdayPosition::new(position)?;
        Some(MonthlyRule::WeekdayOfMonth {
            position,
            weekday: wn.day,
        })
    });

    weekday_of_month
        .or_else(|| by_month_day.and_then(MonthDay::new).map(MonthlyRule::DayOfMonth))
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
enum Part {
    Freq(Frequency),
    Interval(i64),
    ByDay(Vec<WeekdayNum>),
    ByMonthDay(i64),
    BySetPos(i64),
}

/// Weekday with optional occurrence, e.g. `MO`, `2TU` or `-1FR`
#[derive(Debug, Clone, Copy)]
struct WeekdayNum {
    day: Weekday,
    occurrence: Option<i64>,
}

fn rule_part<'src>() -> impl Parser<'src, &'src str, Part, Extra<'src>> {
    let kw = |kw| just(kw).ignore_then(just(SEP_VALUE));

    let freq = kw(KW_FREQ).ignore_then(freq()).map(Part::Freq);

    let interval = kw(KW_INTERVAL).ignore_then(int()).map(Part::Interval);

    let by_day = kw(KW_BYDAY).ignore_then(bywdaylist()).map(Part::ByDay);

    let by_month_day = kw(KW_BYMONTHDAY)
        .ignore_then(int())
        .map(Part::ByMonthDay);

    let by_set_pos = kw(KW_BYSETPOS).ignore_then(int()).map(Part::BySetPos);

    choice((freq, interval, by_day, by_month_day, by_set_pos)).then_ignore(end())
}

/// ```txt
/// freq = "DAILY" / "WEEKLY" / "MONTHLY" / "YEARLY"
/// ```
fn freq<'src>() -> impl Parser<'src, &'src str, Frequency, Extra<'src>> {
    choice((
        just(KW_FREQ_DAILY).to(Frequency::Daily),
        just(KW_FREQ_WEEKLY).to(Frequency::Weekly),
        just(KW_FREQ_MONTHLY).to(Frequency::Monthly),
        just(KW_FREQ_YEARLY).to(Frequency::Yearly),
    ))
}

/// ```txt
/// bywdaylist = weekdaynum *( "," weekdaynum )
/// weekdaynum = [int] weekday
/// ```
fn bywdaylist<'src>() -> impl Parser<'src, &'src str, Vec<WeekdayNum>, Extra<'src>> {
    int()
        .or_not()
        .then(weekday())
        .map(|(occurrence, day)| WeekdayNum { day, occurrence })
        .separated_by(just(SEP_LIST))
        .at_least(1)
        .collect()
}

/// ```txt
/// weekday = "MO" / "TU" / "WE" / "TH" / "FR" / "SA" / "SU"
/// ```
fn weekday<'src>() -> impl Parser<'src, &'src str, Weekday, Extra<'src>> {
    choice((
        just(KW_DAY_MO).to(Weekday::Monday),
        just(KW_DAY_TU).to(Weekday::Tuesday),
        just(KW_DAY_WE).to(Weekday::Wednesday),
        just(KW_DAY_TH).to(Weekday::Thursday),
        just(KW_DAY_FR).to(Weekday::Friday),
        just(KW_DAY_SA).to(Weekday::Saturday),
        just(KW_DAY_SU).to(Weekday::Sunday),
    ))
}

/// ```txt
/// int = [ "+" / "-" ] 1*DIGIT
/// ```
///
/// Range checks are left to the pattern types so that `INTERVAL=0` or
/// `INTERVAL=-2` still parse and get clamped.
fn int<'src>() -> impl Parser<'src, &'src str, i64, Extra<'src>> {
    let sign = select! { c @ ('+' | '-') => c }.or_not();
    let digits = select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .at_most(18) // i64 holds any 18 digit number
        .collect::<String>();

    sign.then(digits).try_map(|(sign, digits), span| {
        let n = lexical::parse::<i64, _>(&digits)
            .map_err(|_| Rich::custom(span, "integer out of range"))?;
        Ok(if sign == Some('-') { -n } else { n })
    })
}
