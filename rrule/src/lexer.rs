// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lexer for the legacy free-text rule dialect.
//!
//! Older stored rules are plain words such as `weekly` or `Every 3 days`.
//! Matching is case-insensitive and whitespace is not significant.

use logos::Logos;

use crate::pattern::{Frequency, Interval, Pattern};

/// Token of the legacy dialect
#[derive(Debug, PartialEq, Eq, Clone, Copy, Logos)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum Token<'a> {
    #[token("daily", ignore(case))]
    Daily,

    #[token("weekly", ignore(case))]
    Weekly,

    #[token("monthly", ignore(case))]
    Monthly,

    #[token("yearly", ignore(case))]
    Yearly,

    #[token("every", ignore(case))]
    Every,

    #[token("day", ignore(case))]
    #[token("days", ignore(case))]
    Day,

    #[token("week", ignore(case))]
    #[token("weeks", ignore(case))]
    Week,

    #[regex("[0-9]+")]
    Number(&'a str),
}

/// Tokenize the input, `None` if any part of it is not a legacy token.
pub(crate) fn tokenize(src: &str) -> Option<Vec<Token<'_>>> {
    Token::lexer(src).collect::<Result<Vec<_>, _>>().ok()
}

/// Match a whole legacy phrase.
///
/// ```txt
/// legacy = "daily" / "weekly" / "monthly" / "yearly"
///        / "every" 1*DIGIT ( "day" / "days" / "week" / "weeks" )
/// ```
pub(crate) fn parse_legacy(src: &str) -> Option<Pattern> {
    let tokens = tokenize(src)?;
    let pattern = match tokens.as_slice() {
        [Token::Daily] => Pattern::new(Frequency::Daily),
        [Token::Weekly] => Pattern::new(Frequency::Weekly),
        [Token::Monthly] => Pattern::new(Frequency::Monthly),
        [Token::Yearly] => Pattern::new(Frequency::Yearly),
        [Token::Every, Token::Number(n), unit @ (Token::Day | Token::Week)] => {
            let freq = match unit {
                Token::Week => Frequency::Weekly,
                _ => Frequency::Daily,
            };
            Pattern {
                interval: parse_interval(n),
                ..Pattern::new(freq)
            }
        }
        _ => return None,
    };
    Some(pattern)
}

fn parse_interval(digits: &str) -> Interval {
    match lexical::parse::<i64, _>(digits) {
        Ok(n) => Interval::new(n),
        // only digits reach here, so the value overflowed
        Err(_) => Interval::new(i64::MAX),
    }
}
