// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors reported by the strict entry points.
///
/// The engine itself never fails: [`parse`](crate::parse) degrades to the
/// default pattern and edits are clamped. These errors only come from
/// [`validate`](crate::validate) and the `FromStr` implementations used by
/// callers that want to reject bad input instead of repairing it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The rule string is blank
    #[error("Rule is empty")]
    Empty,

    /// The rule string parses, but is not in canonical form
    #[error("Rule '{input}' is not canonical, expected '{canonical}'")]
    NotCanonical {
        /// The rule as given
        input: String,
        /// The canonical form of the parsed rule
        canonical: String,
    },

    /// Unknown frequency keyword
    #[error("Unknown frequency: {0}")]
    UnknownFrequency(String),

    /// Unknown weekday code
    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    /// Unknown monthly mode
    #[error("Unknown monthly mode: {0}")]
    UnknownMonthlyMode(String),

    /// Malformed edit command
    #[error("Invalid edit '{edit}': {reason}")]
    InvalidEdit {
        /// The edit as given
        edit: String,
        /// Why it was rejected
        reason: &'static str,
    },
}
