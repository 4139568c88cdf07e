// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parse, edit, serialize and describe habit recurrence rules.
//!
//! A rule string such as `FREQ=MONTHLY;BYDAY=2TU` is parsed into a
//! [`Pattern`], edited with [`mutate`], written back with [`serialize`] and
//! shown to the user with [`describe`]. All functions are pure and total.
//!
//! ```
//! use cadence_rrule::{Edit, MonthlyMode, describe, mutate, parse, serialize};
//!
//! let pattern = parse("FREQ=MONTHLY;BYMONTHDAY=1");
//! let pattern = mutate(pattern, Edit::SwitchMonthlyMode(MonthlyMode::WeekdayOfMonth));
//! assert_eq!(serialize(&pattern), "FREQ=MONTHLY;BYDAY=1MO");
//! assert_eq!(describe(&pattern), "Every month on the 1st Monday");
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::match_bool, clippy::similar_names)]

mod describe;
mod error;
mod formatter;
mod keyword;
mod lexer;
mod mutate;
mod parser;
mod pattern;

pub use crate::describe::{describe, ordinal, weekday_label, weekday_name};
pub use crate::error::RuleError;
pub use crate::formatter::{serialize, write_pattern};
pub use crate::mutate::{Edit, mutate};
pub use crate::parser::{parse, validate};
pub use crate::pattern::{
    Frequency, Interval, MonthDay, MonthlyMode, MonthlyRule, Pattern, Recurrence, Weekday,
    WeekdayPosition, WeekdaySet,
};
