// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords of the canonical rule string and the legacy free-text dialect.

// Rule parts
pub const KW_FREQ: &str = "FREQ";
pub const KW_INTERVAL: &str = "INTERVAL";
pub const KW_BYDAY: &str = "BYDAY";
pub const KW_BYMONTHDAY: &str = "BYMONTHDAY";
pub const KW_BYSETPOS: &str = "BYSETPOS";

// Frequencies
pub const KW_FREQ_DAILY: &str = "DAILY";
pub const KW_FREQ_WEEKLY: &str = "WEEKLY";
pub const KW_FREQ_MONTHLY: &str = "MONTHLY";
pub const KW_FREQ_YEARLY: &str = "YEARLY";

// Weekdays, Monday first
pub const KW_DAY_MO: &str = "MO";
pub const KW_DAY_TU: &str = "TU";
pub const KW_DAY_WE: &str = "WE";
pub const KW_DAY_TH: &str = "TH";
pub const KW_DAY_FR: &str = "FR";
pub const KW_DAY_SA: &str = "SA";
pub const KW_DAY_SU: &str = "SU";

// Separators
pub const SEP_PART: char = ';';
pub const SEP_VALUE: char = '=';
pub const SEP_LIST: char = ',';
