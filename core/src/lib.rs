// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Cadence core: the recurrence editor a habit form drives, the user
//! configuration, and auditing of stored rules.

mod audit;
mod config;
mod editor;

pub use crate::audit::{
    AuditError, RuleAudit, RuleStatus, audit_rule, audit_rules, ensure_canonical,
};
pub use crate::config::{APP_NAME, Config};
pub use crate::editor::{EditorError, RecurrenceEditor};
