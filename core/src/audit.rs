// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Auditing of stored rule strings, e.g. before an import.

use cadence_rrule::{RuleError, validate};

/// Errors from strict rule checks.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuditError {
    /// A stored rule is blank or not canonical
    #[error("Rule #{index}: {source}")]
    Rule {
        /// Zero-based position of the rule in the batch
        index: usize,
        /// Why the rule was rejected
        #[source]
        source: RuleError,
    },

    /// The configured default rule is blank or not canonical
    #[error("Invalid default rule: {0}")]
    DefaultRule(#[source] RuleError),
}

/// Status of one stored rule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RuleStatus {
    /// Already canonical, stored as is
    Canonical,

    /// Parses, but should be rewritten to the canonical form
    Normalized {
        /// The canonical replacement
        canonical: String,
    },

    /// Blank, the habit has no rule
    Empty,
}

impl RuleStatus {
    /// Whether the stored string can be kept unchanged.
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        matches!(self, Self::Canonical)
    }
}

/// Audit result of one stored rule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RuleAudit {
    /// Zero-based position of the rule in the batch
    pub index: usize,

    /// The rule as stored
    pub rule: String,

    #[serde(flatten)]
    pub status: RuleStatus,
}

/// Classify a single stored rule.
#[must_use]
pub fn audit_rule(rule: &str) -> RuleStatus {
    match validate(rule) {
        Ok(_) => RuleStatus::Canonical,
        Err(RuleError::NotCanonical { canonical, .. }) => RuleStatus::Normalized { canonical },
        Err(_) => RuleStatus::Empty,
    }
}

/// Classify a batch of stored rules.
pub fn audit_rules<'a, I>(rules: I) -> Vec<RuleAudit>
where
    I: IntoIterator<Item = &'a str>,
{
    rules
        .into_iter()
        .enumerate()
        .map(|(index, rule)| {
            let status = audit_rule(rule);
            tracing::debug!(index, rule, ?status, "audited rule");
            RuleAudit {
                index,
                rule: rule.to_string(),
                status,
            }
        })
        .collect()
}

/// Strict mode: fail on the first rule that is not canonical.
///
/// # Errors
///
/// Returns [`AuditError::Rule`] for the first blank or non-canonical rule.
pub fn ensure_canonical(audits: &[RuleAudit]) -> Result<(), AuditError> {
    let Some(audit) = audits.iter().find(|a| !a.status.is_canonical()) else {
        return Ok(());
    };

    let source = match &audit.status {
        RuleStatus::Normalized { canonical } => RuleError::NotCanonical {
            input: audit.rule.clone(),
            canonical: canonical.clone(),
        },
        RuleStatus::Canonical | RuleStatus::Empty => RuleError::Empty,
    };
    Err(AuditError::Rule {
        index: audit.index,
        source,
    })
}
