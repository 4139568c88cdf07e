// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Import workflows: stored rules are audited before they are accepted.

use cadence_core::{AuditError, RuleStatus, audit_rules, ensure_canonical};
use cadence_rrule::{RuleError, parse, serialize};

use crate::common::{STORED_RULES, test_config};

#[test]
fn audit_classifies_export() {
    // Act
    let audits = audit_rules(STORED_RULES.iter().copied());

    // Assert
    let statuses: Vec<_> = audits.iter().map(|a| a.status.clone()).collect();
    assert_eq!(
        statuses,
        vec![
            RuleStatus::Canonical,
            RuleStatus::Normalized {
                canonical: "FREQ=WEEKLY".to_string()
            },
            RuleStatus::Normalized {
                canonical: "FREQ=WEEKLY;BYDAY=MO,FR".to_string()
            },
            RuleStatus::Empty,
            RuleStatus::Canonical,
            RuleStatus::Normalized {
                canonical: "FREQ=DAILY;INTERVAL=3".to_string()
            },
            RuleStatus::Normalized {
                canonical: "FREQ=MONTHLY;BYDAY=2TU".to_string()
            },
            RuleStatus::Normalized {
                canonical: "FREQ=DAILY".to_string()
            },
        ]
    );
}

#[test]
fn normalized_rules_are_stable() {
    for audit in audit_rules(STORED_RULES.iter().copied()) {
        if let RuleStatus::Normalized { canonical } = audit.status {
            assert_eq!(serialize(&parse(&canonical)), canonical);
        }
    }
}

#[test]
fn strict_import_rejects_export() {
    // Arrange
    let config = test_config("FREQ=DAILY", true);
    let audits = audit_rules(STORED_RULES.iter().copied());

    // Act
    let result = if config.strict {
        ensure_canonical(&audits)
    } else {
        Ok(())
    };

    // Assert
    assert_eq!(
        result,
        Err(AuditError::Rule {
            index: 1,
            source: RuleError::NotCanonical {
                input: "weekly".to_string(),
                canonical: "FREQ=WEEKLY".to_string(),
            },
        })
    );
}

#[test]
fn blank_rules_use_configured_default() {
    let mut config = test_config("every 2 weeks", false);
    config.normalize().unwrap();

    let rules: Vec<_> = STORED_RULES
        .iter()
        .map(|rule| config.rule_or_default(rule))
        .collect();
    let audits = audit_rules(rules);

    assert_eq!(audits[3].rule, "FREQ=WEEKLY;INTERVAL=2");
    assert_eq!(audits[3].status, RuleStatus::Canonical);
}
