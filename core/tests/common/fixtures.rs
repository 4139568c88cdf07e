// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::sync::{Arc, Mutex};

use cadence_core::{Config, RecurrenceEditor};

/// Rules as they may be found in an older habit export: canonical, legacy,
/// reordered, blank and unreadable.
pub const STORED_RULES: &[&str] = &[
    "FREQ=DAILY",
    "weekly",
    "FREQ=WEEKLY;BYDAY=FR,MO",
    "",
    "FREQ=MONTHLY;BYDAY=-1SU",
    "every 3 days",
    "FREQ=MONTHLY;BYDAY=TU;BYSETPOS=2",
    "fortnightly",
];

/// Creates a test configuration.
#[must_use]
pub fn test_config(default_rule: &str, strict: bool) -> Config {
    Config {
        default_rule: default_rule.to_string(),
        strict,
    }
}

/// An editor whose emitted rules are recorded.
pub struct RecordingEditor {
    pub editor: RecurrenceEditor,
    emitted: Arc<Mutex<Vec<String>>>,
}

impl RecordingEditor {
    #[must_use]
    pub fn new(rule: &str, disabled: bool) -> Self {
        let emitted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&emitted);
        let editor = RecurrenceEditor::new(rule, disabled)
            .with_listener(move |rule| sink.lock().unwrap().push(rule.to_string()));
        Self { editor, emitted }
    }

    /// Rules emitted so far.
    #[must_use]
    pub fn emitted(&self) -> Vec<String> {
        self.emitted.lock().unwrap().clone()
    }
}
