// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use cadence_rrule::{Edit, Pattern, describe, mutate, parse, serialize};

/// Errors from [`RecurrenceEditor`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// Edits are rejected while the editor is disabled
    #[error("Recurrence editing is disabled")]
    Disabled,
}

type Listener = Box<dyn FnMut(&str) + Send>;

/// The recurrence editor behind a habit form.
///
/// It holds the current pattern together with its canonical rule string.
/// Each accepted edit runs one mutate and serialize step and emits the new
/// rule to the change listener, if any. The description is derived on demand
/// from the current pattern.
pub struct RecurrenceEditor {
    pattern: Pattern,
    rule: String,
    disabled: bool,
    listener: Option<Listener>,
}

impl RecurrenceEditor {
    /// Creates an editor from the stored rule string, which may be empty,
    /// legacy or canonical.
    #[must_use]
    pub fn new(rule: &str, disabled: bool) -> Self {
        let pattern = parse(rule);
        Self {
            pattern,
            rule: serialize(&pattern),
            disabled,
            listener: None,
        }
    }

    /// Sets the listener called with every emitted rule string.
    #[must_use]
    pub fn with_listener(mut self, listener: impl FnMut(&str) + Send + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Applies one edit and returns the new canonical rule.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Disabled`] if the editor is disabled, in which
    /// case nothing changes and nothing is emitted.
    #[tracing::instrument(skip(self), fields(rule = %self.rule))]
    pub fn apply(&mut self, edit: Edit) -> Result<&str, EditorError> {
        if self.disabled {
            tracing::debug!("editor is disabled, edit rejected");
            return Err(EditorError::Disabled);
        }

        self.pattern = mutate(self.pattern, edit);
        self.rule = serialize(&self.pattern);
        tracing::debug!(next = %self.rule, "rule emitted");

        if let Some(listener) = self.listener.as_mut() {
            listener(&self.rule);
        }
        Ok(&self.rule)
    }

    /// Applies edits in order, stopping at the first rejected one.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Disabled`] if the editor is disabled.
    pub fn apply_all<I>(&mut self, edits: I) -> Result<&str, EditorError>
    where
        I: IntoIterator<Item = Edit>,
    {
        for edit in edits {
            self.apply(edit)?;
        }
        Ok(&self.rule)
    }

    /// Replaces the current rule with one loaded from storage. Nothing is
    /// emitted.
    pub fn load(&mut self, rule: &str) {
        self.pattern = parse(rule);
        self.rule = serialize(&self.pattern);
    }

    /// The current canonical rule string.
    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// The current pattern.
    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// English description of the current pattern.
    #[must_use]
    pub fn preview(&self) -> String {
        describe(&self.pattern)
    }

    /// Enable or disable editing, e.g. while the form is read-only.
    pub const fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

impl fmt::Debug for RecurrenceEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecurrenceEditor")
            .field("pattern", &self.pattern)
            .field("rule", &self.rule)
            .field("disabled", &self.disabled)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
