// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use cadence_rrule::{Pattern, describe, serialize};
use colored::Colorize;

/// The output format for commands
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

/// A rule as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RuleOutput {
    pub input: String,
    pub rule: String,
    pub canonical: bool,
    pub description: String,
}

impl RuleOutput {
    pub fn new(input: &str, pattern: &Pattern) -> Self {
        let rule = serialize(pattern);
        Self {
            input: input.to_string(),
            canonical: rule == input,
            description: describe(pattern),
            rule,
        }
    }

    pub fn table(&self) -> String {
        let mut rows = vec![("Rule", self.rule.bold().to_string())];
        if !self.canonical {
            rows.push(("Input", self.input.dimmed().to_string()));
        }
        rows.push(("Description", self.description.clone()));
        format_rows(&rows)
    }
}

/// Format key-value rows with the keys padded to the same width.
pub fn format_rows(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(k, v)| format!("{k:<width$}  {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}
