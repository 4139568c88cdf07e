// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use cadence_core::{AuditError, Config as CoreConfig, RuleAudit, RuleStatus, audit_rules, ensure_canonical};
use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use tokio::fs;

use crate::arg::CommonArgs;
use crate::config::Config;
use crate::util::OutputFormat;

const COMMENT: char = '#';

/// Check a file of stored rules, one per line.
///
/// Lines starting with `#` are comments. A blank line is a habit without a
/// rule.
#[derive(Debug, Clone)]
pub struct CmdCheck {
    pub path: PathBuf,
    pub strict: bool,
    pub verbose: bool,
    pub output_format: Option<OutputFormat>,
}

impl CmdCheck {
    pub const NAME: &str = "check";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check a file of stored rules, one rule per line")
            .arg(
                arg!(path: <FILE> "Path to the rules file")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(CommonArgs::strict())
            .arg(CommonArgs::verbose())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            path: matches
                .get_one::<PathBuf>("path")
                .cloned()
                .unwrap_or_default(),
            strict: CommonArgs::get_strict(matches),
            verbose: CommonArgs::get_verbose(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, core: &CoreConfig, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking rules...");
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            format!(
                "Failed to read rules file at {}: {}",
                self.path.display(),
                e
            )
        })?;

        let report = CheckReport::new(&content);
        if self.strict || core.strict {
            report.ensure_canonical()?;
        }

        match config.output_format(self.output_format) {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report.entries)?),
            OutputFormat::Table => report.print(self.verbose),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, serde::Serialize)]
struct CheckEntry {
    line: usize,
    #[serde(flatten)]
    audit: RuleAudit,
}

#[derive(Debug, Clone)]
struct CheckReport {
    entries: Vec<CheckEntry>,
}

impl CheckReport {
    fn new(content: &str) -> Self {
        let (lines, rules): (Vec<_>, Vec<_>) = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim_start().starts_with(COMMENT))
            .map(|(i, line)| (i + 1, line.trim()))
            .unzip();

        let entries = lines
            .into_iter()
            .zip(audit_rules(rules))
            .map(|(line, audit)| CheckEntry { line, audit })
            .collect();
        Self { entries }
    }

    /// Fails on the first rule that is not canonical, reporting its line.
    fn ensure_canonical(&self) -> Result<(), Box<dyn Error>> {
        let audits: Vec<_> = self.entries.iter().map(|e| e.audit.clone()).collect();
        match ensure_canonical(&audits) {
            Ok(()) => Ok(()),
            Err(AuditError::Rule { index, source }) => {
                let line = self.entries.get(index).map_or(index + 1, |e| e.line);
                Err(format!("Line {line}: {source}").into())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn count(&self, f: impl Fn(&RuleStatus) -> bool) -> usize {
        self.entries.iter().filter(|e| f(&e.audit.status)).count()
    }

    fn print(&self, verbose: bool) {
        let width = self
            .entries
            .iter()
            .map(|e| e.audit.rule.len())
            .max()
            .unwrap_or(0);

        for entry in &self.entries {
            let line = format!("{:>4}", entry.line).dimmed();
            match &entry.audit.status {
                RuleStatus::Canonical if verbose => {
                    println!("{line}  {}", entry.audit.rule.green());
                }
                RuleStatus::Canonical => {}
                RuleStatus::Normalized { canonical } => {
                    println!(
                        "{line}  {:<width$}  {} {}",
                        entry.audit.rule,
                        "→".yellow(),
                        canonical
                    );
                }
                RuleStatus::Empty => println!("{line}  {}", "(empty)".italic()),
            }
        }

        let canonical = self.count(RuleStatus::is_canonical);
        let normalized = self.count(|s| matches!(s, RuleStatus::Normalized { .. }));
        let empty = self.count(|s| matches!(s, RuleStatus::Empty));
        println!(
            "{} rules: {} canonical, {} to normalize, {} empty",
            self.entries.len(),
            canonical.to_string().green(),
            normalized.to_string().yellow(),
            empty,
        );
    }
}
