// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::str::FromStr;

use cadence_core::{Config as CoreConfig, RecurrenceEditor};
use cadence_rrule::Edit;
use clap::{ArgMatches, Command, arg};
use colored::Colorize;

use crate::arg::CommonArgs;
use crate::config::Config;
use crate::util::{OutputFormat, format_rows};

#[derive(Debug, Clone)]
pub struct CmdEdit {
    pub rule: String,
    pub edits: Vec<Edit>,
    pub verbose: bool,
    pub output_format: Option<OutputFormat>,
}

impl CmdEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("e")
            .about("Apply edits to a rule")
            .long_about(
                "\
Apply edits to a rule, in order, and print the resulting rule. Edits are written as \
`freq=weekly`, `interval=3`, `toggle=MO`, `mode=day|weekday`, `monthday=-1` or `nth=2TU`.",
            )
            .arg(CommonArgs::rule().required(true))
            .arg(
                arg!(edits: <EDIT> ... "Edits to apply").value_parser(Edit::from_str),
            )
            .arg(CommonArgs::verbose())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            rule: CommonArgs::get_rule(matches),
            edits: matches
                .get_many::<Edit>("edits")
                .map(|edits| edits.copied().collect())
                .unwrap_or_default(),
            verbose: CommonArgs::get_verbose(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, core: &CoreConfig, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing rule...");
        let output = self.edit(core)?;
        match config.output_format(self.output_format) {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
            OutputFormat::Table => {
                if self.verbose {
                    let width = output.steps.iter().map(|s| s.edit.len()).max().unwrap_or(0);
                    for step in &output.steps {
                        println!("{:<width$}  {} {}", step.edit, "→".green(), step.rule);
                    }
                    println!();
                }
                let rows = [
                    ("Rule", output.rule.bold().to_string()),
                    ("Description", output.description),
                ];
                println!("{}", format_rows(&rows));
            }
        }
        Ok(())
    }

    fn edit(&self, core: &CoreConfig) -> Result<EditOutput, Box<dyn Error>> {
        let input = core.rule_or_default(&self.rule);
        let mut editor = RecurrenceEditor::new(input, false);

        let mut steps = Vec::with_capacity(self.edits.len());
        for edit in &self.edits {
            let rule = editor.apply(*edit)?;
            steps.push(EditStep {
                edit: edit.to_string(),
                rule: rule.to_string(),
            });
        }

        Ok(EditOutput {
            input: input.to_string(),
            rule: editor.rule().to_string(),
            description: editor.preview(),
            steps,
        })
    }
}

#[derive(Debug, Clone, serde::Serialize)]
struct EditOutput {
    input: String,
    rule: String,
    description: String,
    steps: Vec<EditStep>,
}

#[derive(Debug, Clone, serde::Serialize)]
struct EditStep {
    edit: String,
    rule: String,
}
