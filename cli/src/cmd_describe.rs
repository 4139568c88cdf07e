// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use cadence_core::Config as CoreConfig;
use cadence_rrule::parse;
use clap::{ArgMatches, Command};

use crate::arg::CommonArgs;
use crate::config::Config;
use crate::util::{OutputFormat, RuleOutput};

#[derive(Debug, Clone)]
pub struct CmdDescribe {
    pub rule: String,
    pub output_format: Option<OutputFormat>,
}

impl CmdDescribe {
    pub const NAME: &str = "describe";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("d")
            .about("Describe a rule in plain English")
            .arg(CommonArgs::rule())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            rule: CommonArgs::get_rule(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, core: &CoreConfig, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "describing rule...");
        let output = self.describe(core);
        match config.output_format(self.output_format) {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
            OutputFormat::Table => println!("{}", output.table()),
        }
        Ok(())
    }

    fn describe(&self, core: &CoreConfig) -> RuleOutput {
        let input = core.rule_or_default(&self.rule);
        RuleOutput::new(input, &parse(input))
    }
}
