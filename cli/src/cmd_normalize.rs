// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use cadence_core::Config as CoreConfig;
use cadence_rrule::{parse, validate};
use clap::{ArgMatches, Command};

use crate::arg::CommonArgs;
use crate::config::Config;
use crate::util::{OutputFormat, RuleOutput};

#[derive(Debug, Clone)]
pub struct CmdNormalize {
    pub rule: String,
    pub strict: bool,
    pub output_format: Option<OutputFormat>,
}

impl CmdNormalize {
    pub const NAME: &str = "normalize";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("n")
            .about("Print the canonical form of a rule")
            .arg(CommonArgs::rule())
            .arg(CommonArgs::strict())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            rule: CommonArgs::get_rule(matches),
            strict: CommonArgs::get_strict(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, core: &CoreConfig, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "normalizing rule...");
        let output = self.normalize(core)?;
        match config.output_format(self.output_format) {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
            OutputFormat::Table => println!("{}", output.rule),
        }
        Ok(())
    }

    fn normalize(&self, core: &CoreConfig) -> Result<RuleOutput, Box<dyn Error>> {
        let pattern = if self.strict || core.strict {
            validate(&self.rule)?
        } else {
            parse(core.rule_or_default(&self.rule))
        };
        Ok(RuleOutput::new(&self.rule, &pattern))
    }
}
