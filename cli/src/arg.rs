// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn rule() -> Arg {
        arg!(rule: [RULE] "The rule string, canonical or legacy")
            .long_help(
                "The rule string, canonical or legacy. Falls back to the configured default rule when empty.",
            )
    }

    pub fn get_rule(matches: &ArgMatches) -> String {
        matches.get_one::<String>("rule").cloned().unwrap_or_default()
    }

    pub fn strict() -> Arg {
        arg!(--strict "Fail on rules that are not canonical")
    }

    pub fn get_strict(matches: &ArgMatches) -> bool {
        matches.get_flag("strict")
    }

    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .long_help("Output format. Defaults to the `output_format` of the config, or table.")
            .value_parser(value_parser!(OutputFormat))
    }

    pub fn get_output_format(matches: &ArgMatches) -> Option<OutputFormat> {
        matches.get_one("output-format").copied()
    }
}
