// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use cadence_core::APP_NAME;
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cmd_check::CmdCheck;
use crate::cmd_describe::CmdDescribe;
use crate::cmd_edit::CmdEdit;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_normalize::CmdNormalize;
use crate::config::parse_config;

/// Run the Cadence command-line interface.
///
/// # Errors
///
/// Command failures are printed rather than returned.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                eprintln!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => eprintln!("{} {}", "Error:".red(), e),
    }
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` and defaulting to warnings.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    #[must_use]
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Parse, edit and describe recurrence rules of habits.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/cadence/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/cadence/config.toml on Windows. Built-in defaults apply when it does not exist.",
                    )
                    .global(true)
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdDescribe::command())
            .subcommand(CmdNormalize::command())
            .subcommand(CmdEdit::command())
            .subcommand(CmdCheck::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    ///
    /// # Errors
    ///
    /// If a subcommand cannot be built from its matches.
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    ///
    /// # Errors
    ///
    /// If the arguments are invalid.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    ///
    /// # Errors
    ///
    /// If no known subcommand was matched.
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::{Check, Describe, Edit, GenerateCompletion, Normalize};
        let command = match matches.subcommand() {
            Some((CmdDescribe::NAME, matches)) => Describe(CmdDescribe::from(matches)),
            Some((CmdNormalize::NAME, matches)) => Normalize(CmdNormalize::from(matches)),
            Some((CmdEdit::NAME, matches)) => Edit(CmdEdit::from(matches)),
            Some((CmdCheck::NAME, matches)) => Check(CmdCheck::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches)?)
            }
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("No command given".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    ///
    /// # Errors
    ///
    /// If the configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Describe a rule in plain English
    Describe(CmdDescribe),

    /// Print the canonical form of a rule
    Normalize(CmdNormalize),

    /// Apply edits to a rule
    Edit(CmdEdit),

    /// Check a file of stored rules
    Check(CmdCheck),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    ///
    /// # Errors
    ///
    /// If the configuration cannot be loaded or the command fails.
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::{Check, Describe, Edit, GenerateCompletion, Normalize};
        if let GenerateCompletion(a) = self {
            return a.run();
        }

        tracing::debug!("parsing configuration...");
        let (core_config, config) = parse_config(config).await?;
        match self {
            Describe(a)           => a.run(&core_config, &config),
            Normalize(a)          => a.run(&core_config, &config),
            Edit(a)               => a.run(&core_config, &config),
            Check(a)              => a.run(&core_config, &config).await,
            GenerateCompletion(a) => a.run(),
        }
    }
}
