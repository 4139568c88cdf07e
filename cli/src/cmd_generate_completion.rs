// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io,
    path::{Path, PathBuf},
};

use cadence_core::APP_NAME;
use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Generator, generate, generate_to};
use clap_complete_nushell::Nushell;

use crate::Cli;

/// Print the completion script, or install it into a directory.
#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
    pub dir: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate the cadence completion script for a shell")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Target shell").value_parser(value_parser!(Shell)))
            .arg(
                arg!(-d --dir <DIR> "Write the script into this directory instead of stdout")
                    .value_parser(value_parser!(PathBuf)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let shell = matches
            .get_one::<Shell>("shell")
            .copied()
            .ok_or("Shell is required")?;

        Ok(Self {
            shell,
            dir: matches.get_one::<PathBuf>("dir").cloned(),
        })
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        match &self.dir {
            Some(dir) => {
                let path = self.install(dir)?;
                println!("{}", path.display());
            }
            None => self.generate(&mut io::stdout()),
        }
        Ok(())
    }

    pub fn generate(&self, buf: &mut impl io::Write) {
        generate(self.shell, &mut Cli::command(), APP_NAME, buf);
    }

    /// Write the script into `dir` under the shell's conventional file name.
    pub fn install(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = generate_to(self.shell, &mut Cli::command(), APP_NAME, dir)?;
        tracing::info!(path = %path.display(), shell = ?self.shell, "completion script written");
        Ok(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// The matching `clap_complete` shell, `None` for nushell which lives in
    /// its own crate.
    const fn builtin(self) -> Option<clap_complete::Shell> {
        match self {
            Self::Bash => Some(clap_complete::Shell::Bash),
            Self::Elvish => Some(clap_complete::Shell::Elvish),
            Self::Fish => Some(clap_complete::Shell::Fish),
            Self::PowerShell => Some(clap_complete::Shell::PowerShell),
            Self::Zsh => Some(clap_complete::Shell::Zsh),
            Self::Nushell => None,
        }
    }
}

impl Generator for Shell {
    fn file_name(&self, name: &str) -> String {
        match self.builtin() {
            Some(shell) => shell.file_name(name),
            None => Nushell.file_name(name),
        }
    }

    fn generate(&self, cmd: &Command, buf: &mut dyn io::Write) {
        match self.builtin() {
            Some(shell) => shell.generate(cmd, buf),
            None => Nushell.generate(cmd, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CmdGenerateCompletion {
        let matches = Cli::command()
            .try_get_matches_from(args)
            .unwrap_or_else(|e| panic!("Failed to parse {args:?}: {e}"));
        let sub_matches = matches.subcommand_matches(CmdGenerateCompletion::NAME).unwrap();
        CmdGenerateCompletion::from(sub_matches).unwrap()
    }

    #[test]
    fn test_generate_completion_mentions_subcommands() {
        let cmd = CmdGenerateCompletion {
            shell: Shell::Bash,
            dir: None,
        };
        let mut output = vec![];
        cmd.generate(&mut output);

        let script = String::from_utf8(output).unwrap();
        assert!(script.contains("cadence"));
        assert!(script.contains("describe"));
        assert!(script.contains("normalize"));
        assert!(script.contains("check"));
    }

    #[test]
    fn test_parse_shell_variants() {
        for (shell_str, expected) in [
            ("bash", Shell::Bash),
            ("elvish", Shell::Elvish),
            ("fish", Shell::Fish),
            ("nushell", Shell::Nushell),
            ("powershell", Shell::PowerShell),
            ("zsh", Shell::Zsh),
        ] {
            let parsed = parse(&["cadence", "generate-completion", shell_str]);
            assert_eq!(parsed.shell, expected);
            assert_eq!(parsed.dir, None);

            let mut output = vec![];
            parsed.generate(&mut output);
            assert!(!output.is_empty(), "Empty script for {shell_str}");
        }
    }

    #[test]
    fn test_parse_dir() {
        let parsed = parse(&["cadence", "generate-completion", "fish", "--dir", "/tmp/completions"]);
        assert_eq!(parsed.shell, Shell::Fish);
        assert_eq!(parsed.dir, Some(PathBuf::from("/tmp/completions")));
    }

    #[test]
    fn test_install_uses_shell_file_name() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        for (shell, file_name) in [
            (Shell::Bash, "cadence.bash"),
            (Shell::Fish, "cadence.fish"),
            (Shell::Zsh, "_cadence"),
            (Shell::Nushell, "cadence.nu"),
        ] {
            let cmd = CmdGenerateCompletion {
                shell,
                dir: Some(temp_dir.path().to_path_buf()),
            };
            let path = cmd.install(temp_dir.path()).unwrap();
            assert_eq!(path, temp_dir.path().join(file_name));

            let script = std::fs::read_to_string(&path).unwrap();
            assert!(script.contains("describe"), "{file_name} misses subcommands");
        }
    }
}
