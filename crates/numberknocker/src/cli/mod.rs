//! Command-line interface for numberknocker.
//!
//! This module provides the CLI structure for the `knock` binary.

mod commands;
pub mod handlers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ChecklistCommand, ConfigCommand, EmailCommand, RunCommand, SitesCommand};

/// knock - Take your phone number back
///
/// Walks you through do-not-call registration, data-broker opt-outs,
/// call blocking and ongoing monitoring, step by step.
#[derive(Debug, Parser)]
#[command(name = "knock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Walk through every opt-out step interactively
    Run(RunCommand),

    /// List the opt-out sites and do-not-call registries
    Sites(SitesCommand),

    /// Print and save the monitoring checklist
    Checklist(ChecklistCommand),

    /// Save a removal request email for a phone number
    Email(EmailCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// The command to execute, with a bare `knock` meaning `knock run`.
    #[must_use]
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Run(RunCommand::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    fn cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "knock");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli(3, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_bare_invocation_runs_guide() {
        let cli = Cli::try_parse_from(["knock"]).unwrap();
        match cli.command_or_default() {
            Command::Run(run) => {
                assert!(run.phone.is_none());
                assert!(!run.no_browser);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_run_with_phone() {
        let cli = Cli::try_parse_from(["knock", "run", "--phone", "555-0100", "--no-browser"])
            .unwrap();
        match cli.command_or_default() {
            Command::Run(run) => {
                assert_eq!(run.phone.as_deref(), Some("555-0100"));
                assert!(run.no_browser);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_sites_json() {
        let cli = Cli::try_parse_from(["knock", "sites", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Sites(SitesCommand { json: true }))));
    }

    #[test]
    fn test_parse_email() {
        let cli = Cli::try_parse_from(["knock", "email", "555-0100", "-o", "/tmp/out"]).unwrap();
        match cli.command {
            Some(Command::Email(cmd)) => {
                assert_eq!(cmd.phone, "555-0100");
                assert_eq!(cmd.output, Some(PathBuf::from("/tmp/out")));
            }
            other => panic!("expected email, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_email_requires_phone() {
        assert!(Cli::try_parse_from(["knock", "email"]).is_err());
    }

    #[test]
    fn test_parse_checklist() {
        let cli = Cli::try_parse_from(["knock", "checklist"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Checklist(ChecklistCommand { output: None }))
        ));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["knock", "config", "validate", "-f", "x.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Validate { file: Some(_) }))
        ));
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["knock", "-c", "/custom/config.toml", "-vv", "sites"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(cli.verbose, 2);
    }
}
