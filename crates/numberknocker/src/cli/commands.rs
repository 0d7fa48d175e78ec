//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Guided run arguments.
#[derive(Debug, Default, Args)]
pub struct RunCommand {
    /// Phone number to use instead of prompting for it
    #[arg(short, long, value_name = "NUMBER")]
    pub phone: Option<String>,

    /// Never launch a browser; print the opt-out URLs instead
    #[arg(long)]
    pub no_browser: bool,
}

/// Site listing arguments.
#[derive(Debug, Args)]
pub struct SitesCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Checklist command arguments.
#[derive(Debug, Args)]
pub struct ChecklistCommand {
    /// Directory to write the checklist into
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

/// Email template command arguments.
#[derive(Debug, Args)]
pub struct EmailCommand {
    /// Phone number to put in the template
    pub phone: String,

    /// Directory to write the template into
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
