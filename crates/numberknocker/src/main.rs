//! `knock` - CLI for numberknocker
//!
//! This binary runs the guided opt-out walkthrough and the smaller
//! one-shot commands around it.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use numberknocker::cli::handlers;
use numberknocker::cli::{Cli, Command, ConfigCommand, RunCommand};
use numberknocker::console::StdConsole;
use numberknocker::guide;
use numberknocker::{init_logging, Config, SystemBrowser};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load_from(cli.config.clone())?;
    let mut stdout = io::stdout();

    match cli.command_or_default() {
        Command::Run(run_cmd) => handle_run(config, run_cmd),
        Command::Sites(sites_cmd) => {
            handlers::list_sites(&mut stdout, sites_cmd.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Checklist(checklist_cmd) => {
            let mut console = StdConsole::stdio();
            handlers::save_checklist(&mut console, &config, checklist_cmd.output)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Email(email_cmd) => {
            handlers::save_email(&mut stdout, &config, &email_cmd.phone, email_cmd.output)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Config(config_cmd) => handle_config(&config, config_cmd, &mut stdout),
    }
}

fn handle_run(mut config: Config, cmd: RunCommand) -> anyhow::Result<ExitCode> {
    if cmd.no_browser {
        config.browser.enabled = false;
    }

    ctrlc::set_handler(|| {
        println!("\n\nProcess interrupted by user.");
        std::process::exit(130);
    })
    .context("failed to install Ctrl+C handler")?;

    let mut console = StdConsole::stdio();
    let outcome = guide::start(config, cmd.phone, &mut console, &mut SystemBrowser);
    Ok(ExitCode::from(outcome.exit_code()))
}

fn handle_config(
    config: &Config,
    cmd: ConfigCommand,
    stdout: &mut io::Stdout,
) -> anyhow::Result<ExitCode> {
    match cmd {
        ConfigCommand::Show { json } => handlers::show_config(stdout, config, json)?,
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            if !handlers::validate_config(stdout, &path)? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
