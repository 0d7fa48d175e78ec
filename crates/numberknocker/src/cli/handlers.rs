//! Handlers for the one-shot commands.
//!
//! The guided `run` command lives in [`crate::guide`]; everything else the
//! `knock` binary can do is here, writing to any output stream.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::{registries, removal_sites};
use crate::config::Config;
use crate::console::Console;
use crate::documents::{write_checklist, write_removal_email};
use crate::error::{Error, Result};
use crate::guide::{display_path, print_checklist};

/// List the do-not-call registries and data-broker opt-out pages.
///
/// # Errors
///
/// Returns an error if the output cannot be written or serialized.
pub fn list_sites<W: Write>(out: &mut W, json: bool) -> Result<()> {
    if json {
        let listing = serde_json::json!({
            "registries": registries(),
            "removal_sites": removal_sites(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
        return Ok(());
    }

    writeln!(out, "Do Not Call Registries")?;
    writeln!(out, "----------------------")?;
    for registry in registries() {
        writeln!(
            out,
            "  {:<36} {:<36} {}",
            registry.name, registry.url, registry.phone
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Data Broker Opt-Outs")?;
    writeln!(out, "--------------------")?;
    for site in removal_sites() {
        writeln!(out, "  {:<30} {}", site.name, site.url)?;
        writeln!(out, "  {:<30} {}", "", site.description)?;
    }
    Ok(())
}

/// Print the checklist and save it to `dir`, or the configured directory.
///
/// # Errors
///
/// Returns an error if the output or the checklist file cannot be written.
pub fn save_checklist<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
    dir: Option<PathBuf>,
) -> Result<PathBuf> {
    let dir = dir.unwrap_or_else(|| config.output.directory.clone());

    console.say("Monthly monitoring checklist:")?;
    print_checklist(console)?;

    let path = write_checklist(&dir, &config.output.checklist_file)?;
    console.say(format!("\nChecklist saved to '{}'", display_path(&path)))?;
    Ok(path)
}

/// Save the removal email for `phone_number` to `dir`, or the configured
/// directory.
///
/// # Errors
///
/// Returns [`Error::MissingPhoneNumber`] for an empty number, or an error if
/// the template file cannot be written.
pub fn save_email<W: Write>(
    out: &mut W,
    config: &Config,
    phone_number: &str,
    dir: Option<PathBuf>,
) -> Result<PathBuf> {
    if phone_number.is_empty() {
        return Err(Error::MissingPhoneNumber);
    }
    let dir = dir.unwrap_or_else(|| config.output.directory.clone());

    let path = write_removal_email(&dir, &config.output.email_file, phone_number)?;
    writeln!(out, "Template Created: '{}'", display_path(&path))?;
    writeln!(out, "Send to data brokers that don't have online opt-out forms.")?;
    Ok(path)
}

/// Show the effective configuration.
///
/// # Errors
///
/// Returns an error if the output cannot be written or serialized.
pub fn show_config<W: Write>(out: &mut W, config: &Config, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
        return Ok(());
    }

    writeln!(out, "Current Configuration")?;
    writeln!(out, "=====================")?;
    writeln!(out)?;
    writeln!(out, "[Output]")?;
    writeln!(out, "  Directory:          {}", config.output.directory.display())?;
    writeln!(out, "  Checklist file:     {}", config.output.checklist_file)?;
    writeln!(out, "  Email file:         {}", config.output.email_file)?;
    writeln!(out)?;
    writeln!(out, "[Browser]")?;
    writeln!(out, "  Enabled:            {}", config.browser.enabled)?;
    writeln!(out, "  Open delay (ms):    {}", config.browser.open_delay_ms)?;
    Ok(())
}

/// Check that the file at `path` exists and holds a valid configuration.
///
/// Returns whether it is valid; the verdict is also printed.
///
/// # Errors
///
/// Returns an error only if the output cannot be written.
pub fn validate_config<W: Write>(out: &mut W, path: &Path) -> Result<bool> {
    writeln!(out, "Validating configuration: {}", path.display())?;
    match Config::load_existing(path) {
        Ok(_) => {
            writeln!(out, "Configuration is valid.")?;
            Ok(true)
        }
        Err(e) => {
            debug!("Validation of {} failed: {e}", path.display());
            writeln!(out, "Configuration error: {e}")?;
            Ok(false)
        }
    }
}
