//! The guided opt-out walkthrough.
//!
//! [`start`] asks for the phone number and hands over to
//! [`PrivacyGuide::run_full_process`], which runs the five steps in order:
//!
//! 1. Do-not-call registries
//! 2. Data-broker removal pages
//! 3. Call-blocking setup
//! 4. Monitoring checklist (written to a file)
//! 5. Removal email template (written to a file)
//!
//! Every step only prints, asks, opens a URL or writes a file. Errors from
//! any step end the run and are reported once, by `run_full_process`.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::browser::UrlOpener;
use crate::catalog::{blocking_instructions, checklist_items, registries, removal_sites};
use crate::config::Config;
use crate::console::Console;
use crate::documents::{write_checklist, write_removal_email};
use crate::error::Result;
use crate::logging::mask_phone;

/// How a guided session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All five steps ran.
    Completed,
    /// No phone number was entered; nothing else happened.
    NoPhoneNumber,
    /// The user closed the input or pressed Ctrl+C.
    Interrupted,
    /// A step failed with the given message.
    Failed(String),
}

impl Outcome {
    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Completed => 0,
            Self::NoPhoneNumber | Self::Failed(_) => 1,
            Self::Interrupted => 130,
        }
    }
}

/// Walks one phone number through the opt-out steps.
#[derive(Debug, Clone)]
pub struct PrivacyGuide {
    phone_number: String,
    config: Config,
}

/// Print the tool header, ask for the phone number and run the guide.
///
/// When `phone_number` is given the prompt is skipped. An empty number stops
/// here: nothing is written and no further questions are asked.
pub fn start<R: BufRead, W: Write>(
    config: Config,
    phone_number: Option<String>,
    console: &mut Console<R, W>,
    opener: &mut dyn UrlOpener,
) -> Outcome {
    let phone_number = match read_phone_number(phone_number, console) {
        Ok(number) => number,
        Err(e) => return report(console, e),
    };

    if phone_number.is_empty() {
        debug!("No phone number entered, stopping");
        say_or_log(console, "Phone number is required.");
        return Outcome::NoPhoneNumber;
    }

    PrivacyGuide::new(phone_number, config).run_full_process(console, opener)
}

fn read_phone_number<R: BufRead, W: Write>(
    given: Option<String>,
    console: &mut Console<R, W>,
) -> Result<String> {
    console.say("Phone Number Privacy Protection Tool")?;
    console.say("Note: This tool helps automate but does not directly")?;
    console.say("access or modify external databases due to security restrictions.")?;
    console.blank()?;

    match given {
        Some(number) => Ok(number),
        None => console.prompt("Enter your phone number (for reference): "),
    }
}

fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, err: crate::Error) -> Outcome {
    if err.is_interrupted() {
        info!("Session interrupted");
        say_or_log(console, "\n\nProcess interrupted by user.");
        Outcome::Interrupted
    } else {
        warn!("Session failed: {err}");
        let message = err.to_string();
        say_or_log(console, format!("\nError occurred: {message}"));
        Outcome::Failed(message)
    }
}

/// Last-resort output once a run is over; failures can only be logged.
fn say_or_log<R: BufRead, W: Write>(console: &mut Console<R, W>, line: impl AsRef<str>) {
    if let Err(e) = console.say(line.as_ref()) {
        warn!("Could not write to terminal: {e}");
    }
}

/// Print the numbered monitoring checklist.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn print_checklist<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    for (i, item) in checklist_items().iter().enumerate() {
        console.say(format!("{}. {item}", i + 1))?;
    }
    Ok(())
}

/// Name to show the user for a written file.
///
/// Files in the working directory are shown by name only.
#[must_use]
pub fn display_path(path: &Path) -> String {
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name))
            if parent.as_os_str().is_empty() || parent == Path::new(".") =>
        {
            name.to_string_lossy().into_owned()
        }
        _ => path.display().to_string(),
    }
}

fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

impl PrivacyGuide {
    /// Create a guide for `phone_number`.
    #[must_use]
    pub fn new(phone_number: impl Into<String>, config: Config) -> Self {
        Self {
            phone_number: phone_number.into(),
            config,
        }
    }

    /// The phone number as entered.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Show the banner and what the tool covers.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn display_welcome<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.say(rule('=', 60))?;
        console.say("WELCOME TO NUMBER-KNOCKER")?;
        console.say(rule('=', 60))?;
        console.say(format!("Enter phone number: {}", self.phone_number))?;
        console.say("\nThis tool will assist you to:")?;
        console.say("✓ Register with Do Not Call registries")?;
        console.say("✓ Remove number from people search sites")?;
        console.say("✓ Set up call blocking on device")?;
        console.say("✓ Monitor for future appearances")?;
        console.blank()
    }

    /// Step 1: list the do-not-call registries and wait for the user.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Interrupted`] if input closes, or an I/O error.
    pub fn register_do_not_call<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        debug!(step = 1, "Do not call registries");
        console.say("STEP 1: DO NOT CALL REGISTRIES")?;
        console.say(rule('-', 40))?;

        for registry in registries() {
            console.say(format!("\n• {}", registry.name))?;
            console.say(format!("  Website: {}", registry.url))?;
            console.say(format!("  Phone: {}", registry.phone))?;
        }

        console.say("\nAction required: Visit these websites or call to register your number.")?;
        console.pause("Press Enter when completed...")
    }

    /// Step 2: offer each data-broker opt-out page in turn.
    ///
    /// A page is opened only when the user answers `y`, and each page is
    /// offered exactly once. Returns how many pages were opened.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Interrupted`] if input closes, or an I/O error.
    /// Browser failures are not errors; the URL is printed instead.
    pub fn remove_from_data_brokers<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        opener: &mut dyn UrlOpener,
    ) -> Result<usize> {
        debug!(step = 2, "Data broker removal");
        console.say("\nSTEP 2: DATA BROKER REMOVAL")?;
        console.say(rule('-', 40))?;
        console.say("Opening removal pages for major data brokers...")?;

        let mut opened = 0;
        for site in removal_sites() {
            console.say(format!("\n• {}", site.name))?;
            console.say(format!("  Description: {}", site.description))?;
            console.say(format!("  URL: {}", site.url))?;

            if !console.confirm("  Open Site? (y/n): ")? {
                debug!(site = site.name, "Skipped");
                continue;
            }

            if !self.config.browser.enabled {
                console.say(format!("  Browser disabled, visit {} manually.", site.url))?;
                continue;
            }

            match opener.open_url(site.url) {
                Ok(()) => {
                    opened += 1;
                    let delay = self.config.open_delay();
                    if !delay.is_zero() {
                        std::thread::sleep(delay);
                    }
                }
                Err(e) => {
                    warn!(site = site.name, "{e}");
                    console.say(format!("  Could not open a browser, visit {} manually.", site.url))?;
                }
            }
        }

        info!(opened, "Data broker pages opened");
        Ok(opened)
    }

    /// Step 3: print call-blocking instructions per device.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn setup_call_blocking<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        debug!(step = 3, "Call blocking setup");
        console.say("\nSTEP 3: CALL BLOCKING SETUP")?;
        console.say(rule('-', 40))?;

        console.say("Set up call blocking on devices:")?;
        for device in blocking_instructions() {
            console.say(format!("\n{}:", device.device))?;
            for step in device.steps {
                console.say(format!("  • {step}"))?;
            }
        }
        Ok(())
    }

    /// Step 4: print the monitoring checklist and save it.
    ///
    /// # Errors
    ///
    /// Returns an error if the output or the checklist file cannot be written.
    pub fn create_monitoring_checklist<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<PathBuf> {
        debug!(step = 4, "Ongoing monitoring");
        console.say("\nSTEP 4: ONGOING MONITORING")?;
        console.say(rule('-', 40))?;

        console.say("Monthly monitoring checklist:")?;
        print_checklist(console)?;

        let path = write_checklist(&self.config.output.directory, &self.config.output.checklist_file)?;
        console.say(format!("\nChecklist saved to '{}'", display_path(&path)))?;
        Ok(path)
    }

    /// Step 5: write the removal email template for this number.
    ///
    /// # Errors
    ///
    /// Returns an error if the output or the template file cannot be written.
    pub fn generate_removal_emails<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<PathBuf> {
        debug!(step = 5, phone = %mask_phone(&self.phone_number), "Email templates");
        console.say("\nSTEP 5: EMAIL TEMPLATES")?;
        console.say(rule('-', 40))?;

        let path = write_removal_email(
            &self.config.output.directory,
            &self.config.output.email_file,
            &self.phone_number,
        )?;
        console.say(format!("Template Created: '{}'", display_path(&path)))?;
        console.say("Send to data brokers that don't have online opt-out forms.")?;
        Ok(path)
    }

    /// Run the welcome banner, all five steps and the closing summary.
    ///
    /// This is the only place errors are reported to the user.
    pub fn run_full_process<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        opener: &mut dyn UrlOpener,
    ) -> Outcome {
        info!(phone = %mask_phone(&self.phone_number), "Starting guided opt-out");
        match self.run_steps(console, opener) {
            Ok(()) => Outcome::Completed,
            Err(e) => report(console, e),
        }
    }

    fn run_steps<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        opener: &mut dyn UrlOpener,
    ) -> Result<()> {
        self.display_welcome(console)?;
        self.register_do_not_call(console)?;
        self.remove_from_data_brokers(console, opener)?;
        self.setup_call_blocking(console)?;
        self.create_monitoring_checklist(console)?;
        self.generate_removal_emails(console)?;

        console.say(format!("\n{}", rule('=', 60)))?;
        console.say("Number => Knocked")?;
        console.say(rule('=', 60))?;
        console.say("Remember:")?;
        console.say("• This process may take several weeks to show full effect")?;
        console.say("• Some sites require manual verification")?;
        console.say("• Regularly monitor and repeat removals as needed")?;
        console.say("• Consider using a secondary number for online accounts")?;
        Ok(())
    }
}
