//! `numberknocker` - A guided checklist for phone number privacy
//!
//! This library walks a user through do-not-call registration, data-broker
//! opt-out pages, call-blocking setup and ongoing monitoring, and writes a
//! monitoring checklist and a removal request email template.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod browser;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod console;
pub mod documents;
pub mod error;
pub mod guide;
pub mod logging;

pub use browser::{SystemBrowser, UrlOpener};
pub use config::Config;
pub use console::Console;
pub use error::{Error, Result};
pub use guide::{Outcome, PrivacyGuide};
pub use logging::init_logging;
