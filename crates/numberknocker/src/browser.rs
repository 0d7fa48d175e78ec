//! Opening opt-out pages in a browser.

use tracing::info;

use crate::error::{Error, Result};

/// Something that can show a URL to the user.
pub trait UrlOpener {
    /// Open `url`. Nothing is read back from the browser.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL could not be handed off.
    fn open_url(&mut self, url: &str) -> Result<()>;
}

/// Opens URLs with the host's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open_url(&mut self, url: &str) -> Result<()> {
        info!("Opening {url} in default browser");
        open::that(url).map_err(|source| Error::BrowserOpen {
            url: url.to_string(),
            source,
        })
    }
}
