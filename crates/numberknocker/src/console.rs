//! Line-oriented terminal interaction.
//!
//! [`Console`] wraps any reader/writer pair so the guide can be driven from
//! stdin/stdout in the binary and from in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use tracing::trace;

use crate::error::{Error, Result};

/// Prompting console over a buffered reader and a writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

/// Console bound to the process's standard streams.
pub type StdConsole = Console<io::StdinLock<'static>, io::Stdout>;

impl StdConsole {
    /// Create a console reading stdin and writing stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console from an input and output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Print an empty line.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Show `text` and read one line of input without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] if the input is closed, or an I/O error.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            trace!("Input closed while waiting for: {text:?}");
            return Err(Error::Interrupted);
        }
        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(answer)
    }

    /// Ask a y/n question. Only a bare `y` or `Y` counts as yes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] if the input is closed, or an I/O error.
    pub fn confirm(&mut self, text: &str) -> Result<bool> {
        let answer = self.prompt(text)?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Wait for the user to press Enter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] if the input is closed, or an I/O error.
    pub fn pause(&mut self, text: &str) -> Result<()> {
        self.prompt(text).map(drop)
    }

    /// Consume the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
