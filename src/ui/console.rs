//! Line-oriented prompting over any reader and writer.

use super::Theme;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Interactive console: writes listings and reads one command per line.
///
/// Generic over its streams so tests can drive it with in-memory buffers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    theme: Theme,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given streams.
    pub fn new(input: R, output: W, theme: Theme) -> Self {
        Self {
            input,
            output,
            theme,
        }
    }

    /// Styling in effect.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Write one line.
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Write a section heading preceded by a blank line.
    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        let styled = self.theme.heading(text);
        writeln!(self.output, "\n{}", styled)
    }

    /// Write an error or validation message.
    pub fn error(&mut self, text: impl Display) -> io::Result<()> {
        let styled = self.theme.error(&text.to_string());
        writeln!(self.output, "{}", styled)
    }

    /// Write an indented, muted notice such as `(no attributes)`.
    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        let styled = self.theme.muted(text);
        writeln!(self.output, "  {}", styled)
    }

    /// Show `label`, then read one line.
    ///
    /// Returns the trimmed line, or `None` once input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Consume the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
