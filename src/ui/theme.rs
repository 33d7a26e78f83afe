//! Terminal styling.

use crossterm::style::{style, Stylize};

/// Output styling. Plain when writing to a pipe or when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    /// Emit ANSI styling.
    pub color: bool,
}

impl Theme {
    /// Styled when `color` is set.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Never styled.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Section headings such as `[Attributes]:`.
    pub fn heading(&self, text: &str) -> String {
        if self.color {
            style(text).bold().yellow().to_string()
        } else {
            text.to_string()
        }
    }

    /// The `--- Current path ---` banner.
    pub fn banner(&self, text: &str) -> String {
        if self.color {
            style(text).bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    /// Error and validation messages.
    pub fn error(&self, text: &str) -> String {
        if self.color {
            style(text).red().to_string()
        } else {
            text.to_string()
        }
    }

    /// Parenthesised notices and help lines.
    pub fn muted(&self, text: &str) -> String {
        if self.color {
            style(text).dark_grey().to_string()
        } else {
            text.to_string()
        }
    }
}
