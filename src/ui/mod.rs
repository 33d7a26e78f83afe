//! Console presentation.

mod console;
pub mod formatters;
mod theme;

pub use console::Console;
pub use theme::Theme;
