//! The outer file-selection loop.

use super::{file_label, list_data_files};
use crate::config::Config;
use crate::data::DataFileService;
use crate::error::{Result, ValidationError};
use crate::explorer::{Explorer, Outcome};
use crate::ui::Console;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// A browsing session over the files of one directory.
///
/// `open` turns a chosen path into an open file. The handle it returns lives
/// exactly as long as the user stays inside that file.
#[derive(Debug)]
pub struct Session<F> {
    config: Config,
    open: F,
}

impl<S, F> Session<F>
where
    S: DataFileService,
    F: FnMut(&Path) -> Result<S>,
{
    /// Create a session that opens files with `open`.
    pub fn new(config: Config, open: F) -> Self {
        Self { config, open }
    }

    /// Offer files until the user quits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        loop {
            let files = list_data_files(&self.config.data_dir, &self.config.extension)?;

            if files.is_empty() {
                console.error(format!(
                    "Error: no '.{}' files found in {}.",
                    self.config.extension,
                    self.config.data_dir.display()
                ))?;
                console.line(format!(
                    "Put the '.{}' files you want to browse in that directory.",
                    self.config.extension
                ))?;
                match console.prompt("Press Enter to retry, or end input (Ctrl+D) to quit... ")? {
                    Some(_) => continue,
                    None => return Ok(()),
                }
            }

            let Some(path) = self.choose(&files, console)? else {
                console.line("Exiting.")?;
                return Ok(());
            };

            match self.browse(&path, console)? {
                Outcome::Exit => {
                    console.line("\nExiting.")?;
                    return Ok(());
                }
                Outcome::SelectFile | Outcome::Continue(_) => {}
            }
        }
    }

    fn choose<R: BufRead, W: Write>(
        &self,
        files: &[PathBuf],
        console: &mut Console<R, W>,
    ) -> Result<Option<PathBuf>> {
        console.heading(&format!(
            "--- Select a .{} file to browse ---",
            self.config.extension
        ))?;
        for (i, file) in files.iter().enumerate() {
            console.line(format!("  {}. {}", i + 1, file_label(file)))?;
        }
        console.notice("'exit' quits")?;

        loop {
            let Some(input) = console.prompt("File number: ")? else {
                return Ok(None);
            };
            let choice = input.to_lowercase();
            if choice == "exit" {
                return Ok(None);
            }

            match choice.parse::<i64>() {
                Ok(n) => match usize::try_from(n) {
                    Ok(i) if (1..=files.len()).contains(&i) => {
                        return Ok(Some(files[i - 1].clone()));
                    }
                    _ => console.error(ValidationError::OutOfRange {
                        choice: n,
                        count: files.len(),
                    })?,
                },
                Err(_) => console.error(ValidationError::Unrecognized(
                    input,
                    "Enter a number or 'exit'.",
                ))?,
            }
        }
    }

    /// Open `path`, explore it, and release it. Failures inside the file
    /// are reported and lead back to file selection.
    fn browse<R: BufRead, W: Write>(
        &mut self,
        path: &Path,
        console: &mut Console<R, W>,
    ) -> Result<Outcome> {
        console.line(format!("\nSelected file: '{}'", file_label(path)))?;

        let service = match (self.open)(path) {
            Ok(service) => service,
            Err(e) => {
                tracing::error!("Error opening {}: {}", path.display(), e);
                console.error(e)?;
                return Ok(Outcome::SelectFile);
            }
        };

        let mut explorer = Explorer::new(service)
            .with_page_size(self.config.page_size)
            .with_value_width(self.config.value_width);
        let result = explorer.run(console);
        drop(explorer);
        tracing::info!("Closed {}", path.display());

        match result {
            Ok(outcome) => Ok(outcome),
            Err(e) if e.is_not_found() => {
                console.error(format!("{}. Returning to file selection.", e))?;
                Ok(Outcome::SelectFile)
            }
            Err(e) => {
                tracing::error!("Browsing {} failed: {}", path.display(), e);
                console.error(format!(
                    "Unexpected error while browsing '{}': {}. Returning to file selection.",
                    file_label(path),
                    e
                ))?;
                Ok(Outcome::SelectFile)
            }
        }
    }
}
