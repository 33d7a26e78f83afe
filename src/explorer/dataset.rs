//! Dataset browsing and paging.

use super::command::{parse_dataset_command, DatasetCommand};
use super::{Explorer, Outcome};
use crate::data::{decode_rows, DataFileService, DatasetInfo};
use crate::error::Result;
use crate::navigation::parent_path;
use crate::ui::formatters::{format_footer, format_rows, format_shape};
use crate::ui::Console;
use std::io::{BufRead, Write};

impl<S: DataFileService> Explorer<S> {
    pub(super) fn browse_dataset<R: BufRead, W: Write>(
        &mut self,
        info: &DatasetInfo,
        console: &mut Console<R, W>,
    ) -> Result<Outcome> {
        console.heading("[Dataset info]:")?;
        console.line(format!("  Shape: {}", format_shape(&info.shape)))?;
        console.line(format!("  Dtype: {}", info.dtype))?;

        self.state.enter_dataset();
        let total_rows = info.total_rows();

        loop {
            self.show_page(info, console)?;

            console.heading("[Commands]:")?;
            console.notice("'q' goes up to the parent group")?;
            console.notice("'n <count>' skips ahead <count> rows (e.g. 'n 20')")?;
            console.notice("'all' shows every row (may be slow for large datasets)")?;
            console.notice("'exit' quits")?;

            let Some(input) = console.prompt("Choice: ")? else {
                tracing::info!("Input closed while browsing {}", info.path);
                return Ok(Outcome::Exit);
            };

            match parse_dataset_command(&input) {
                Ok(DatasetCommand::Up) => {
                    return Ok(Outcome::Continue(parent_path(&self.state.current_path)));
                }
                Ok(DatasetCommand::Next(rows)) => self.state.advance(rows),
                Ok(DatasetCommand::All) => {
                    console.line(
                        "\nWarning: loading every row. Large datasets may be slow or exhaust memory.",
                    )?;
                    if !self.state.show_all(total_rows) {
                        console.notice("(nothing to display)")?;
                    }
                }
                Ok(DatasetCommand::Exit) => return Ok(Outcome::Exit),
                Err(e) => console.error(e)?,
            }
        }
    }

    fn show_page<R: BufRead, W: Write>(
        &self,
        info: &DatasetInfo,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        let total_rows = info.total_rows();
        let start = self.state.row_offset;
        let end = self.state.page_end(total_rows);

        console.heading(&format!("[Contents (rows {} to {})]:", start, end))?;
        if total_rows == 0 {
            console.notice("(dataset is empty)")?;
            return Ok(());
        }
        if self.state.exhausted(total_rows) {
            console.notice("(no more rows to display; enter 'q' or 'exit')")?;
            return Ok(());
        }

        match self.service.read_rows(info, start, end) {
            Ok(rows) => {
                let rows = if info.dtype.is_fixed_bytes() {
                    decode_rows(rows)
                } else {
                    rows
                };
                for line in format_rows(&rows) {
                    console.line(format!("  {}", line))?;
                }
                console.notice(&format!("({})", format_footer(end, total_rows)))?;
            }
            Err(e) if e.is_not_found() => return Err(e),
            Err(e) => {
                tracing::warn!("Reading rows {}..{} of {} failed: {}", start, end, info.path, e);
                console.error(format!("  Error while reading data: {}", e))?;
                console.notice("(this dataset may be too large or complex to show in part)")?;
            }
        }
        Ok(())
    }
}
