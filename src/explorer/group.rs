//! Group browsing.

use super::command::{parse_group_command, GroupCommand};
use super::{Explorer, Outcome};
use crate::data::{DataFileService, Node};
use crate::error::Result;
use crate::navigation::{child_path, parent_path};
use crate::ui::formatters::format_child;
use crate::ui::Console;
use std::io::{BufRead, Write};

impl<S: DataFileService> Explorer<S> {
    pub(super) fn browse_group<R: BufRead, W: Write>(
        &mut self,
        node: &Node,
        console: &mut Console<R, W>,
    ) -> Result<Outcome> {
        let children = self.service.list_children(node)?;

        console.heading("[Children]:")?;
        if children.is_empty() {
            console.notice("(no children)")?;
        }
        for (i, child) in children.iter().enumerate() {
            console.line(format!("  {}", format_child(i + 1, child)))?;
        }

        console.heading("[Commands]:")?;
        console.notice("Enter a number to open that child")?;
        console.notice("'q' goes up one group (at '/' it returns to file selection)")?;
        console.notice("'exit' quits")?;

        loop {
            let Some(input) = console.prompt("Choice: ")? else {
                tracing::info!("Input closed while browsing {}", self.state.current_path);
                return Ok(Outcome::Exit);
            };

            match parse_group_command(&input, children.len()) {
                Ok(GroupCommand::Open(idx)) => {
                    let name = &children[idx].name;
                    return Ok(Outcome::Continue(child_path(&self.state.current_path, name)));
                }
                Ok(GroupCommand::Up) if self.state.at_root() => {
                    console.line("At the root group; returning to file selection.")?;
                    return Ok(Outcome::SelectFile);
                }
                Ok(GroupCommand::Up) => {
                    return Ok(Outcome::Continue(parent_path(&self.state.current_path)));
                }
                Ok(GroupCommand::Exit) => return Ok(Outcome::Exit),
                Err(e) => console.error(e)?,
            }
        }
    }
}
