//! Explorer - interactive navigation of an open file.
//!
//! The explorer is a small state machine. Each step visits the node at the
//! current path: a group lists its children and waits for a choice, a dataset
//! pages through its rows. A visit ends with an [`Outcome`], which either
//! names the next path or asks the caller to leave the file.

pub mod command;
mod dataset;
mod group;

use crate::data::{DataFileService, Node};
use crate::error::Result;
use crate::navigation::{NavigationState, DEFAULT_PAGE_SIZE};
use crate::ui::formatters::format_attributes;
use crate::ui::Console;
use std::io::{BufRead, Write};

/// Widest attribute value shown before truncation, in terminal columns.
pub const DEFAULT_VALUE_WIDTH: usize = 200;

/// How a node visit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Visit this path next.
    Continue(String),
    /// Close the file and return to file selection.
    SelectFile,
    /// End the whole session.
    Exit,
}

/// Navigation state machine over one open file.
#[derive(Debug)]
pub struct Explorer<S> {
    service: S,
    state: NavigationState,
    value_width: usize,
}

impl<S: DataFileService> Explorer<S> {
    /// Start at the root group of `service`.
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: NavigationState::new(DEFAULT_PAGE_SIZE),
            value_width: DEFAULT_VALUE_WIDTH,
        }
    }

    /// Rows per page when a dataset is entered.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.state = NavigationState::new(page_size);
        self
    }

    /// Truncate attribute values wider than this.
    pub fn with_value_width(mut self, width: usize) -> Self {
        self.value_width = width.max(1);
        self
    }

    /// Current navigation state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Visit nodes until the user leaves the file.
    ///
    /// Returns [`Outcome::SelectFile`] or [`Outcome::Exit`]. A path that stops
    /// resolving aborts navigation with `NotFound`.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Outcome> {
        loop {
            match self.visit(console)? {
                Outcome::Continue(path) => {
                    tracing::debug!("Navigating {} -> {}", self.state.current_path, path);
                    self.state.current_path = path;
                }
                done => return Ok(done),
            }
        }
    }

    /// Visit the node at the current path once.
    pub fn visit<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Outcome> {
        let path = self.state.current_path.clone();
        let node = match self.service.resolve(&path) {
            Ok(node) => node,
            Err(e) => {
                tracing::warn!("Cannot resolve {}: {}", path, e);
                return Err(e);
            }
        };

        console.blank()?;
        let banner = console.theme().banner(&format!("--- Current path: {} ---", path));
        console.line(banner)?;
        self.show_attributes(&node, console)?;

        match &node {
            Node::Group(_) => self.browse_group(&node, console),
            Node::Dataset(info) => self.browse_dataset(info, console),
        }
    }

    fn show_attributes<R: BufRead, W: Write>(
        &self,
        node: &Node,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        console.heading("[Attributes]:")?;
        let attrs = self.service.attributes(node)?;
        if attrs.is_empty() {
            console.notice("(no attributes)")?;
        }
        for line in format_attributes(&attrs, self.value_width) {
            console.line(format!("  {}", line))?;
        }
        Ok(())
    }
}
