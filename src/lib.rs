//! h5browse - an interactive command-line browser for HDF5 files.
//!
//! h5browse lists the HDF5 files in a directory, opens the one you pick and
//! lets you walk its groups, read attributes and page through dataset rows
//! from a plain line prompt.
//!
//! # Features
//!
//! - Numbered group listings with shape and dtype for each dataset
//! - Attribute display with lossy UTF-8 decoding of byte strings
//! - Paged dataset contents (`n <count>`, `all`)
//! - A storage boundary ([`data::DataFileService`]) with an in-memory
//!   implementation for driving the explorer without files on disk
//!
//! # Example
//!
//! ```no_run
//! use h5browse::data::DataReader;
//! use h5browse::explorer::{Explorer, Outcome};
//! use h5browse::ui::{Console, Theme};
//! use std::io;
//! use std::path::Path;
//!
//! let file = DataReader::open(Path::new("weather.h5"))?;
//! let mut console = Console::new(io::stdin().lock(), io::stdout(), Theme::plain());
//! let outcome = Explorer::new(file).run(&mut console)?;
//! assert_ne!(outcome, Outcome::Continue("/".into()));
//! # Ok::<(), h5browse::BrowseError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod config;
pub mod data;
pub mod error;
pub mod explorer;
pub mod file_browser;
pub mod navigation;
pub mod ui;

pub use config::Config;
pub use error::{BrowseError, Result};
