//! Data access.
//!
//! This module defines the nodes, attributes and element values of an HDF5
//! hierarchy, the [`DataFileService`] boundary the explorer reads through,
//! and two implementations of it: [`DataReader`] for files on disk and
//! [`MemoryFile`] for hierarchies built in memory.

mod attrs;
mod cell;
mod memory;
mod node;
mod reader;
mod service;

pub use attrs::{AttrValue, AttributeMap};
pub use cell::{decode_rows, Cell, Rows};
pub use memory::MemoryFile;
pub use node::{Child, DType, DatasetInfo, Node};
pub use reader::DataReader;
pub use service::DataFileService;
