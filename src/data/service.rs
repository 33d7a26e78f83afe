//! The storage boundary the explorer navigates through.

use super::{AttributeMap, Child, DatasetInfo, Node, Rows};
use crate::error::Result;

/// Read-only access to an open hierarchical data file.
///
/// Paths are absolute and `/`-delimited; the root group is `"/"`.
pub trait DataFileService {
    /// Resolve a path to the node stored there.
    ///
    /// Fails with [`BrowseError::NotFound`](crate::error::BrowseError::NotFound)
    /// when nothing lives at `path`.
    fn resolve(&self, path: &str) -> Result<Node>;

    /// Children of a group, in stored order.
    fn list_children(&self, group: &Node) -> Result<Vec<Child>>;

    /// Attributes of any node, in stored order.
    fn attributes(&self, node: &Node) -> Result<AttributeMap>;

    /// Read rows `[start, end)` along the first dimension.
    ///
    /// The returned array keeps every trailing dimension of the dataset.
    fn read_rows(&self, dataset: &DatasetInfo, start: usize, end: usize) -> Result<Rows>;
}

impl<T: DataFileService + ?Sized> DataFileService for &T {
    fn resolve(&self, path: &str) -> Result<Node> {
        (**self).resolve(path)
    }

    fn list_children(&self, group: &Node) -> Result<Vec<Child>> {
        (**self).list_children(group)
    }

    fn attributes(&self, node: &Node) -> Result<AttributeMap> {
        (**self).attributes(node)
    }

    fn read_rows(&self, dataset: &DatasetInfo, start: usize, end: usize) -> Result<Rows> {
        (**self).read_rows(dataset, start, end)
    }
}
