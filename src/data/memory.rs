//! In-memory data file.
//!
//! Holds a whole hierarchy in memory so the explorer can be driven without an
//! HDF5 file on disk. Reads are counted, and can be made to fail.

use super::{AttrValue, AttributeMap, Cell, Child, DType, DatasetInfo, Node, Rows};
use crate::error::{BrowseError, Result};
use crate::navigation::parent_path;
use ndarray::{Axis, IxDyn, Slice};
use std::cell::Cell as Counter;

#[derive(Debug, Clone)]
enum Entry {
    Group,
    Dataset { dtype: DType, data: Rows },
}

#[derive(Debug, Clone)]
struct Object {
    path: String,
    entry: Entry,
    attrs: AttributeMap,
}

/// A hierarchy of groups and datasets held in memory.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    objects: Vec<Object>,
    reads: Counter<usize>,
    read_failure: Option<String>,
}

impl Default for MemoryFile {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFile {
    /// Create a file holding only the root group.
    pub fn new() -> Self {
        Self {
            objects: vec![Object {
                path: "/".to_string(),
                entry: Entry::Group,
                attrs: AttributeMap::new(),
            }],
            reads: Counter::new(0),
            read_failure: None,
        }
    }

    /// Add a group. Its parent must already exist.
    pub fn with_group(mut self, path: &str) -> Self {
        self.push(path, Entry::Group);
        self
    }

    /// Add a dataset. Its parent must already exist.
    ///
    /// # Panics
    /// If `cells` does not fill `shape`.
    pub fn with_dataset(mut self, path: &str, shape: &[usize], dtype: DType, cells: Vec<Cell>) -> Self {
        let data = Rows::from_shape_vec(IxDyn(shape), cells)
            .unwrap_or_else(|e| panic!("dataset {} does not match its shape: {}", path, e));
        self.push(path, Entry::Dataset { dtype, data });
        self
    }

    /// Attach an attribute to an existing object.
    pub fn with_attr(mut self, path: &str, key: &str, value: AttrValue) -> Self {
        if let Some(object) = self.objects.iter_mut().find(|o| o.path == path) {
            object.attrs.insert(key, value);
        }
        self
    }

    /// Make every subsequent row read fail with `reason`.
    pub fn failing_reads(mut self, reason: impl Into<String>) -> Self {
        self.read_failure = Some(reason.into());
        self
    }

    /// Remove an object and everything below it, as an external writer might.
    pub fn remove(&mut self, path: &str) {
        let prefix = format!("{}/", path);
        self.objects
            .retain(|o| o.path != path && !o.path.starts_with(&prefix));
    }

    /// Number of `read_rows` calls made so far.
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    fn push(&mut self, path: &str, entry: Entry) {
        debug_assert!(
            self.objects.iter().any(|o| o.path == parent_path(path)),
            "parent of {} must exist",
            path
        );
        self.objects.push(Object {
            path: path.to_string(),
            entry,
            attrs: AttributeMap::new(),
        });
    }

    fn find(&self, path: &str) -> Result<&Object> {
        self.objects
            .iter()
            .find(|o| o.path == path)
            .ok_or_else(|| BrowseError::not_found(path))
    }

    fn node_of(object: &Object) -> Node {
        match &object.entry {
            Entry::Group => Node::Group(object.path.clone()),
            Entry::Dataset { dtype, data } => Node::Dataset(DatasetInfo::new(
                object.path.clone(),
                data.shape().to_vec(),
                dtype.clone(),
            )),
        }
    }
}

impl super::DataFileService for MemoryFile {
    fn resolve(&self, path: &str) -> Result<Node> {
        self.find(path).map(Self::node_of)
    }

    fn list_children(&self, group: &Node) -> Result<Vec<Child>> {
        let Node::Group(path) = group else {
            return Err(BrowseError::NotAGroup {
                path: group.path().to_string(),
            });
        };
        self.find(path)?;

        Ok(self
            .objects
            .iter()
            .filter(|o| o.path != "/" && parent_path(&o.path) == *path)
            .map(|o| Child {
                name: o.path.rsplit('/').next().unwrap_or_default().to_string(),
                node: Self::node_of(o),
            })
            .collect())
    }

    fn attributes(&self, node: &Node) -> Result<AttributeMap> {
        Ok(self.find(node.path())?.attrs.clone())
    }

    fn read_rows(&self, dataset: &DatasetInfo, start: usize, end: usize) -> Result<Rows> {
        self.reads.set(self.reads.get() + 1);
        if let Some(reason) = &self.read_failure {
            return Err(BrowseError::read(&dataset.path, reason));
        }

        let Entry::Dataset { data, .. } = &self.find(&dataset.path)?.entry else {
            return Err(BrowseError::NotADataset {
                path: dataset.path.clone(),
            });
        };
        if data.ndim() == 0 {
            return Err(BrowseError::read(&dataset.path, "scalar dataset has no rows"));
        }

        let end = end.min(data.len_of(Axis(0)));
        let start = start.min(end);
        Ok(data
            .slice_axis(Axis(0), Slice::from(start..end))
            .to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataFileService;

    fn sample() -> MemoryFile {
        MemoryFile::new()
            .with_group("/weather")
            .with_dataset(
                "/weather/temp",
                &[4, 2],
                DType::Int { bits: 64, signed: true },
                (0..8).map(Cell::Int).collect(),
            )
            .with_dataset("/meta", &[1], DType::VarString, vec![Cell::Text("v1".into())])
            .with_attr("/", "title", AttrValue::Text("demo".into()))
    }

    #[test]
    fn children_come_back_in_insertion_order() {
        let file = sample();
        let root = file.resolve("/").unwrap();
        let names: Vec<String> = file
            .list_children(&root)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["weather", "meta"]);
    }

    #[test]
    fn read_rows_slices_first_axis_and_counts() {
        let file = sample();
        let Node::Dataset(info) = file.resolve("/weather/temp").unwrap() else {
            panic!("expected dataset");
        };

        let rows = file.read_rows(&info, 1, 3).unwrap();
        assert_eq!(rows.shape(), &[2, 2]);
        assert_eq!(rows[IxDyn(&[0, 0])], Cell::Int(2));
        assert_eq!(file.read_count(), 1);
    }

    #[test]
    fn removed_paths_stop_resolving() {
        let mut file = sample();
        file.remove("/weather");
        assert!(file.resolve("/weather").unwrap_err().is_not_found());
        assert!(file.resolve("/weather/temp").unwrap_err().is_not_found());
        assert!(file.resolve("/meta").is_ok());
    }

    #[test]
    fn failing_reads_report_the_reason() {
        let file = sample().failing_reads("out of memory");
        let Node::Dataset(info) = file.resolve("/meta").unwrap() else {
            panic!("expected dataset");
        };
        let err = file.read_rows(&info, 0, 1).unwrap_err();
        assert!(err.to_string().contains("out of memory"));
    }
}
