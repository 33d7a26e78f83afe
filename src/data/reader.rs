//! HDF5 file reader.
//!
//! Files are opened through netCDF-4, which stores everything as HDF5 and
//! reads plain HDF5 files as well. Groups map to groups, datasets map to
//! variables.

use super::{
    AttrValue, AttributeMap, Cell, Child, DType, DataFileService, DatasetInfo, Node, Rows,
};
use crate::error::{BrowseError, Result};
use crate::navigation::{child_path, ROOT};
use ndarray::IxDyn;
use netcdf::types::{FloatType, IntType, NcVariableType};
use netcdf::{Extent, Extents};
use std::fmt;
use std::path::{Path, PathBuf};

/// An open, read-only HDF5 file. Closed when dropped.
pub struct DataReader {
    path: PathBuf,
    file: netcdf::File,
}

impl fmt::Debug for DataReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataReader")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl DataReader {
    /// Open a file read-only.
    pub fn open(path: &Path) -> Result<Self> {
        let file = netcdf::open(path).map_err(|e| BrowseError::file_open(path.to_path_buf(), e))?;
        tracing::info!("Opened {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    fn group(&self, path: &str) -> Result<netcdf::Group<'_>> {
        let group = if path == ROOT {
            self.file.root()
        } else {
            self.file.group(path.trim_start_matches('/')).ok().flatten()
        };
        group.ok_or_else(|| BrowseError::not_found(path))
    }

    fn variable(&self, path: &str) -> Result<netcdf::Variable<'_>> {
        self.file
            .variable(path.trim_start_matches('/'))
            .ok_or_else(|| BrowseError::not_found(path))
    }

    fn dataset_info(var: &netcdf::Variable<'_>, path: &str) -> DatasetInfo {
        let mut shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();

        let dtype = match var.vartype() {
            NcVariableType::Int(IntType::I8) => DType::Int { bits: 8, signed: true },
            NcVariableType::Int(IntType::I16) => DType::Int { bits: 16, signed: true },
            NcVariableType::Int(IntType::I32) => DType::Int { bits: 32, signed: true },
            NcVariableType::Int(IntType::I64) => DType::Int { bits: 64, signed: true },
            NcVariableType::Int(IntType::U8) => DType::Int { bits: 8, signed: false },
            NcVariableType::Int(IntType::U16) => DType::Int { bits: 16, signed: false },
            NcVariableType::Int(IntType::U32) => DType::Int { bits: 32, signed: false },
            NcVariableType::Int(IntType::U64) => DType::Int { bits: 64, signed: false },
            NcVariableType::Float(FloatType::F32) => DType::Float { bits: 32 },
            NcVariableType::Float(FloatType::F64) => DType::Float { bits: 64 },
            // The innermost dimension of a char array is the string width.
            NcVariableType::Char if shape.len() >= 2 => DType::FixedBytes {
                width: shape.pop().unwrap_or(1),
            },
            NcVariableType::Char => DType::FixedBytes { width: 1 },
            NcVariableType::String => DType::VarString,
            other => DType::Other(format!("{:?}", other).to_lowercase()),
        };

        DatasetInfo::new(path, shape, dtype)
    }

    fn collect_attributes<'f>(attrs: impl Iterator<Item = netcdf::Attribute<'f>>) -> AttributeMap {
        attrs
            .map(|attr| (attr.name().to_string(), Self::attr_value(&attr)))
            .collect()
    }

    fn attr_value(attr: &netcdf::Attribute<'_>) -> AttrValue {
        use netcdf::AttributeValue;

        fn list<T>(values: Vec<T>, f: impl Fn(T) -> AttrValue) -> AttrValue {
            AttrValue::List(values.into_iter().map(f).collect())
        }

        match attr.value() {
            Ok(AttributeValue::Uchar(v)) => AttrValue::UInt(v.into()),
            Ok(AttributeValue::Schar(v)) => AttrValue::Int(v.into()),
            Ok(AttributeValue::Ushort(v)) => AttrValue::UInt(v.into()),
            Ok(AttributeValue::Short(v)) => AttrValue::Int(v.into()),
            Ok(AttributeValue::Uint(v)) => AttrValue::UInt(v.into()),
            Ok(AttributeValue::Int(v)) => AttrValue::Int(v.into()),
            Ok(AttributeValue::Ulonglong(v)) => AttrValue::UInt(v),
            Ok(AttributeValue::Longlong(v)) => AttrValue::Int(v),
            Ok(AttributeValue::Float(v)) => AttrValue::Float(v.into()),
            Ok(AttributeValue::Double(v)) => AttrValue::Float(v),
            Ok(AttributeValue::Str(v)) => AttrValue::Text(v),
            Ok(AttributeValue::Uchars(v)) => list(v, |x| AttrValue::UInt(x.into())),
            Ok(AttributeValue::Schars(v)) => list(v, |x| AttrValue::Int(x.into())),
            Ok(AttributeValue::Ushorts(v)) => list(v, |x| AttrValue::UInt(x.into())),
            Ok(AttributeValue::Shorts(v)) => list(v, |x| AttrValue::Int(x.into())),
            Ok(AttributeValue::Uints(v)) => list(v, |x| AttrValue::UInt(x.into())),
            Ok(AttributeValue::Ints(v)) => list(v, |x| AttrValue::Int(x.into())),
            Ok(AttributeValue::Ulonglongs(v)) => list(v, AttrValue::UInt),
            Ok(AttributeValue::Longlongs(v)) => list(v, AttrValue::Int),
            Ok(AttributeValue::Floats(v)) => list(v, |x| AttrValue::Float(x.into())),
            Ok(AttributeValue::Doubles(v)) => list(v, AttrValue::Float),
            Ok(AttributeValue::Strs(v)) => list(v, AttrValue::Text),
            Err(e) => AttrValue::Text(format!("<unreadable: {}>", e)),
        }
    }
}

impl DataFileService for DataReader {
    fn resolve(&self, path: &str) -> Result<Node> {
        if path == ROOT || self.group(path).is_ok() {
            return Ok(Node::Group(path.to_string()));
        }
        let var = self.variable(path)?;
        Ok(Node::Dataset(Self::dataset_info(&var, path)))
    }

    fn list_children(&self, group: &Node) -> Result<Vec<Child>> {
        let Node::Group(path) = group else {
            return Err(BrowseError::NotAGroup {
                path: group.path().to_string(),
            });
        };
        let parent = self.group(path)?;

        let mut children: Vec<Child> = parent
            .groups()
            .map(|sub| {
                let name = sub.name().to_string();
                Child {
                    node: Node::Group(child_path(path, &name)),
                    name,
                }
            })
            .collect();

        for var in parent.variables() {
            let name = var.name().to_string();
            let var_path = child_path(path, &name);
            children.push(Child {
                node: Node::Dataset(Self::dataset_info(&var, &var_path)),
                name,
            });
        }

        // HDF5 iterates links by name unless creation order is tracked.
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }

    fn attributes(&self, node: &Node) -> Result<AttributeMap> {
        match node {
            Node::Group(path) => Ok(Self::collect_attributes(self.group(path)?.attributes())),
            Node::Dataset(info) => Ok(Self::collect_attributes(
                self.variable(&info.path)?.attributes(),
            )),
        }
    }

    fn read_rows(&self, dataset: &DatasetInfo, start: usize, end: usize) -> Result<Rows> {
        let path = dataset.path.as_str();
        let var = self.variable(path)?;
        let dims: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
        let Some(&total) = dims.first() else {
            return Err(BrowseError::read(path, "scalar dataset has no rows"));
        };

        let end = end.min(total);
        let start = start.min(end);
        let mut extents: Vec<Extent> = vec![(start..end).into()];
        extents.extend(dims[1..].iter().map(|_| Extent::from(..)));

        let mut shape = dims.clone();
        shape[0] = end - start;

        let read_err = |e: netcdf::Error| BrowseError::read(path, e);

        macro_rules! read_as {
            ($t:ty, $cell:expr) => {{
                let values: Vec<$t> = var.get_values(Extents::from(extents)).map_err(read_err)?;
                values.into_iter().map($cell).collect::<Vec<Cell>>()
            }};
        }

        let cells = match var.vartype() {
            NcVariableType::Int(IntType::I8) => read_as!(i8, |v| Cell::Int(v.into())),
            NcVariableType::Int(IntType::I16) => read_as!(i16, |v| Cell::Int(v.into())),
            NcVariableType::Int(IntType::I32) => read_as!(i32, |v| Cell::Int(v.into())),
            NcVariableType::Int(IntType::I64) => read_as!(i64, Cell::Int),
            NcVariableType::Int(IntType::U8) => read_as!(u8, |v| Cell::UInt(v.into())),
            NcVariableType::Int(IntType::U16) => read_as!(u16, |v| Cell::UInt(v.into())),
            NcVariableType::Int(IntType::U32) => read_as!(u32, |v| Cell::UInt(v.into())),
            NcVariableType::Int(IntType::U64) => read_as!(u64, Cell::UInt),
            NcVariableType::Float(FloatType::F32) => read_as!(f32, |v| Cell::Float(v.into())),
            NcVariableType::Float(FloatType::F64) => read_as!(f64, Cell::Float),
            NcVariableType::Char => {
                let bytes = var.get_raw_values(Extents::from(extents)).map_err(read_err)?;
                let width = if shape.len() >= 2 {
                    shape.pop().unwrap_or(1).max(1)
                } else {
                    1
                };
                bytes.chunks(width).map(|c| Cell::Bytes(c.to_vec())).collect()
            }
            NcVariableType::String => {
                let mut cells = Vec::with_capacity(shape.iter().product());
                for idx in ndarray::indices(IxDyn(&shape)) {
                    let at: Vec<Extent> = (0..shape.len())
                        .map(|k| Extent::from(if k == 0 { idx[0] + start } else { idx[k] }))
                        .collect();
                    let text = var.get_string(Extents::from(at)).map_err(read_err)?;
                    cells.push(Cell::Text(text));
                }
                cells
            }
            _ => {
                return Err(BrowseError::Unsupported {
                    path: path.to_string(),
                    dtype: dataset.dtype.to_string(),
                });
            }
        };

        Rows::from_shape_vec(IxDyn(&shape), cells).map_err(|e| BrowseError::read(path, e))
    }
}
