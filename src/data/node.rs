//! Node types for the HDF5 hierarchy.

use std::fmt;

/// Element type of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DType {
    /// Signed or unsigned integer of the given width in bits.
    Int {
        /// Width in bits.
        bits: u8,
        /// Whether the integer is signed.
        signed: bool,
    },
    /// IEEE float of the given width in bits.
    Float {
        /// Width in bits.
        bits: u8,
    },
    /// Fixed-width byte string. Each element is `width` raw bytes.
    FixedBytes {
        /// Width of one element in bytes.
        width: usize,
    },
    /// Variable-length text.
    VarString,
    /// Anything the browser cannot render as rows (compound, opaque, ...).
    Other(String),
}

impl DType {
    /// Whether elements are fixed-width byte strings needing UTF-8 decoding.
    pub fn is_fixed_bytes(&self) -> bool {
        matches!(self, DType::FixedBytes { .. })
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::Int { bits, signed: true } => write!(f, "int{}", bits),
            DType::Int { bits, signed: false } => write!(f, "uint{}", bits),
            DType::Float { bits } => write!(f, "float{}", bits),
            DType::FixedBytes { width } => write!(f, "|S{}", width),
            DType::VarString => write!(f, "str"),
            DType::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A dataset: a fixed-shape array of typed elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetInfo {
    /// Full path to the dataset.
    pub path: String,
    /// Dimension sizes, outermost first. Empty for scalars.
    pub shape: Vec<usize>,
    /// Element type.
    pub dtype: DType,
}

impl DatasetInfo {
    /// Create a new dataset description.
    pub fn new(path: impl Into<String>, shape: Vec<usize>, dtype: DType) -> Self {
        Self {
            path: path.into(),
            shape,
            dtype,
        }
    }

    /// Number of rows, i.e. the first dimension. Scalars have none.
    pub fn total_rows(&self) -> usize {
        self.shape.first().copied().unwrap_or(0)
    }
}

/// A resolved object in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A container of named children. Carries its own path.
    Group(String),
    /// A typed array.
    Dataset(DatasetInfo),
}

impl Node {
    /// Full path of this node.
    pub fn path(&self) -> &str {
        match self {
            Node::Group(path) => path,
            Node::Dataset(info) => &info.path,
        }
    }

    /// Kind label used in listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Group(_) => "Group",
            Node::Dataset(_) => "Dataset",
        }
    }
}

/// A named child of a group, in stored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    /// Link name within the parent group.
    pub name: String,
    /// The resolved child.
    pub node: Node,
}
