//! Navigation primitives.
//!
//! Path algebra for `/`-delimited node paths and the mutable cursor the
//! explorer carries while a file is open.

mod path;
mod state;

pub use path::{child_path, parent_path, ROOT};
pub use state::{NavigationState, DEFAULT_PAGE_SIZE};
