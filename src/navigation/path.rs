//! Path algebra.

/// Path of the root group.
pub const ROOT: &str = "/";

/// Path of the child `name` inside `parent`.
pub fn child_path(parent: &str, name: &str) -> String {
    if parent == ROOT {
        format!("/{}", name)
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Path of the group containing `path`. The root is its own parent.
pub fn parent_path(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => ROOT.to_string(),
        Some(idx) => path[..idx].to_string(),
    }
}
