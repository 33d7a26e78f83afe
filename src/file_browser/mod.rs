//! File selection - finding data files and running one browsing session.
//!
//! The session lists matching files in a directory, opens the chosen one,
//! hands it to the [`Explorer`](crate::explorer::Explorer) and releases it
//! again when the user goes back to file selection or quits.

mod session;

pub use session::Session;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Regular files in `dir` whose extension is exactly `extension`, by name.
///
/// Symlinks are followed; hidden files are included like any other.
pub fn list_data_files(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect();

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Display name of a file (its basename).
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
