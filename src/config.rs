//! Runtime configuration.

use crate::explorer::DEFAULT_VALUE_WIDTH;
use crate::navigation::DEFAULT_PAGE_SIZE;
use std::path::PathBuf;

/// Extension of the files offered for browsing.
pub const DEFAULT_EXTENSION: &str = "h5";

/// Settings for a browsing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned for data files.
    pub data_dir: PathBuf,
    /// File extension to offer, without the leading dot.
    pub extension: String,
    /// Rows per page when a dataset is entered.
    pub page_size: usize,
    /// Attribute values wider than this many columns are truncated.
    pub value_width: usize,
    /// Style output with ANSI escapes.
    pub color: bool,
}

impl Config {
    /// Use `extension`, with or without a leading dot.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Scan `dir` instead of the working directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Start dataset pages at `rows` rows (at least one).
    pub fn with_page_size(mut self, rows: usize) -> Self {
        self.page_size = rows.max(1);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            value_width: DEFAULT_VALUE_WIDTH,
            color: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_scan_working_directory_for_h5() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.extension, "h5");
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn builders_normalise_input() {
        let config = Config::default().with_extension(".hdf5").with_page_size(0);
        assert_eq!(config.extension, "hdf5");
        assert_eq!(config.page_size, 1);
    }
}
