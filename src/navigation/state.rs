//! Navigation cursor and dataset paging.

use super::ROOT;

/// Rows shown per page when a dataset is entered.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Where the explorer is, and which rows of the current dataset are shown.
///
/// `row_offset` and `page_size` only mean something while a dataset is
/// being browsed; they are reset every time one is entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Path of the node being browsed.
    pub current_path: String,
    /// First row of the current page.
    pub row_offset: usize,
    /// Rows per page. Always positive.
    pub page_size: usize,
    initial_page_size: usize,
}

impl NavigationState {
    /// Start at the root with the given initial page size (clamped to at least 1).
    pub fn new(initial_page_size: usize) -> Self {
        let initial_page_size = initial_page_size.max(1);
        Self {
            current_path: ROOT.to_string(),
            row_offset: 0,
            page_size: initial_page_size,
            initial_page_size,
        }
    }

    /// Whether the cursor is at the root group.
    pub fn at_root(&self) -> bool {
        self.current_path == ROOT
    }

    /// Reset paging for a fresh dataset visit.
    pub fn enter_dataset(&mut self) {
        self.row_offset = 0;
        self.page_size = self.initial_page_size;
    }

    /// Exclusive end of the current page.
    pub fn page_end(&self, total_rows: usize) -> usize {
        self.row_offset.saturating_add(self.page_size).min(total_rows)
    }

    /// Whether the offset has run past a non-empty dataset.
    pub fn exhausted(&self, total_rows: usize) -> bool {
        total_rows > 0 && self.row_offset >= total_rows
    }

    /// Skip `rows` rows forward. Zero is ignored.
    pub fn advance(&mut self, rows: usize) {
        if rows > 0 {
            self.row_offset = self.row_offset.saturating_add(rows);
        }
    }

    /// Show the whole dataset as a single page from the start.
    ///
    /// The offset always returns to the first row. Returns `false`, keeping
    /// the page size, when there are no rows to show. The enlarged page size
    /// persists until the dataset is left.
    pub fn show_all(&mut self, total_rows: usize) -> bool {
        self.row_offset = 0;
        if total_rows == 0 {
            return false;
        }
        self.page_size = total_rows;
        true
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_through_twenty_five_rows() {
        let mut state = NavigationState::default();
        state.enter_dataset();
        assert_eq!((state.row_offset, state.page_end(25)), (0, 10));

        state.advance(10);
        assert_eq!((state.row_offset, state.page_end(25)), (10, 20));

        state.advance(10);
        assert_eq!((state.row_offset, state.page_end(25)), (20, 25));

        state.advance(10);
        assert!(state.exhausted(25));
    }

    #[test]
    fn show_all_persists_and_compounds_with_advance() {
        let mut state = NavigationState::default();
        state.enter_dataset();
        state.advance(5);
        assert!(state.show_all(25));
        assert_eq!((state.row_offset, state.page_size), (0, 25));

        state.advance(3);
        assert_eq!((state.row_offset, state.page_end(25)), (3, 25));

        state.enter_dataset();
        assert_eq!((state.row_offset, state.page_size), (0, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn show_all_on_empty_dataset_rewinds_but_keeps_page_size() {
        let mut state = NavigationState::default();
        state.enter_dataset();
        state.advance(5);
        assert!(!state.show_all(0));
        assert_eq!((state.row_offset, state.page_size), (0, DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn empty_dataset_is_never_exhausted() {
        let state = NavigationState::default();
        assert!(!state.exhausted(0));
        assert_eq!(state.page_end(0), 0);
    }

    #[test]
    fn starts_at_root_with_a_positive_page() {
        let state = NavigationState::new(0);
        assert!(state.at_root());
        assert_eq!(state.page_size, 1);
    }
}
