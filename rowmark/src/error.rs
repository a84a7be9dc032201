//! Error types

/// Error returned by index-based status mutations.
///
/// Dataset mutations (`set_data`, `add_item`, `remove_items`) and selection
/// toggles never fail; only callers addressing a row by index can miss.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The index does not address a row in the current dataset.
    #[error("Row {index} out of range for table with {len} rows")]
    RowOutOfRange { index: usize, len: usize },
}

impl TableError {
    /// Creates a new out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::RowOutOfRange { index, len }
    }
}
