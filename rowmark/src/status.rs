//! Per-row status records.

use serde::{Deserialize, Serialize};

/// Validation error attached to a row.
///
/// Errors are domain data: they are stored on the row's status and queried
/// through `error_rows`, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellError {
    /// The column that failed validation.
    pub column: String,
    /// Human-readable validation message.
    pub message: String,
    /// Optional error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl CellError {
    /// Creates a new cell error.
    pub fn new(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            message: message.into(),
            code: None,
        }
    }

    /// Creates a new cell error with an error code.
    pub fn with_code(
        column: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

impl std::fmt::Display for CellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(code) = &self.code {
            write!(f, "{}: {} ({})", self.column, self.message, code)
        } else {
            write!(f, "{}: {}", self.column, self.message)
        }
    }
}

/// Selection and validity metadata for one row.
///
/// Lives at the same index as its row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowStatus {
    /// Whether the row's checkbox is ticked.
    pub checked: bool,
    /// Validation errors, in the order they were reported.
    pub errors: Vec<CellError>,
}

impl RowStatus {
    /// Check if the row has any validation errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Where `add_item` places a new row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertPosition {
    /// Append after the last row.
    #[default]
    End,
    /// Insert before the first row.
    Start,
}

/// A row that currently carries validation errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRow<T> {
    /// The row itself.
    pub data: T,
    /// Its index in the dataset.
    pub index: usize,
}
