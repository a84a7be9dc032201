//! Row selection and row status tracking for data-grid widgets.
//!
//! `rowmark` keeps a per-row checked flag and a per-row validation error list
//! aligned with an external dataset, and derives the tri-state header checkbox
//! shown above a paginated table.
//!
//! # Example
//!
//! ```
//! use rowmark::prelude::*;
//! use serde_json::json;
//!
//! let mut table = Table::with_rows(
//!     TableConfig::new("users"),
//!     vec![json!({"id": 1}), json!({"id": 2})],
//! );
//!
//! table.check_row(0, true).unwrap();
//! table.check_row(1, true).unwrap();
//! let summary = table.check_all(true);
//!
//! assert!(summary.all_checked);
//! assert_eq!(table.header().indicator(), HeaderIndicator::AllChecked);
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod header;
pub mod row;
pub mod selection;
pub mod status;
pub mod store;
pub mod table;
pub mod view;

pub use config::TableConfig;
pub use error::TableError;
pub use table::{Table, TableId};

pub mod prelude {
    pub use crate::config::{EmptyPolicy, TableConfig};
    pub use crate::error::TableError;
    pub use crate::event::{Listeners, SelectionEvent, StoreEvent, SubscriptionId};
    pub use crate::header::{HeaderCheckbox, HeaderIndicator, HeaderSink, HeaderState, HeaderTarget, HeaderUpdate};
    pub use crate::row::TableRow;
    pub use crate::selection::{SelectionCoordinator, SelectionScope, SelectionSummary};
    pub use crate::status::{CellError, ErrorRow, InsertPosition, RowStatus};
    pub use crate::store::RowStatusStore;
    pub use crate::table::{Table, TableId};
    pub use crate::view::{AllRows, RowView};
}
