//! Table facade.
//!
//! One [`Table`] per rendered grid. It owns the row status store, the
//! selection coordinator, the visible row view and the configuration, and
//! exposes the operations a host binds to its widgets.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;
use serde_json::Value;

use crate::config::TableConfig;
use crate::error::TableError;
use crate::event::{SelectionEvent, StoreEvent, SubscriptionId};
use crate::header::HeaderSink;
use crate::row::TableRow;
use crate::selection::{SelectionCoordinator, SelectionScope, SelectionSummary};
use crate::status::{ErrorRow, InsertPosition};
use crate::store::RowStatusStore;
use crate::view::{AllRows, RowView};

/// Unique identifier for a Table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Row selection and status state for one data grid.
///
/// # Example
///
/// ```
/// use rowmark::prelude::*;
/// use serde_json::json;
///
/// let mut table = Table::new(TableConfig::new("people"));
/// table.set_data(vec![json!({"id": 1}), json!({"id": 2})]);
/// table.add_item(json!({"id": 3}));
/// table.remove_items("id", &[json!(2)]);
///
/// assert_eq!(table.data(), &[json!({"id": 1}), json!({"id": 3})]);
/// ```
pub struct Table<T: TableRow> {
    id: TableId,
    config: TableConfig,
    store: RowStatusStore<T>,
    coordinator: SelectionCoordinator<T>,
    view: Box<dyn RowView>,
    dirty: bool,
}

impl<T: TableRow> Table<T> {
    /// Create an empty table.
    pub fn new(config: TableConfig) -> Self {
        Self::with_rows(config, Vec::new())
    }

    /// Create a table with initial rows, all unchecked and valid.
    pub fn with_rows(config: TableConfig, rows: Vec<T>) -> Self {
        let store = RowStatusStore::with_rows(rows).with_empty_policy(config.empty_policy);
        Self {
            id: TableId::new(),
            config,
            store,
            coordinator: SelectionCoordinator::new(HeaderSink::new()),
            view: Box::new(AllRows),
            dirty: false,
        }
    }

    /// Use host-supplied header targets.
    pub fn with_header(mut self, header: HeaderSink) -> Self {
        self.coordinator = SelectionCoordinator::new(header);
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The row status store.
    pub fn store(&self) -> &RowStatusStore<T> {
        &self.store
    }

    /// Mutable access to the row status store, for validation and checked
    /// flags the host manages itself.
    pub fn store_mut(&mut self) -> &mut RowStatusStore<T> {
        self.dirty = true;
        &mut self.store
    }

    /// The header checkboxes.
    pub fn header(&self) -> &HeaderSink {
        self.coordinator.header()
    }

    // -------------------------------------------------------------------------
    // Dataset
    // -------------------------------------------------------------------------

    /// All rows, in dataset order.
    pub fn data(&self) -> &[T] {
        self.store.rows()
    }

    /// Replace the dataset. Every status is reset.
    pub fn set_data(&mut self, rows: Vec<T>) {
        debug!("{}: set_data ({} rows)", self.config.name, rows.len());
        self.store.replace_all(rows);
        self.dirty = true;
    }

    /// Add a row at the configured default position.
    pub fn add_item(&mut self, row: T) -> usize {
        self.add_item_at(row, self.config.insert_position)
    }

    /// Add a row at the given edge. Returns its index.
    pub fn add_item_at(&mut self, row: T, position: InsertPosition) -> usize {
        self.dirty = true;
        self.store.append(row, position)
    }

    /// Remove the rows whose `key_field` matches one of `values`.
    pub fn remove_items(&mut self, key_field: &str, values: &[Value]) -> usize {
        let removed = self.store.remove_by_key(key_field, values);
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }

    /// Remove rows by the configured key field.
    pub fn remove_items_by_key(&mut self, values: &[Value]) -> usize {
        let removed = self.store.remove_by_key(&self.config.key_field, values);
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }

    /// Rows that currently carry validation errors.
    pub fn error_rows(&self) -> Vec<ErrorRow<T>> {
        self.store.error_rows()
    }

    /// Rows the host's editing layer reported as changed.
    pub fn change_data(&self) -> &[T] {
        self.store.change_data()
    }

    // -------------------------------------------------------------------------
    // Visible rows
    // -------------------------------------------------------------------------

    /// Set the visible row view computed by the host's pager or filter.
    pub fn set_view(&mut self, view: impl RowView + 'static) {
        self.view = Box::new(view);
        self.dirty = true;
    }

    /// Dataset indices currently visible.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.view.visible_indices(self.store.len())
    }

    /// Rows currently visible, in display order.
    pub fn visible_rows(&self) -> Vec<T> {
        self.visible_indices()
            .into_iter()
            .filter_map(|index| self.store.row(index).cloned())
            .collect()
    }

    /// Checked rows among the visible ones.
    pub fn selection(&self) -> Vec<T> {
        SelectionCoordinator::selection(&self.store, self.view.as_ref())
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Process a selection toggle after checked flags changed.
    pub fn toggle(&mut self, scope: SelectionScope, row_index: Option<usize>) -> SelectionSummary {
        self.dirty = true;
        self.coordinator
            .toggle(&self.store, self.view.as_ref(), scope, row_index)
    }

    /// Row checkbox clicked: set its flag and toggle the current page.
    pub fn check_row(&mut self, index: usize, checked: bool) -> Result<SelectionSummary, TableError> {
        self.store.set_checked(index, checked)?;
        Ok(self.toggle(SelectionScope::Current, Some(index)))
    }

    /// Current-page header checkbox clicked.
    pub fn check_page(&mut self, checked: bool) -> SelectionSummary {
        let visible = self.visible_indices();
        self.store.set_checked_where(&visible, checked);
        self.toggle(SelectionScope::Current, None)
    }

    /// All-pages header checkbox clicked.
    pub fn check_all(&mut self, checked: bool) -> SelectionSummary {
        self.store.set_all_checked(checked);
        self.toggle(SelectionScope::All, None)
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Register a callback for selection events.
    pub fn on_selection<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SelectionEvent<T>) + Send + 'static,
    {
        self.coordinator.subscribe(listener)
    }

    /// Register a callback for dataset and status mutations.
    pub fn on_store<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + Send + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Remove a selection callback.
    pub fn unsubscribe_selection(&mut self, id: SubscriptionId) -> bool {
        self.coordinator.unsubscribe(id)
    }

    /// Remove a store callback.
    pub fn unsubscribe_store(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    // -------------------------------------------------------------------------
    // Render tracking
    // -------------------------------------------------------------------------

    /// Check if the table changed since the last `clear_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after rendering.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl<T: TableRow + std::fmt::Debug> std::fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("store", &self.store)
            .field("header", self.coordinator.header())
            .field("dirty", &self.dirty)
            .finish()
    }
}
