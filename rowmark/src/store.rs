//! Row status store.
//!
//! Owns the dataset and a parallel sequence of [`RowStatus`] records. Every
//! mutation touches both sequences together, so `rows.len() ==
//! statuses.len()` holds whenever control returns to the caller.

use log::{debug, trace};
use serde_json::Value;

use crate::config::EmptyPolicy;
use crate::error::TableError;
use crate::event::{Listeners, StoreEvent, SubscriptionId};
use crate::row::TableRow;
use crate::status::{CellError, ErrorRow, InsertPosition, RowStatus};

/// Dataset plus per-row selection and validation state.
#[derive(Debug)]
pub struct RowStatusStore<T: TableRow> {
    /// The rows, in dataset order.
    rows: Vec<T>,
    /// One status per row, same order.
    statuses: Vec<RowStatus>,
    /// Rows reported as edited by the host since the last `replace_all`.
    changes: Vec<T>,
    /// Where the most recent `append` inserted.
    last_insert: Option<InsertPosition>,
    /// Result of `is_all_checked` when there are no rows.
    empty_policy: EmptyPolicy,
    /// Store subscribers.
    listeners: Listeners<StoreEvent>,
}

impl<T: TableRow> Default for RowStatusStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TableRow> RowStatusStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            statuses: Vec::new(),
            changes: Vec::new(),
            last_insert: None,
            empty_policy: EmptyPolicy::default(),
            listeners: Listeners::new(),
        }
    }

    /// Create a store holding `rows`, all unchecked and valid.
    pub fn with_rows(rows: Vec<T>) -> Self {
        let mut store = Self::new();
        store.statuses = vec![RowStatus::default(); rows.len()];
        store.rows = rows;
        store
    }

    /// Set the empty dataset policy.
    pub fn with_empty_policy(mut self, policy: EmptyPolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Register a callback for dataset and status mutations.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + Send + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Remove a store callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn notify(&mut self, event: StoreEvent) {
        debug_assert_eq!(self.rows.len(), self.statuses.len());
        self.listeners.emit(&event);
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, in dataset order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Get a row by index.
    pub fn row(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    /// All status records, aligned with `rows()`.
    pub fn statuses(&self) -> &[RowStatus] {
        &self.statuses
    }

    /// Get a status record by index.
    pub fn status(&self, index: usize) -> Option<&RowStatus> {
        self.statuses.get(index)
    }

    /// Where the most recent `append` inserted, if any since `replace_all`.
    pub fn last_insert_position(&self) -> Option<InsertPosition> {
        self.last_insert
    }

    // -------------------------------------------------------------------------
    // Dataset mutation
    // -------------------------------------------------------------------------

    /// Install a new dataset, resetting every status to its default.
    pub fn replace_all(&mut self, rows: Vec<T>) {
        self.statuses = vec![RowStatus::default(); rows.len()];
        self.rows = rows;
        self.changes.clear();
        self.last_insert = None;
        debug!("Replaced dataset with {} rows", self.rows.len());
        let len = self.rows.len();
        self.notify(StoreEvent::Replaced { len });
    }

    /// Insert a row with a default status at the given edge.
    ///
    /// Returns the index of the new row.
    pub fn append(&mut self, row: T, position: InsertPosition) -> usize {
        let index = match position {
            InsertPosition::End => {
                self.rows.push(row);
                self.statuses.push(RowStatus::default());
                self.rows.len() - 1
            }
            InsertPosition::Start => {
                self.rows.insert(0, row);
                self.statuses.insert(0, RowStatus::default());
                0
            }
        };
        self.last_insert = Some(position);
        debug!("Inserted row at {} ({:?})", index, position);
        self.notify(StoreEvent::Inserted { index });
        index
    }

    /// Remove, for each value, the first row whose `key_field` equals it.
    ///
    /// Values that match no row are skipped. Returns the number of rows
    /// removed.
    pub fn remove_by_key(&mut self, key_field: &str, values: &[Value]) -> usize {
        let mut removed = 0;
        for value in values {
            let Some(index) = self.position_by_key(key_field, value) else {
                trace!("No row with {} == {}, skipping", key_field, value);
                continue;
            };
            self.rows.remove(index);
            self.statuses.remove(index);
            removed += 1;
            debug!("Removed row {} ({} == {})", index, key_field, value);
            self.notify(StoreEvent::Removed { index });
        }
        removed
    }

    /// Index of the first row whose `key_field` equals `value`.
    pub fn position_by_key(&self, key_field: &str, value: &Value) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.field(key_field).as_ref() == Some(value))
    }

    // -------------------------------------------------------------------------
    // Checked flags
    // -------------------------------------------------------------------------

    /// Set the checked flag of one row.
    pub fn set_checked(&mut self, index: usize, checked: bool) -> Result<(), TableError> {
        self.status_mut(index)?.checked = checked;
        self.notify(StoreEvent::CheckedChanged);
        Ok(())
    }

    /// Set the checked flag of several rows. Out-of-range indices are ignored.
    pub fn set_checked_where(&mut self, indices: &[usize], checked: bool) {
        for &index in indices {
            if let Some(status) = self.statuses.get_mut(index) {
                status.checked = checked;
            }
        }
        self.notify(StoreEvent::CheckedChanged);
    }

    /// Set the checked flag of every row.
    pub fn set_all_checked(&mut self, checked: bool) {
        for status in &mut self.statuses {
            status.checked = checked;
        }
        self.notify(StoreEvent::CheckedChanged);
    }

    /// Get the number of checked rows across the whole dataset.
    pub fn checked_count(&self) -> usize {
        self.statuses.iter().filter(|s| s.checked).count()
    }

    /// Check if every row in the dataset is checked.
    ///
    /// An empty dataset answers with the configured [`EmptyPolicy`]; a `true`
    /// here is not evidence of a user selection.
    pub fn is_all_checked(&self) -> bool {
        if self.statuses.is_empty() {
            return self.empty_policy.all_checked();
        }
        self.statuses.iter().all(|s| s.checked)
    }

    // -------------------------------------------------------------------------
    // Validation errors
    // -------------------------------------------------------------------------

    /// Replace the error list of one row.
    pub fn set_errors(&mut self, index: usize, errors: Vec<CellError>) -> Result<(), TableError> {
        self.status_mut(index)?.errors = errors;
        self.notify(StoreEvent::ErrorsChanged { index });
        Ok(())
    }

    /// Append one error to a row.
    pub fn push_error(&mut self, index: usize, error: CellError) -> Result<(), TableError> {
        self.status_mut(index)?.errors.push(error);
        self.notify(StoreEvent::ErrorsChanged { index });
        Ok(())
    }

    /// Clear the error list of one row.
    pub fn clear_errors(&mut self, index: usize) -> Result<(), TableError> {
        self.status_mut(index)?.errors.clear();
        self.notify(StoreEvent::ErrorsChanged { index });
        Ok(())
    }

    /// Run `rule` over every row, replacing each row's error list with its
    /// result. Returns the number of rows left with errors.
    pub fn validate<F>(&mut self, rule: F) -> usize
    where
        F: Fn(&T) -> Vec<CellError>,
    {
        let mut invalid = 0;
        for index in 0..self.rows.len() {
            let errors = rule(&self.rows[index]);
            let status = &mut self.statuses[index];
            if status.errors == errors {
                if status.has_errors() {
                    invalid += 1;
                }
                continue;
            }
            status.errors = errors;
            if status.has_errors() {
                invalid += 1;
            }
            self.notify(StoreEvent::ErrorsChanged { index });
        }
        debug!("Validated {} rows, {} invalid", self.rows.len(), invalid);
        invalid
    }

    /// Every row carrying validation errors, in ascending index order.
    pub fn error_rows(&self) -> Vec<ErrorRow<T>> {
        self.rows
            .iter()
            .zip(&self.statuses)
            .enumerate()
            .filter(|(_, (_, status))| status.has_errors())
            .map(|(index, (row, _))| ErrorRow {
                data: row.clone(),
                index,
            })
            .collect()
    }

    fn status_mut(&mut self, index: usize) -> Result<&mut RowStatus, TableError> {
        let len = self.statuses.len();
        self.statuses
            .get_mut(index)
            .ok_or_else(|| TableError::out_of_range(index, len))
    }

    // -------------------------------------------------------------------------
    // Change log
    // -------------------------------------------------------------------------

    /// Record a row edited by the host's editing layer.
    pub fn record_change(&mut self, row: T) {
        self.changes.push(row);
    }

    /// Rows recorded with `record_change` since the last `replace_all`.
    pub fn change_data(&self) -> &[T] {
        &self.changes
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ids(store: &RowStatusStore<Value>) -> Vec<Value> {
        store.rows().iter().map(|r| r["id"].clone()).collect()
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut store =
            RowStatusStore::with_rows(vec![json!({"id": 1}), json!({"id": 1}), json!({"id": 2})]);
        store.set_checked(1, true).unwrap();

        assert_eq!(store.remove_by_key("id", &[json!(1)]), 1);

        assert_eq!(ids(&store), vec![json!(1), json!(2)]);
        assert!(store.status(0).unwrap().checked);
    }

    #[test]
    fn test_empty_policy() {
        let store = RowStatusStore::<Value>::new();
        assert!(store.is_all_checked());

        let store = RowStatusStore::<Value>::new().with_empty_policy(EmptyPolicy::NoneChecked);
        assert!(!store.is_all_checked());
    }

    #[test]
    fn test_status_out_of_range() {
        let mut store = RowStatusStore::with_rows(vec![json!({"id": 1})]);
        assert_eq!(
            store.set_checked(3, true),
            Err(TableError::RowOutOfRange { index: 3, len: 1 })
        );
        assert!(store.push_error(1, CellError::new("id", "bad")).is_err());
    }
}
